//! Wire types for issues, ingredients, attachments and chat messages

use serde::{Deserialize, Serialize};

/// Lifecycle status of an issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueStatus {
    /// Saved by the client but not yet submitted; visible only to the
    /// creating client
    Draft,
    /// Submitted, nobody on the manufacturer side has picked it up yet
    Untouched,
    /// Being worked on
    InProgress,
    /// Resolved
    Completed,
    /// Abandoned
    Cancelled,
}

impl IssueStatus {
    /// Whether the issue still needs work (not completed, not cancelled)
    pub fn is_open(&self) -> bool {
        !matches!(self, IssueStatus::Completed | IssueStatus::Cancelled)
    }
}

/// Urgency requested by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    High,
    Middle,
    Low,
}

/// Development category of an issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Taste and aroma
    Flavor,
    /// Mouthfeel
    Texture,
    /// Shelf life and physical stability
    Preservation,
    /// Cost reduction
    Cost,
    Other,
}

/// One recipe ingredient as returned by the server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    /// Server-assigned ID
    pub id: i64,

    /// Ingredient name
    pub name: String,

    /// Free-text amount, e.g. "100g"
    pub amount: String,
}

/// One recipe ingredient in a creation/update payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientInput {
    /// Ingredient name
    pub name: String,

    /// Free-text amount
    pub amount: String,
}

/// An uploaded file attached to an issue.
///
/// Instances come from the upload endpoint; the creation payload sends
/// them back as-is to link them to the new issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    /// Server-assigned ID; the upload endpoint returns a placeholder
    /// until the file is linked to an issue
    #[serde(default, skip_serializing)]
    pub id: Option<i64>,

    /// Original file name
    pub file_name: String,

    /// Server-side path or URL of the stored file
    pub file_path: String,

    /// MIME type, when the server could determine one
    pub file_type: Option<String>,
}

/// A full issue record as returned by the detail endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    /// Immutable server-assigned ID
    pub id: i64,

    /// Unique human-readable code, e.g. "REQ-2025-0001"
    pub issue_code: String,

    /// Short title of the request
    pub title: String,

    /// Development category
    pub category: Category,

    /// The client's product the request concerns
    pub product_name: String,

    /// Free-text description, including any dictated content
    pub description: Option<String>,

    /// Requested urgency
    pub urgency: Urgency,

    /// Lifecycle status
    pub status: IssueStatus,

    /// Free text indicating whose turn it is to act
    pub ball_holder: String,

    /// Server timestamp of creation (ISO 8601 string)
    pub created_at: String,

    /// Server timestamp of last update (ISO 8601 string)
    pub updated_at: String,

    /// Client-requested deadline as a date-only ISO string
    pub desired_deadline: Option<String>,

    /// The client's own tracking code, if any
    pub client_arbitrary_code: Option<String>,

    /// Whether the client ships a product sample
    pub is_sample_provided: bool,

    /// Shipping details for the sample, if provided
    pub sample_shipping_info: Option<String>,

    /// Ordered recipe ingredients
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,

    /// Ordered file attachments
    #[serde(default)]
    pub attachments: Vec<Attachment>,

    /// Display name of the creating user
    pub creator_name: Option<String>,

    /// Name of the owning company
    pub company_name: Option<String>,
}

/// The lighter issue row returned by the list endpoint; also the input
/// of the triage/derivation engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueSummary {
    /// Immutable server-assigned ID
    pub id: i64,

    /// Unique human-readable code
    pub issue_code: String,

    /// Short title of the request
    pub title: String,

    /// Lifecycle status
    pub status: IssueStatus,

    /// Development category
    pub category: Category,

    /// Requested urgency
    pub urgency: Urgency,

    /// Free text indicating whose turn it is to act
    pub ball_holder: String,

    /// The client's product the request concerns
    pub product_name: String,

    /// Server timestamp of creation (ISO 8601 string)
    pub created_at: String,

    /// Client-requested deadline as a date-only ISO string
    #[serde(default)]
    pub desired_deadline: Option<String>,

    /// Name of the owning company
    pub company_name: Option<String>,
}

/// Payload for creating an issue (or saving a draft).
///
/// `desired_deadline` is always serialized, so an unset deadline goes
/// out as an explicit `null`, never an empty string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueCreate {
    /// Short title of the request
    pub title: String,

    /// Development category
    pub category: Category,

    /// The client's product the request concerns
    pub product_name: String,

    /// Free-text description
    pub description: Option<String>,

    /// Requested urgency
    pub urgency: Urgency,

    /// Client-requested deadline as a date-only ISO string
    pub desired_deadline: Option<String>,

    /// The client's own tracking code
    pub client_arbitrary_code: Option<String>,

    /// Whether the client ships a product sample
    pub is_sample_provided: bool,

    /// Shipping details for the sample
    pub sample_shipping_info: Option<String>,

    /// Ordered recipe ingredients
    pub ingredients: Vec<IngredientInput>,

    /// Attachments previously returned by the upload endpoint
    pub attachments: Vec<Attachment>,

    /// Target status: `Untouched` for a normal submit, `Draft` for an
    /// explicit draft save
    pub status: IssueStatus,
}

/// Partial-update payload; absent fields leave the server value untouched
#[derive(Debug, Clone, Default, Serialize)]
pub struct IssueUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub urgency: Option<Urgency>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_deadline: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_arbitrary_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_sample_provided: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_shipping_info: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<IngredientInput>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<IssueStatus>,
}

impl IssueUpdate {
    /// A partial update that only transitions the status
    pub fn status(status: IssueStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

/// One chat message on an issue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Server-assigned ID
    pub id: i64,

    /// Message body
    pub content: String,

    /// ID of the sending user
    pub sender_id: i64,

    /// Display name of the sender (client senders are prefixed with
    /// their company name by the server)
    pub sender_name: String,

    /// Server timestamp of sending (ISO 8601 string)
    pub sent_at: String,

    /// Whether the message references an attachment
    pub has_attachment: bool,
}

/// Payload for appending a chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageCreate {
    /// Message body
    pub content: String,

    /// Whether the message references an attachment
    #[serde(default)]
    pub has_attachment: bool,
}
