//! Multi-section assembly of an issue-creation payload.
//!
//! The form accumulates independently edited sections (base fields,
//! ingredient rows, uploaded attachments, dictated description text)
//! and shapes them into one [`IssueCreate`] at submit time. Normal
//! submit and draft save share the same validation and shaping, they
//! differ only in the status sent.

use crate::error::Error;
use crate::issues::{Attachment, Category, IngredientInput, IssueCreate, IssueStatus, Urgency};

/// Which trigger the user activated on submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMode {
    /// Normal submission; the issue lands as `untouched`
    Submit,
    /// Explicit draft save; visible only to the creating client
    Draft,
}

impl SubmitMode {
    fn status(&self) -> IssueStatus {
        match self {
            SubmitMode::Submit => IssueStatus::Untouched,
            SubmitMode::Draft => IssueStatus::Draft,
        }
    }
}

/// One editable ingredient row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientEntry {
    /// Ingredient name
    pub name: String,

    /// Free-text amount, e.g. "100g"
    pub amount: String,
}

impl IngredientEntry {
    fn is_blank(&self) -> bool {
        self.name.trim().is_empty() && self.amount.trim().is_empty()
    }
}

/// Accumulator for a new issue across all form sections
#[derive(Debug, Clone)]
pub struct IssueForm {
    /// Short title of the request
    pub title: String,

    /// Development category
    pub category: Option<Category>,

    /// The client's product the request concerns
    pub product_name: String,

    /// Free-text description; dictation appends here
    pub description: String,

    /// Requested urgency
    pub urgency: Urgency,

    /// Raw deadline input; empty means no deadline
    pub desired_deadline: String,

    /// The client's own tracking code
    pub client_arbitrary_code: String,

    /// Whether the client ships a product sample
    pub is_sample_provided: bool,

    /// Shipping details for the sample
    pub sample_shipping_info: String,

    /// Ordered, user-editable ingredient rows
    pub ingredients: Vec<IngredientEntry>,

    /// Attachments returned by successful uploads
    pub attachments: Vec<Attachment>,
}

impl Default for IssueForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            category: None,
            product_name: String::new(),
            description: String::new(),
            urgency: Urgency::Middle,
            desired_deadline: String::new(),
            client_arbitrary_code: String::new(),
            is_sample_provided: false,
            sample_shipping_info: String::new(),
            ingredients: Vec::new(),
            attachments: Vec::new(),
        }
    }
}

impl IssueForm {
    /// Create an empty form with default urgency `middle`
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a blank ingredient row
    pub fn add_ingredient(&mut self) -> &mut IngredientEntry {
        self.ingredients.push(IngredientEntry::default());
        self.ingredients.last_mut().unwrap()
    }

    /// Remove an ingredient row by index; out-of-range indexes are ignored
    pub fn remove_ingredient(&mut self, index: usize) {
        if index < self.ingredients.len() {
            self.ingredients.remove(index);
        }
    }

    /// Record a successful upload result as an attachment
    pub fn attach(&mut self, attachment: Attachment) {
        self.attachments.push(attachment);
    }

    /// Remove an attachment by index. Purely local: the uploaded file
    /// stays on the server, orphaned, since no delete endpoint exists.
    /// Out-of-range indexes are ignored.
    pub fn remove_attachment(&mut self, index: usize) {
        if index < self.attachments.len() {
            self.attachments.remove(index);
        }
    }

    /// Append a recognized speech transcript to the description,
    /// newline-separated when the description already has content
    pub fn append_transcript(&mut self, transcript: &str) {
        if transcript.is_empty() {
            return;
        }
        if !self.description.is_empty() {
            self.description.push('\n');
        }
        self.description.push_str(transcript);
    }

    /// Validate the required fields. Failures block submission; no
    /// request is sent.
    pub fn validate(&self) -> Result<(), Error> {
        if self.title.trim().is_empty() {
            return Err(Error::validation("title is required"));
        }
        if self.product_name.trim().is_empty() {
            return Err(Error::validation("product name is required"));
        }
        if self.category.is_none() {
            return Err(Error::validation("category is required"));
        }
        Ok(())
    }

    /// Shape the accumulated sections into a creation payload.
    ///
    /// Ingredient rows where both fields are empty or whitespace-only
    /// are dropped; rows with exactly one field filled pass through
    /// as-is. An empty deadline becomes `None` and serializes as an
    /// explicit `null`.
    pub fn payload(&self, mode: SubmitMode) -> Result<IssueCreate, Error> {
        self.validate()?;
        let category = self
            .category
            .ok_or_else(|| Error::validation("category is required"))?;

        let ingredients = self
            .ingredients
            .iter()
            .filter(|entry| !entry.is_blank())
            .map(|entry| IngredientInput {
                name: entry.name.clone(),
                amount: entry.amount.clone(),
            })
            .collect();

        Ok(IssueCreate {
            title: self.title.clone(),
            category,
            product_name: self.product_name.clone(),
            description: non_empty(&self.description),
            urgency: self.urgency,
            desired_deadline: non_empty(&self.desired_deadline),
            client_arbitrary_code: non_empty(&self.client_arbitrary_code),
            is_sample_provided: self.is_sample_provided,
            sample_shipping_info: non_empty(&self.sample_shipping_info),
            ingredients,
            attachments: self.attachments.clone(),
            status: mode.status(),
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
