//! Types for users, companies and the invitation flow

use serde::{Deserialize, Serialize};
use url::Url;

/// Role of a portal user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    /// Manufacturer-side administrator
    #[serde(rename = "UNITEC_ADMIN")]
    UnitecAdmin,

    /// Manufacturer-side sales staff
    #[serde(rename = "UNITEC_SALES")]
    UnitecSales,

    /// Manufacturer-side R&D staff
    #[serde(rename = "UNITEC_RD")]
    UnitecRd,

    /// Client-company administrator; may invite members
    #[serde(rename = "CLIENT_ADMIN")]
    ClientAdmin,

    /// Regular client-company member
    #[serde(rename = "CLIENT_MEMBER")]
    ClientMember,
}

impl UserRole {
    /// Whether this is a manufacturer-side role
    pub fn is_staff(&self) -> bool {
        matches!(
            self,
            UserRole::UnitecAdmin | UserRole::UnitecSales | UserRole::UnitecRd
        )
    }
}

/// A portal user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned ID
    pub id: i64,

    /// Login email
    pub email: String,

    /// Display name
    pub name: Option<String>,

    /// Role of the user
    pub role: UserRole,

    /// The company the user belongs to
    pub company_id: Option<i64>,

    /// Whether the account is active
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// A client company
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    /// Server-assigned ID
    pub id: i64,

    /// Company name
    pub name: String,

    /// Email of the representative
    pub representative_email: Option<String>,

    /// Default shipping address for samples
    pub address_default: Option<String>,

    /// Members of the company
    #[serde(default)]
    pub users: Vec<User>,
}

/// Payload for registering a new company together with its
/// representative (CLIENT_ADMIN) account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyCreate {
    /// Company name
    pub name: String,

    /// Email of the representative; becomes the admin account login
    pub representative_email: String,

    /// Display name of the representative
    pub representative_name: String,

    /// Default shipping address for samples
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_default: Option<String>,
}

/// Payload for inviting an additional member into the caller's company
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInvite {
    /// Email of the invitee
    pub email: String,

    /// Display name of the invitee
    pub name: String,
}

/// Response of the provisioning endpoints carrying the one-time
/// invitation link.
///
/// The link is not retrievable again later; callers display it
/// prominently and offer copy-to-clipboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InviteResponse {
    /// Human-readable confirmation message
    pub message: String,

    /// One-time invitation link containing the opaque token
    pub invitation_link: String,
}

impl InviteResponse {
    /// Extract the opaque invitation token from the link's query string
    pub fn token(&self) -> Option<String> {
        let url = Url::parse(&self.invitation_link).ok()?;
        url.query_pairs()
            .find(|(key, _)| key == "token")
            .map(|(_, value)| value.into_owned())
    }
}

/// Payload for consuming an invitation token and setting a password
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcceptInvite {
    /// The opaque token from the invitation link
    pub token: String,

    /// The new password
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_extracted_from_invitation_link() {
        let response = InviteResponse {
            message: "Invitation created.".to_string(),
            invitation_link: "https://portal.example.com/invite?token=abc-123".to_string(),
        };
        assert_eq!(response.token().as_deref(), Some("abc-123"));
    }

    #[test]
    fn malformed_link_yields_no_token() {
        let response = InviteResponse {
            message: "Invitation created.".to_string(),
            invitation_link: "not a url".to_string(),
        };
        assert!(response.token().is_none());
    }

    #[test]
    fn roles_deserialize_from_wire_names() {
        let role: UserRole = serde_json::from_str("\"CLIENT_ADMIN\"").unwrap();
        assert_eq!(role, UserRole::ClientAdmin);
        assert!(!role.is_staff());

        let role: UserRole = serde_json::from_str("\"UNITEC_RD\"").unwrap();
        assert!(role.is_staff());
    }
}
