//! Types for authentication and post-login routing

use serde::{Deserialize, Serialize};

use crate::users::UserRole;

/// Response of the token endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    /// The bearer access token
    pub access_token: String,

    /// The token type, always "bearer"
    pub token_type: String,
}

/// Where a freshly logged-in user lands.
///
/// Routing is keyed on the authenticated profile's role, not on any
/// property of the login credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Manufacturer staff land on the admin dashboard
    AdminDashboard,
    /// Client users land on their company's issue list
    ClientIssues,
}

impl Route {
    /// The landing route for a role
    pub fn for_role(role: UserRole) -> Self {
        if role.is_staff() {
            Route::AdminDashboard
        } else {
            Route::ClientIssues
        }
    }
}
