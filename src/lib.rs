//! Unitec Connect Rust Client Library
//!
//! A Rust client for the Unitec Connect B2B product-development portal,
//! where client companies submit development requests ("issues") with
//! recipe data and file attachments and exchange threaded messages with
//! the manufacturer until resolution.
//!
//! Besides the REST client, the crate ships the two pure view-model
//! pieces of the portal: the [`triage`] engine that derives dashboard
//! KPIs and filtered lists from a flat issue collection, and the
//! [`form`] module that assembles a multi-section issue submission.

pub mod auth;
pub mod companies;
pub mod config;
pub mod error;
pub mod fetch;
pub mod form;
pub mod issues;
pub mod session;
pub mod triage;
pub mod upload;
pub mod users;

use reqwest::Client;

use crate::auth::AuthClient;
use crate::companies::CompaniesClient;
use crate::config::ClientOptions;
use crate::issues::IssuesClient;
use crate::session::SessionStore;
use crate::upload::UploadClient;
use crate::users::UsersClient;

/// The main entry point for the Unitec Connect client
pub struct Portal {
    /// The API base URL, portal URL plus the configured API path
    pub url: String,
    /// HTTP client used for requests
    pub http_client: Client,
    /// Shared session; one login covers every sub-client
    pub session: SessionStore,
    /// Client options
    pub options: ClientOptions,
}

impl Portal {
    /// Create a new portal client
    ///
    /// # Arguments
    ///
    /// * `portal_url` - The base URL of the portal deployment
    ///
    /// # Example
    ///
    /// ```
    /// use unitec_connect::Portal;
    ///
    /// let portal = Portal::new("https://portal.example.com");
    /// ```
    pub fn new(portal_url: &str) -> Self {
        Self::new_with_options(portal_url, ClientOptions::default())
    }

    /// Create a new portal client with custom options
    ///
    /// # Panics
    ///
    /// Panics when the HTTP client cannot be built from the options,
    /// e.g. a user agent that is not a valid header value.
    pub fn new_with_options(portal_url: &str, options: ClientOptions) -> Self {
        let mut builder = Client::builder().user_agent(options.user_agent.clone());
        if let Some(timeout) = options.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().expect("failed to build HTTP client");

        Self {
            url: format!(
                "{}{}",
                portal_url.trim_end_matches('/'),
                options.api_path
            ),
            http_client,
            session: SessionStore::new(),
            options,
        }
    }

    /// Get a client for authentication and post-login routing
    pub fn auth(&self) -> AuthClient {
        AuthClient::new(&self.url, self.http_client.clone(), self.session.clone())
    }

    /// Get a client for issue operations and per-issue chat
    pub fn issues(&self) -> IssuesClient {
        IssuesClient::new(&self.url, self.http_client.clone(), self.session.clone())
    }

    /// Get a client for company registration and listing
    pub fn companies(&self) -> CompaniesClient {
        CompaniesClient::new(&self.url, self.http_client.clone(), self.session.clone())
    }

    /// Get a client for user profile and invitation operations
    pub fn users(&self) -> UsersClient {
        UsersClient::new(&self.url, self.http_client.clone(), self.session.clone())
    }

    /// Get a client for file uploads
    pub fn upload(&self) -> UploadClient {
        UploadClient::new(&self.url, self.http_client.clone(), self.session.clone())
    }
}

/// A convenience module for common imports
pub mod prelude {
    pub use crate::config::ClientOptions;
    pub use crate::error::Error;
    pub use crate::form::{IssueForm, SubmitMode};
    pub use crate::triage::{DashboardSnapshot, IssueFilter};
    pub use crate::Portal;
}
