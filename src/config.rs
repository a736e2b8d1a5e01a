//! Configuration options for the Unitec Connect client

use std::time::Duration;

/// Configuration options for the Unitec Connect client
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// The API base path appended to the portal URL
    pub api_path: String,

    /// The request timeout; `None` means requests are never timed out
    /// client-side
    pub request_timeout: Option<Duration>,

    /// The User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            api_path: "/api/v1".to_string(),
            request_timeout: None,
            user_agent: format!("unitec-connect/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientOptions {
    /// Set the API base path
    pub fn with_api_path(mut self, value: &str) -> Self {
        self.api_path = value.to_string();
        self
    }

    /// Set the request timeout
    pub fn with_request_timeout(mut self, value: Option<Duration>) -> Self {
        self.request_timeout = value;
        self
    }

    /// Set the User-Agent header
    pub fn with_user_agent(mut self, value: &str) -> Self {
        self.user_agent = value.to_string();
        self
    }
}
