//! Company registration and listing (admin side)

use reqwest::Client;

use crate::error::Error;
use crate::fetch::Fetch;
use crate::session::SessionStore;
use crate::users::{Company, CompanyCreate, InviteResponse};

/// Client for the company endpoints
pub struct CompaniesClient {
    /// The API base URL
    url: String,

    /// HTTP client used for requests
    client: Client,

    /// Shared session holding the bearer token
    session: SessionStore,
}

impl CompaniesClient {
    /// Create a new CompaniesClient
    pub(crate) fn new(url: &str, client: Client, session: SessionStore) -> Self {
        Self {
            url: url.to_string(),
            client,
            session,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/companies{}", self.url, path)
    }

    /// List registered companies. Manufacturer staff only; the server
    /// rejects client users with 403.
    pub async fn list(&self) -> Result<Vec<Company>, Error> {
        Fetch::get(&self.client, &self.endpoint(""))
            .maybe_bearer_auth(self.session.token().as_deref())
            .execute::<Vec<Company>>()
            .await
    }

    /// Register a new company. The server also provisions the
    /// representative's CLIENT_ADMIN account and returns a one-time
    /// invitation link that cannot be retrieved again later.
    pub async fn create(&self, payload: &CompanyCreate) -> Result<InviteResponse, Error> {
        let response = Fetch::post(&self.client, &self.endpoint(""))
            .maybe_bearer_auth(self.session.token().as_deref())
            .json(payload)?
            .execute::<InviteResponse>()
            .await?;

        log::info!("company registered: {}", payload.name);
        Ok(response)
    }
}
