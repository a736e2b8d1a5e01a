//! Issue CRUD and the per-issue chat thread

mod types;

use reqwest::Client;

use crate::error::Error;
use crate::fetch::Fetch;
use crate::session::SessionStore;

pub use types::*;

/// Client for the issue endpoints.
///
/// Listing is pre-scoped by the server to the caller's permission
/// level: manufacturer staff see every company's issues, client users
/// only their own company's. Draft issues are additionally scoped to
/// their creator.
pub struct IssuesClient {
    /// The API base URL, e.g. `https://portal.example.com/api/v1`
    url: String,

    /// HTTP client used for requests
    client: Client,

    /// Shared session holding the bearer token
    session: SessionStore,
}

impl IssuesClient {
    /// Create a new IssuesClient
    pub(crate) fn new(url: &str, client: Client, session: SessionStore) -> Self {
        Self {
            url: url.to_string(),
            client,
            session,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/issues{}", self.url, path)
    }

    /// List issues visible to the caller
    pub async fn list(&self) -> Result<Vec<IssueSummary>, Error> {
        Fetch::get(&self.client, &self.endpoint(""))
            .maybe_bearer_auth(self.session.token().as_deref())
            .execute::<Vec<IssueSummary>>()
            .await
    }

    /// Fetch one issue with its ingredients and attachments
    pub async fn get(&self, id: i64) -> Result<Issue, Error> {
        Fetch::get(&self.client, &self.endpoint(&format!("/{}", id)))
            .maybe_bearer_auth(self.session.token().as_deref())
            .execute::<Issue>()
            .await
    }

    /// Create a new issue or draft
    pub async fn create(&self, payload: &IssueCreate) -> Result<Issue, Error> {
        Fetch::post(&self.client, &self.endpoint(""))
            .maybe_bearer_auth(self.session.token().as_deref())
            .json(payload)?
            .execute::<Issue>()
            .await
    }

    /// Apply a partial update, e.g. a status transition
    pub async fn update(&self, id: i64, payload: &IssueUpdate) -> Result<Issue, Error> {
        Fetch::put(&self.client, &self.endpoint(&format!("/{}", id)))
            .maybe_bearer_auth(self.session.token().as_deref())
            .json(payload)?
            .execute::<Issue>()
            .await
    }

    /// List the chat messages of an issue, ascending by send time.
    ///
    /// There is no incremental sync: after a send, callers re-fetch the
    /// full list.
    pub async fn messages(&self, id: i64) -> Result<Vec<Message>, Error> {
        Fetch::get(&self.client, &self.endpoint(&format!("/{}/messages", id)))
            .maybe_bearer_auth(self.session.token().as_deref())
            .execute::<Vec<Message>>()
            .await
    }

    /// Append a chat message to an issue
    pub async fn send_message(&self, id: i64, payload: &MessageCreate) -> Result<Message, Error> {
        Fetch::post(&self.client, &self.endpoint(&format!("/{}/messages", id)))
            .maybe_bearer_auth(self.session.token().as_deref())
            .json(payload)?
            .execute::<Message>()
            .await
    }
}
