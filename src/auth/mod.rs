//! Authentication against the portal's token endpoint

mod types;

use reqwest::Client;

use crate::error::Error;
use crate::fetch::Fetch;
use crate::session::{Session, SessionStore};
use crate::users::UsersClient;

pub use types::*;

/// Client for authentication and the post-login routing decision
pub struct AuthClient {
    /// The API base URL
    url: String,

    /// HTTP client used for requests
    client: Client,

    /// Shared session; login installs into it, logout clears it
    session: SessionStore,
}

impl AuthClient {
    /// Create a new AuthClient
    pub(crate) fn new(url: &str, client: Client, session: SessionStore) -> Self {
        Self {
            url: url.to_string(),
            client,
            session,
        }
    }

    /// Exchange credentials for a bearer token and install the session.
    ///
    /// The token endpoint takes form-encoded `username`/`password`
    /// fields; the username is the login email.
    pub async fn login(&self, email: &str, password: &str) -> Result<Token, Error> {
        let url = format!("{}/auth/login/access-token", self.url);

        let token = Fetch::post(&self.client, &url)
            .form(&[("username", email), ("password", password)])
            .execute::<Token>()
            .await?;

        self.session.set(Session::new(token.access_token.clone()));
        Ok(token)
    }

    /// Tear down the session. Client-side only; the server holds no
    /// session state to invalidate.
    pub fn logout(&self) {
        self.session.clear();
    }

    /// Whether a session is currently active
    pub fn is_authenticated(&self) -> bool {
        self.session.is_active()
    }

    /// Decide the landing route from the authenticated profile's role.
    ///
    /// Requires an active session; fails with [`Error::Auth`] when
    /// called logged out.
    pub async fn landing_route(&self) -> Result<Route, Error> {
        if !self.session.is_active() {
            return Err(Error::auth("not logged in"));
        }

        let users = UsersClient::new(&self.url, self.client.clone(), self.session.clone());
        let me = users.me().await?;
        Ok(Route::for_role(me.role))
    }
}
