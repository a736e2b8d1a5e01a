//! Current-user profile, company info and the member invitation flow

mod types;

use reqwest::Client;

use crate::error::Error;
use crate::fetch::Fetch;
use crate::session::SessionStore;

pub use types::*;

/// Minimum password length accepted by the invitation acceptance page
const MIN_PASSWORD_LEN: usize = 8;

/// Client for the user endpoints
pub struct UsersClient {
    /// The API base URL
    url: String,

    /// HTTP client used for requests
    client: Client,

    /// Shared session holding the bearer token
    session: SessionStore,
}

impl UsersClient {
    /// Create a new UsersClient
    pub(crate) fn new(url: &str, client: Client, session: SessionStore) -> Self {
        Self {
            url: url.to_string(),
            client,
            session,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/users{}", self.url, path)
    }

    /// Fetch the authenticated user's profile
    pub async fn me(&self) -> Result<User, Error> {
        Fetch::get(&self.client, &self.endpoint("/me"))
            .maybe_bearer_auth(self.session.token().as_deref())
            .execute::<User>()
            .await
    }

    /// Fetch the authenticated user's company, including its members
    pub async fn company(&self) -> Result<Company, Error> {
        Fetch::get(&self.client, &self.endpoint("/company"))
            .maybe_bearer_auth(self.session.token().as_deref())
            .execute::<Company>()
            .await
    }

    /// Invite an additional member into the caller's company.
    ///
    /// Only a CLIENT_ADMIN may invite; the server rejects others with
    /// 403. The returned invitation link is one-time and not
    /// retrievable again later.
    pub async fn invite(&self, email: &str, name: &str) -> Result<InviteResponse, Error> {
        let payload = UserInvite {
            email: email.to_string(),
            name: name.to_string(),
        };

        let response = Fetch::post(&self.client, &self.endpoint("/invite"))
            .maybe_bearer_auth(self.session.token().as_deref())
            .json(&payload)?
            .execute::<InviteResponse>()
            .await?;

        log::info!("invitation created for {}", email);
        Ok(response)
    }

    /// Consume an invitation token and set the account's password.
    ///
    /// Usually called logged out — the token is the credential — but
    /// like every other call the bearer header is attached whenever a
    /// session is active. A spent or unknown token is rejected by the
    /// server with 404.
    pub async fn accept_invite(&self, token: &str, password: &str) -> Result<(), Error> {
        let payload = AcceptInvite {
            token: token.to_string(),
            password: password.to_string(),
        };

        Fetch::post(&self.client, &self.endpoint("/accept-invite"))
            .maybe_bearer_auth(self.session.token().as_deref())
            .json(&payload)?
            .execute_empty()
            .await
    }
}

/// Page-level validation for the invitation acceptance form: minimum
/// length and confirmation match, checked before any request is sent
pub fn validate_new_password(password: &str, confirm: &str) -> Result<(), Error> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(Error::validation(format!(
            "password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    if password != confirm {
        return Err(Error::validation("passwords do not match"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_password_is_rejected() {
        assert!(validate_new_password("short", "short").is_err());
    }

    #[test]
    fn mismatched_confirmation_is_rejected() {
        assert!(validate_new_password("long-enough-1", "long-enough-2").is_err());
    }

    #[test]
    fn valid_password_passes() {
        assert!(validate_new_password("long-enough-1", "long-enough-1").is_ok());
    }
}
