//! File upload for issue attachments

use reqwest::{multipart, Client};

use crate::error::Error;
use crate::fetch::extract_detail;
use crate::issues::Attachment;
use crate::session::SessionStore;

/// Client for the upload endpoint.
///
/// Uploads are sequential, one file per call; there is no batching and
/// no delete endpoint. A file uploaded and then dropped from a form
/// before submission simply stays on the server.
pub struct UploadClient {
    /// The API base URL
    url: String,

    /// HTTP client used for requests
    client: Client,

    /// Shared session holding the bearer token
    session: SessionStore,
}

impl UploadClient {
    /// Create a new UploadClient
    pub(crate) fn new(url: &str, client: Client, session: SessionStore) -> Self {
        Self {
            url: url.to_string(),
            client,
            session,
        }
    }

    /// Upload one file and return its attachment metadata, ready to be
    /// carried in an issue payload
    pub async fn upload(
        &self,
        file_name: &str,
        data: Vec<u8>,
        content_type: Option<&str>,
    ) -> Result<Attachment, Error> {
        let url = format!("{}/upload/", self.url);

        let mut part = multipart::Part::bytes(data).file_name(file_name.to_string());
        if let Some(content_type) = content_type {
            part = part.mime_str(content_type)?;
        }
        let form = multipart::Form::new().part("file", part);

        let mut request = self.client.post(&url).multipart(form);
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            log::debug!("upload of {} failed: {} {}", file_name, status, text);
            return Err(Error::Api {
                status: status.as_u16(),
                detail: extract_detail(&text),
            });
        }

        let attachment = response.json::<Attachment>().await?;
        log::info!("uploaded {} to {}", file_name, attachment.file_path);
        Ok(attachment)
    }
}
