use std::time::Duration;

use reqwest::Client;

use crate::domain::WaitlistAck;
use crate::domain::WaitlistEntry;
use crate::domain::WaitlistUser;
use crate::domain::WaitlistUsers;
use crate::submission::SubmissionError;

/// Client for the (external) waitlist API.
///
/// Establishing a HTTP connection is expensive, so a single `WaitlistClient`
/// is built at startup and shared (via `web::Data` / `Arc`) by every modal;
/// `reqwest::Client` pools connections internally.
#[derive(Debug)]
pub struct WaitlistClient {
    http_client: Client,
    base_url: String,
}

impl WaitlistClient {
    /// `base_url` is everything before `/waitlist`, e.g.
    /// `https://task-manager-api-e7mf.onrender.com/api`.
    pub fn new(
        base_url: String,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    fn url(&self) -> String { format!("{}/waitlist", self.base_url) }

    /// `POST /waitlist`
    ///
    /// Any 2xx is a success. The body of the acknowledgment is informative
    /// only; if it doesn't parse, we still report success (the record was
    /// created either way).
    ///
    /// # Request example
    ///
    /// ```sh
    ///     curl -X POST -H 'Content-Type: application/json' \
    ///         --data '{"email":"a@b.com","fullName":"A B","position":"sales","country":"Togo"}' \
    ///         https://task-manager-api-e7mf.onrender.com/api/waitlist
    /// ```
    #[tracing::instrument(
        name = "POSTing entry to waitlist API",
        skip(self, entry),
        fields(email = %entry.email, status = tracing::field::Empty)
    )]
    pub async fn add_to_waitlist(
        &self,
        entry: &WaitlistEntry,
    ) -> Result<WaitlistAck, SubmissionError> {
        let resp = self
            .http_client
            .post(self.url())
            .json(entry)
            .send()
            .await
            .map_err(SubmissionError::Network)?;

        let status = resp.status();
        tracing::Span::current().record("status", status.as_u16());
        let body = resp.bytes().await.map_err(SubmissionError::Network)?;

        if !status.is_success() {
            return Err(SubmissionError::from_response(status, &body));
        }

        match body.is_empty() {
            true => Ok(WaitlistAck::default()),
            false => Ok(serde_json::from_slice(&body).unwrap_or_else(|e| {
                tracing::warn!(error.message = %e, "unexpected acknowledgment body");
                WaitlistAck::default()
            })),
        }
    }

    /// `GET /waitlist`
    #[tracing::instrument(name = "Fetching waitlist users", skip(self))]
    pub async fn get_waitlist_users(&self) -> Result<Vec<WaitlistUser>, SubmissionError> {
        let resp = self
            .http_client
            .get(self.url())
            .send()
            .await
            .map_err(SubmissionError::Network)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.bytes().await.map_err(SubmissionError::Network)?;
            return Err(SubmissionError::from_response(status, &body));
        }

        // unlike the acknowledgment, a listing we can't read is a failure
        let users: WaitlistUsers = resp.json().await.map_err(SubmissionError::Network)?;
        Ok(users.data)
    }
}
