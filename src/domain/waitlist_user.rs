use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;

/// A record as stored (and returned) by the waitlist API. `position` is left
/// raw, since the API is free to hold values our dropdown doesn't know about.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub position: String,
    pub country: String,
    pub joined_at: DateTime<Utc>,
}

/// Body of a successful `POST /waitlist`. Both fields are optional, and an
/// empty (or non-JSON) body is a valid acknowledgment too.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WaitlistAck {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<WaitlistUser>,
}

/// `GET /waitlist` wraps the records: `{"data": [...]}`
#[derive(Debug, Default, Deserialize)]
pub(crate) struct WaitlistUsers {
    #[serde(default)]
    pub data: Vec<WaitlistUser>,
}
