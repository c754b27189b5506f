use serde::Deserialize;
use serde::Serialize;

use super::Country;
use super::FullName;
use super::Position;
use super::WaitlistEmail;

/// Raw modal input, exactly as posted by the browser (or typed into a
/// `WaitlistModal`). Nothing here is validated yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub country: String,
}

/// A parsed entry, ready to be sent to the waitlist API. Serializes to
/// `{"email", "fullName", "position", "country"}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistEntry {
    pub email: WaitlistEmail,
    pub full_name: FullName,
    pub position: Position,
    pub country: Country,
}

// parse, don't validate: once we hold a `WaitlistEntry`, every field is known
// to be well-formed
impl TryFrom<WaitlistForm> for WaitlistEntry {
    type Error = String;
    fn try_from(value: WaitlistForm) -> Result<Self, Self::Error> {
        Ok(Self {
            email: WaitlistEmail::parse(value.email)?,
            full_name: FullName::parse(value.full_name)?,
            position: Position::parse(&value.position)?,
            country: Country::parse(value.country)?,
        })
    }
}
