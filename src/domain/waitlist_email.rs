use serde::Serialize;
use validator::ValidateEmail;

/// An email address that passed `validator`'s syntax check. Whether the
/// address is already on the waitlist is for the API to decide.
#[derive(Debug, Clone, Serialize)]
pub struct WaitlistEmail(String);

impl WaitlistEmail {
    pub fn parse(email: String) -> Result<Self, String> {
        let email = email.trim().to_owned();
        match ValidateEmail::validate_email(&email) {
            true => Ok(Self(email)),
            false => Err(format!("{email:?} is not a valid email address.")),
        }
    }
}

impl AsRef<str> for WaitlistEmail {
    fn as_ref(&self) -> &str { &self.0 }
}

impl std::fmt::Display for WaitlistEmail {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
