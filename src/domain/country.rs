use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

/// Free-text country, as typed by the user.
#[derive(Debug, Clone, Serialize)]
pub struct Country(String);

impl Country {
    pub fn parse(country: String) -> Result<Self, String> {
        let country = country.trim();
        if country.is_empty() {
            return Err("Country is required.".to_owned());
        }
        if country.graphemes(true).count() > 100 {
            return Err("Country cannot be longer than 100 characters.".to_owned());
        }
        Ok(Self(country.to_owned()))
    }
}

impl AsRef<str> for Country {
    fn as_ref(&self) -> &str { &self.0 }
}
