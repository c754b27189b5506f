use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

/// The `fullName` typed into the waitlist modal, trimmed. Anything goes as long
/// as it isn't blank and fits in 256 graphemes; the page escapes it on the way
/// out.
#[derive(Debug, Clone, Serialize)]
pub struct FullName(String);

impl FullName {
    const MAX_GRAPHEMES: usize = 256;

    pub fn parse(name: String) -> Result<Self, String> {
        let name = name.trim();
        if name.is_empty() {
            return Err("Full name is required.".to_owned());
        }
        if name.graphemes(true).count() > Self::MAX_GRAPHEMES {
            return Err(format!(
                "Full name cannot be longer than {} characters.",
                Self::MAX_GRAPHEMES
            ));
        }
        Ok(Self(name.to_owned()))
    }
}

impl AsRef<str> for FullName {
    fn as_ref(&self) -> &str { &self.0 }
}
