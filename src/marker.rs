use anyhow::{Result, bail};
use memchr::memmem::Finder;

/// The forbidden substring. Files whose content contains it fail the lint.
pub struct Marker {
    text: String,
    finder: Finder<'static>,
}

impl Marker {
    pub fn new(text: &str) -> Result<Self> {
        // The empty string is a substring of everything.
        if text.is_empty() {
            bail!("Marker must not be empty");
        }
        Ok(Self {
            text: text.to_owned(),
            finder: Finder::new(text.as_bytes()).into_owned(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns true if the marker occurs anywhere in `content`. This is a
    /// byte search so non-UTF-8 content is fine.
    pub fn is_found_in(&self, content: &[u8]) -> bool {
        self.finder.find(content).is_some()
    }
}

impl Default for Marker {
    fn default() -> Self {
        Self {
            text: "bad".to_owned(),
            finder: Finder::new(b"bad").into_owned(),
        }
    }
}
