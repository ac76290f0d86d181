//! Input normalization: raw user text to a canonical QR payload

mod detect;
mod mode;

pub use detect::detect;
pub use mode::Mode;

use std::fmt;

use crate::{Error, Result};

/// Canonical, non-empty string handed to the matrix encoder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload(String);

impl Payload {
    pub(crate) fn new(value: String) -> Result<Self> {
        if value.is_empty() {
            return Err(Error::validation("payload is empty"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Payload {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Normalize `raw` for the given mode.
///
/// `None` picks a mode with [`detect`]. `sms_body` is only used by [`Mode::Sms`].
pub fn normalize(raw: &str, mode: Option<Mode>, sms_body: Option<&str>) -> Result<Payload> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::validation("text to encode is empty"));
    }

    let mode = mode.unwrap_or_else(|| detect(trimmed));
    tracing::debug!(?mode, "normalizing input");
    mode.normalize(raw, sms_body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_whitespace_rejected_for_every_mode() {
        for mode in Mode::ALL {
            for raw in ["", "   ", "\t\n"] {
                let err = normalize(raw, Some(mode), None).unwrap_err();
                assert!(matches!(err, Error::Validation(_)), "{mode:?} accepted {raw:?}");
            }
        }
        assert!(normalize("  ", None, None).is_err());
    }

    #[test]
    fn test_text_mode_passthrough() {
        for raw in ["Hello", " Hello ", "line\n", "\tindented", "two words", "ünïcødé ✓", "https://not-touched", "a@b"] {
            let payload = normalize(raw, Some(Mode::Text), None).unwrap();
            assert_eq!(payload.as_str(), raw);
        }
    }

    #[test]
    fn test_auto_detection_feeds_normalizer() {
        assert_eq!(normalize("plexdata.online", None, None).unwrap().as_str(), "https://plexdata.online");
        assert_eq!(normalize("+61412345678", None, None).unwrap().as_str(), "tel:+61412345678");
        assert_eq!(normalize("you@example.com", None, None).unwrap().as_str(), "mailto:you@example.com");
        assert_eq!(normalize("Hello", None, None).unwrap().as_str(), "Hello");
        assert_eq!(normalize("  Hello\n", None, None).unwrap().as_str(), "  Hello\n");
        assert_eq!(normalize("2024-01-15", None, None).unwrap().as_str(), "2024-01-15");
        assert_eq!(normalize(" plexdata.online ", None, None).unwrap().as_str(), "https://plexdata.online");
    }

    #[test]
    fn test_payload_display() {
        let payload = normalize("hi", Some(Mode::Text), None).unwrap();
        assert_eq!(payload.to_string(), "hi");
        assert_eq!(payload.into_string(), "hi");
    }
}
