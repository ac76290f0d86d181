use std::fmt;
use std::str::FromStr;

use crate::payload::Payload;
use crate::{Error, Result};

/// How the raw input is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Web link, `https://` added when no scheme is present
    Url,
    /// Phone number as a `tel:` URI
    Tel,
    /// Address as a `mailto:` URI
    Email,
    /// Phone number as an `sms:` URI, with optional message body
    Sms,
    /// Encoded as-is
    Text,
}

impl Mode {
    pub const ALL: [Mode; 5] = [Mode::Url, Mode::Tel, Mode::Email, Mode::Sms, Mode::Text];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Url => "url",
            Mode::Tel => "tel",
            Mode::Email => "email",
            Mode::Sms => "sms",
            Mode::Text => "text",
        }
    }

    /// Build the payload for non-blank input; text is kept verbatim, every other mode is trimmed.
    pub(crate) fn normalize(self, raw: &str, sms_body: Option<&str>) -> Result<Payload> {
        let input = raw.trim();
        let value = match self {
            Mode::Url => url(input),
            Mode::Tel => format!("tel:{}", dial_string(input)?),
            Mode::Email => email(input)?,
            Mode::Sms => sms(input, sms_body)?,
            Mode::Text => raw.to_string(),
        };
        Payload::new(value)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Mode::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::validation(format!("unknown mode '{s}'")))
    }
}

fn url(input: &str) -> String {
    if input.contains("://") {
        input.to_string()
    } else {
        format!("https://{input}")
    }
}

/// Digits only, keeping a `+` when it is the first character.
fn dial_string(input: &str) -> Result<String> {
    let mut out = String::with_capacity(input.len());
    if input.starts_with('+') {
        out.push('+');
    }
    out.extend(input.chars().filter(char::is_ascii_digit));

    if out.trim_start_matches('+').is_empty() {
        return Err(Error::validation(format!("'{input}' contains no digits")));
    }
    Ok(out)
}

fn email(input: &str) -> Result<String> {
    let address = strip_prefix_ignore_case(input, "mailto:").trim();
    let valid = match address.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !address.contains(char::is_whitespace)
        }
        None => false,
    };
    if !valid {
        return Err(Error::validation(format!("'{input}' is not an email address")));
    }
    Ok(format!("mailto:{address}"))
}

fn sms(input: &str, body: Option<&str>) -> Result<String> {
    let number = dial_string(strip_prefix_ignore_case(input, "sms:"))?;
    match body.map(str::trim).filter(|b| !b.is_empty()) {
        Some(body) => Ok(format!("sms:{number}?body={}", urlencoding::encode(body))),
        None => Ok(format!("sms:{number}")),
    }
}

fn strip_prefix_ignore_case<'a>(input: &'a str, prefix: &str) -> &'a str {
    match input.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => &input[prefix.len()..],
        _ => input,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(mode: Mode, input: &str) -> Result<String> {
        mode.normalize(input, None).map(Payload::into_string)
    }

    #[test]
    fn test_url_scheme_added_only_when_missing() {
        assert_eq!(norm(Mode::Url, "plexdata.online").unwrap(), "https://plexdata.online");
        assert_eq!(norm(Mode::Url, "https://plexdata.online").unwrap(), "https://plexdata.online");
        assert_eq!(norm(Mode::Url, "http://a.b/c?d=e").unwrap(), "http://a.b/c?d=e");
        assert_eq!(norm(Mode::Url, "ftp://files.example").unwrap(), "ftp://files.example");
        assert!(norm(Mode::Url, "example.com/path").unwrap().starts_with("https://"));
    }

    #[test]
    fn test_tel_keeps_digits_and_leading_plus() {
        assert_eq!(norm(Mode::Tel, "+61412345678").unwrap(), "tel:+61412345678");
        assert_eq!(norm(Mode::Tel, "+61 (412) 345-678").unwrap(), "tel:+61412345678");
        assert_eq!(norm(Mode::Tel, "0412 345 678").unwrap(), "tel:0412345678");
        assert_eq!(norm(Mode::Tel, "  +61 412 345 678 ").unwrap(), "tel:+61412345678");
        // a plus anywhere but the front is dropped
        assert_eq!(norm(Mode::Tel, "04+12").unwrap(), "tel:0412");
    }

    #[test]
    fn test_tel_payload_shape() {
        for input in ["+1 555 0100", "++44 20 7946 0958", "ext. 42", "(03) 9999-0000 +"] {
            let payload = norm(Mode::Tel, input).unwrap();
            let rest = payload.strip_prefix("tel:").unwrap();
            let digits = rest.strip_prefix('+').unwrap_or(rest);
            assert!(!digits.is_empty());
            assert!(digits.chars().all(|c| c.is_ascii_digit()), "{payload}");
        }
    }

    #[test]
    fn test_tel_and_sms_require_a_digit() {
        assert!(matches!(norm(Mode::Tel, "call me"), Err(Error::Validation(_))));
        assert!(matches!(norm(Mode::Tel, "+"), Err(Error::Validation(_))));
        assert!(matches!(norm(Mode::Sms, "nobody"), Err(Error::Validation(_))));
    }

    #[test]
    fn test_email() {
        assert_eq!(norm(Mode::Email, "you@example.com").unwrap(), "mailto:you@example.com");
        assert_eq!(norm(Mode::Email, "MAILTO:you@example.com").unwrap(), "mailto:you@example.com");
        assert!(norm(Mode::Email, "you.example.com").is_err());
        assert!(norm(Mode::Email, "@example.com").is_err());
        assert!(norm(Mode::Email, "you@").is_err());
        assert!(norm(Mode::Email, "y ou@example.com").is_err());
        assert!(norm(Mode::Email, "a@b@example.com").is_err());
    }

    #[test]
    fn test_sms_with_and_without_body() {
        assert_eq!(norm(Mode::Sms, "+61412345678").unwrap(), "sms:+61412345678");
        let with_body = Mode::Sms
            .normalize("+61 412 345 678", Some("Hi there & welcome"))
            .unwrap();
        assert_eq!(with_body.as_str(), "sms:+61412345678?body=Hi%20there%20%26%20welcome");

        let blank_body = Mode::Sms.normalize("0412", Some("   ")).unwrap();
        assert_eq!(blank_body.as_str(), "sms:0412");
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!("EMAIL".parse::<Mode>().unwrap(), Mode::Email);
        assert_eq!(" sms ".parse::<Mode>().unwrap(), Mode::Sms);
        assert!("fax".parse::<Mode>().is_err());
        for mode in Mode::ALL {
            assert_eq!(mode.to_string().parse::<Mode>().unwrap(), mode);
        }
    }
}
