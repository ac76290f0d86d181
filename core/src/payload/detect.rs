use crate::payload::Mode;

/// Minimum digit count before bare digits are treated as a phone number
const MIN_PHONE_DIGITS: usize = 7;

/// Guess the mode for input given without an explicit `--mode`.
///
/// Rules are checked in order: explicit scheme, email address, phone number,
/// dotted host name, then plain text.
pub fn detect(input: &str) -> Mode {
    let input = input.trim();

    if input.contains("://") {
        return Mode::Url;
    }
    if looks_like_email(input) {
        return Mode::Email;
    }
    if looks_like_phone(input) {
        return Mode::Tel;
    }
    if looks_like_host(input) {
        return Mode::Url;
    }
    Mode::Text
}

fn looks_like_email(input: &str) -> bool {
    if input.contains(char::is_whitespace) || input.matches('@').count() != 1 {
        return false;
    }
    match input.split_once('@') {
        Some((local, domain)) => !local.is_empty() && looks_like_host(domain),
        None => false,
    }
}

/// Phone numbers either carry a country code or are written in separated
/// groups; bare digit runs, decimals, IPs and ISO dates stay text.
fn looks_like_phone(input: &str) -> bool {
    let body = input.strip_prefix('+').unwrap_or(input);
    let allowed = |c: char| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')');
    if !body.chars().all(allowed) || body.chars().filter(char::is_ascii_digit).count() < MIN_PHONE_DIGITS {
        return false;
    }
    let grouped = body.contains('(') || body.trim().contains([' ', '-']);
    (input.starts_with('+') || grouped) && !looks_like_iso_date(input)
}

fn looks_like_iso_date(input: &str) -> bool {
    let parts: Vec<&str> = input.split('-').collect();
    matches!(parts.as_slice(), [y, m, d]
        if [(y, 4), (m, 2), (d, 2)]
            .iter()
            .all(|(p, len)| p.len() == *len && p.chars().all(|c| c.is_ascii_digit())))
}

fn looks_like_host(input: &str) -> bool {
    if input.contains(char::is_whitespace) || input.contains('@') {
        return false;
    }
    let host = input.split(['/', '?', '#']).next().unwrap_or_default();
    let host = host.split(':').next().unwrap_or_default();
    let labels: Vec<&str> = host.split('.').collect();

    labels.len() >= 2
        && labels.iter().all(|l| !l.is_empty())
        && labels
            .iter()
            .all(|l| l.chars().all(|c| c.is_alphanumeric() || c == '-'))
        && labels
            .last()
            .is_some_and(|tld| tld.chars().any(char::is_alphabetic))
}
