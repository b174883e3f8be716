use super::extraction::email::extract_emails;
use super::PatternMatcher;

const MAX_EMAIL_LEN: usize = 100;

/// An email is plausible when it is short enough, has a single `@` and a
/// dotted domain part.
pub fn is_valid(value: &str) -> bool {
    if value.chars().count() > MAX_EMAIL_LEN {
        return false;
    }
    if value.matches('@').count() != 1 {
        return false;
    }
    match value.split_once('@') {
        Some((_, domain)) => domain.contains('.'),
        None => false,
    }
}

pub struct EmailMatcher {}

impl PatternMatcher for EmailMatcher {
    fn extract(&self, text: &str) -> Vec<String> {
        extract_emails(text)
    }

    fn is_valid(&self, candidate: &str) -> bool {
        is_valid(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        let valid_emails = vec![
            "user@example.com",
            "user.name@example.com",
            "user+tag@example.com",
            "user123@example.co.uk",
            "user-name@example-domain.com",
            "@example.com",
        ];

        for email in valid_emails {
            assert!(is_valid(email), "Email should be valid: {}", email);
        }
    }

    #[test]
    fn test_invalid_emails() {
        let invalid_emails = vec![
            "user@",
            "user@example",
            "notanemail@",
            "two@at@example.com",
            "no-at-sign.example.com",
            "",
        ];

        for email in invalid_emails {
            assert!(!is_valid(email), "Email should be invalid: {}", email);
        }
    }

    #[test]
    fn test_length_limit() {
        let domain = "@example.com";
        let fits = format!("{}{}", "a".repeat(100 - domain.len()), domain);
        let too_long = format!("{}{}", "a".repeat(101 - domain.len()), domain);
        assert!(is_valid(&fits));
        assert!(!is_valid(&too_long));
    }
}
