use regex::Regex;
use lazy_static::lazy_static;
use super::extraction::phonenumber::extract_phonenumbers;
use super::PatternMatcher;

lazy_static! {
    // Same notion of "digit" as the extraction pattern's \d.
    static ref NON_DIGIT: Regex = Regex::new(r"\D").unwrap();
}

const PHONE_DIGITS: usize = 10;

/// US numbers only: exactly ten digits once separators are removed.
pub fn is_valid(value: &str) -> bool {
    NON_DIGIT.replace_all(value, "").chars().count() == PHONE_DIGITS
}

pub struct PhoneNumberMatcher {}

impl PatternMatcher for PhoneNumberMatcher {
    fn extract(&self, text: &str) -> Vec<String> {
        extract_phonenumbers(text)
    }

    fn is_valid(&self, candidate: &str) -> bool {
        is_valid(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_phone_numbers() {
        let valid_phones = vec![
            "123-456-7890",
            "(123) 456-7890",
            "123.456.7890",
            "1234567890",
            "(555 123 4567",
            "phone: 555-987-6543",
        ];

        for phone in valid_phones {
            assert!(is_valid(phone), "Should be valid: {}", phone);
        }
    }

    #[test]
    fn test_invalid_phone_numbers() {
        let invalid_phones = vec![
            "123-456",
            "123-45-678",
            "+1 123-456-7890", // 11 digits
            "abcd",
            "",
        ];

        for phone in invalid_phones {
            assert!(!is_valid(phone), "Should be invalid: {}", phone);
        }
    }
}
