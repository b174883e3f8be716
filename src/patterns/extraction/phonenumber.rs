use regex::Regex;
use lazy_static::lazy_static;

lazy_static! {
    // Parentheses are independently optional, so "(555 123 4567" matches too.
    static ref PHONE_EXTRACTION_PATTERN: Regex = Regex::new(
        r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}"
    ).unwrap();
}

pub fn extract_phonenumbers(text: &str) -> Vec<String> {
    PHONE_EXTRACTION_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
