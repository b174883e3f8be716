use regex::Regex;
use lazy_static::lazy_static;

lazy_static! {
    static ref EMAIL_EXTRACTION_PATTERN: Regex = Regex::new(
        r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}"
    ).unwrap();
}

pub fn extract_emails(text: &str) -> Vec<String> {
    EMAIL_EXTRACTION_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
