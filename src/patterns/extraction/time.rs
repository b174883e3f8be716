use regex::Regex;
use lazy_static::lazy_static;

lazy_static! {
    // The optional whitespace is consumed even when no meridiem follows it.
    static ref TIME_EXTRACTION_PATTERN: Regex = Regex::new(
        r"\d{1,2}:\d{2}\s?(?i:AM|PM)?"
    ).unwrap();
}

pub fn extract_times(text: &str) -> Vec<String> {
    TIME_EXTRACTION_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
