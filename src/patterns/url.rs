use super::extraction::url::extract_urls;
use super::PatternMatcher;

const MAX_URL_LEN: usize = 200;

pub fn is_valid(value: &str) -> bool {
    if value.chars().count() > MAX_URL_LEN {
        return false;
    }
    value.starts_with("http://") || value.starts_with("https://")
}

pub struct UrlMatcher {}

impl PatternMatcher for UrlMatcher {
    fn extract(&self, text: &str) -> Vec<String> {
        extract_urls(text)
    }

    fn is_valid(&self, candidate: &str) -> bool {
        is_valid(candidate)
    }
}
