use super::digit::is_decimal_digit;
use super::extraction::hashtag::extract_hashtags;
use super::PatternMatcher;

const MIN_HASHTAG_LEN: usize = 2;
const MAX_HASHTAG_LEN: usize = 50;

/// Length counts the leading `#`. A tag made only of digits is rejected.
pub fn is_valid(value: &str) -> bool {
    let len = value.chars().count();
    if !(MIN_HASHTAG_LEN..=MAX_HASHTAG_LEN).contains(&len) {
        return false;
    }

    let mut content = value.chars();
    content.next();
    let content = content.as_str();

    let all_digits = !content.is_empty() && content.chars().all(is_decimal_digit);
    !all_digits
}

pub struct HashtagMatcher {}

impl PatternMatcher for HashtagMatcher {
    fn extract(&self, text: &str) -> Vec<String> {
        extract_hashtags(text)
    }

    fn is_valid(&self, candidate: &str) -> bool {
        is_valid(candidate)
    }
}
