use regex::Regex;
use lazy_static::lazy_static;

lazy_static! {
    static ref HASHTAG_EXTRACTION_PATTERN: Regex = Regex::new(
        r"#[A-Za-z0-9_]+"
    ).unwrap();
}

pub fn extract_hashtags(text: &str) -> Vec<String> {
    HASHTAG_EXTRACTION_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_hashtags() {
        let text = "#TechConference2024 #Innovation #Python #data_science";
        assert_eq!(
            extract_hashtags(text),
            vec!["#TechConference2024", "#Innovation", "#Python", "#data_science"]
        );
    }

    #[test]
    fn test_lone_hash_is_not_a_candidate() {
        assert!(extract_hashtags("#").is_empty());
        assert!(extract_hashtags("# heading").is_empty());
    }

    #[test]
    fn test_stops_at_punctuation() {
        assert_eq!(extract_hashtags("#rust-lang"), vec!["#rust"]);
    }

    #[test]
    fn test_numeric_tags_are_still_candidates() {
        assert_eq!(extract_hashtags("#123 (only numbers)"), vec!["#123"]);
    }
}
