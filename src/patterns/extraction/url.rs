use regex::Regex;
use lazy_static::lazy_static;

lazy_static! {
    static ref URL_EXTRACTION_PATTERN: Regex = Regex::new(
        r"https?://[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}[/\w.-]*"
    ).unwrap();
}

pub fn extract_urls(text: &str) -> Vec<String> {
    URL_EXTRACTION_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_urls() {
        let text = "See https://www.example.com/meeting and http://company-site.org/resources.";
        assert_eq!(
            extract_urls(text),
            vec![
                "https://www.example.com/meeting",
                "http://company-site.org/resources."
            ]
        );
    }

    #[test]
    fn test_query_string_is_not_part_of_match() {
        assert_eq!(
            extract_urls("https://docs.google.com/presentation?id=7"),
            vec!["https://docs.google.com/presentation"]
        );
    }

    #[test]
    fn test_requires_scheme_and_tld() {
        assert!(extract_urls("www.example.com").is_empty());
        assert!(extract_urls("ftp://example.com").is_empty());
        assert!(extract_urls("http://localhost/path").is_empty());
    }
}
