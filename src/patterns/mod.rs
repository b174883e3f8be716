pub mod digit;
pub mod email;
pub mod extraction;
pub mod hashtag;
pub mod phonenumber;
pub mod time;
pub mod url;

use serde::Serialize;
use std::fmt;

/// Pairs an extraction pattern with the semantic check applied to what it finds.
pub trait PatternMatcher: Sync {
    /// Every non-overlapping match, left to right, duplicates included.
    fn extract(&self, text: &str) -> Vec<String>;

    /// Whether a matched candidate is a plausible instance of the category.
    fn is_valid(&self, candidate: &str) -> bool;
}

/// The fixed set of token kinds the extractor knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Email,
    Url,
    Phone,
    Time,
    Hashtag,
}

impl Category {
    /// Report order.
    pub const ALL: [Category; 5] = [
        Category::Email,
        Category::Url,
        Category::Phone,
        Category::Time,
        Category::Hashtag,
    ];

    pub fn matcher(self) -> &'static dyn PatternMatcher {
        match self {
            Category::Email => &email::EmailMatcher {},
            Category::Url => &url::UrlMatcher {},
            Category::Phone => &phonenumber::PhoneNumberMatcher {},
            Category::Time => &time::TimeMatcher {},
            Category::Hashtag => &hashtag::HashtagMatcher {},
        }
    }

    pub fn extract(self, text: &str) -> Vec<String> {
        self.matcher().extract(text)
    }

    pub fn is_valid(self, candidate: &str) -> bool {
        self.matcher().is_valid(candidate)
    }

    /// Machine-readable name, also used as the JSON key.
    pub fn name(self) -> &'static str {
        match self {
            Category::Email => "email",
            Category::Url => "url",
            Category::Phone => "phone",
            Category::Time => "time",
            Category::Hashtag => "hashtag",
        }
    }

    /// Plural form used in progress messages ("Searching for emails...").
    pub fn plural(self) -> &'static str {
        match self {
            Category::Email => "emails",
            Category::Url => "URLs",
            Category::Phone => "phone numbers",
            Category::Time => "times",
            Category::Hashtag => "hashtags",
        }
    }

    pub fn from_name(name: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_names_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_name(category.name()), Some(category));
        }
        assert_eq!(Category::from_name(" EMAIL "), Some(Category::Email));
        assert_eq!(Category::from_name("ip"), None);
    }

    #[test]
    fn test_matchers_are_paired_with_their_category() {
        assert_eq!(Category::Email.extract("mail me at a@b.io"), vec!["a@b.io"]);
        assert!(Category::Hashtag.is_valid("#rust"));
        assert!(!Category::Hashtag.is_valid("#2024"));
        assert!(Category::Time.extract("no clock here").is_empty());
    }
}
