pub mod error;
pub mod extractor;
pub mod input;
pub mod patterns;
pub mod report;

pub use error::InputError;
pub use extractor::{
    extract, extract_line_findings, extract_parallel, extract_parallel_with, extract_selected,
    extract_selected_parallel, extract_with, CategoryOutcome, Extraction, ExtractionObserver,
    ExtractionResult, LineFinding, RejectionTally,
};
pub use patterns::{Category, PatternMatcher};

/// Categories for which `value`, taken as a whole, is both matched by the
/// extraction pattern and accepted by the validator.
pub fn classify(value: &str) -> Vec<Category> {
    if value.is_empty() {
        return vec![];
    }

    Category::ALL
        .into_iter()
        .filter(|category| {
            category.extract(value).first().map(String::as_str) == Some(value)
                && category.is_valid(value)
        })
        .collect()
}

pub fn get_all_matchers() -> Vec<(Category, &'static dyn PatternMatcher)> {
    Category::ALL
        .into_iter()
        .map(|category| (category, category.matcher()))
        .collect()
}
