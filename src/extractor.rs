//! Runs every category's pattern over a text, validates each candidate and
//! folds the outcome into per-category results and reject counts.

use crate::patterns::Category;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

/// Accepted values per category, deduplicated, in order of first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionResult(BTreeMap<Category, Vec<String>>);

impl ExtractionResult {
    pub fn get(&self, category: Category) -> &[String] {
        self.0.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> + '_ {
        self.0.iter().map(|(category, values)| (*category, values.as_slice()))
    }

    pub fn total(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }
}

/// Number of pattern matches per category that failed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RejectionTally(BTreeMap<Category, usize>);

impl RejectionTally {
    pub fn get(&self, category: Category) -> usize {
        self.0.get(&category).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Extraction {
    pub results: ExtractionResult,
    pub rejected: RejectionTally,
}

impl Extraction {
    pub fn total_valid(&self) -> usize {
        self.results.total()
    }

    pub fn total_rejected(&self) -> usize {
        self.rejected.total()
    }
}

/// What one category produced for a single text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryOutcome {
    pub accepted: Vec<String>,
    pub rejected: usize,
}

/// Progress hook, notified around each category. Both methods default to no-ops.
pub trait ExtractionObserver: Sync {
    fn category_started(&self, _category: Category) {}

    fn category_finished(&self, _category: Category, _outcome: &CategoryOutcome) {}
}

pub struct NoopObserver;

impl ExtractionObserver for NoopObserver {}

/// Keeps the first occurrence of every value, exact string comparison.
pub fn dedup_preserving_order(values: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect()
}

/// Validates candidates in order. Rejects are counted before deduplication.
pub fn aggregate(category: Category, candidates: Vec<String>) -> CategoryOutcome {
    let mut accepted = Vec::new();
    let mut rejected = 0;

    for candidate in candidates {
        if category.is_valid(&candidate) {
            accepted.push(candidate);
        } else {
            rejected += 1;
        }
    }

    CategoryOutcome {
        accepted: dedup_preserving_order(accepted),
        rejected,
    }
}

pub fn extract_category(category: Category, text: &str) -> CategoryOutcome {
    let candidates = category.extract(text);
    let matched = candidates.len();
    let outcome = aggregate(category, candidates);
    debug!(
        category = category.name(),
        matched,
        accepted = outcome.accepted.len(),
        rejected = outcome.rejected,
        "category extracted"
    );
    outcome
}

fn run_category(category: Category, text: &str, observer: &dyn ExtractionObserver) -> (Category, CategoryOutcome) {
    observer.category_started(category);
    let outcome = extract_category(category, text);
    observer.category_finished(category, &outcome);
    (category, outcome)
}

fn collect_outcomes(outcomes: impl IntoIterator<Item = (Category, CategoryOutcome)>) -> Extraction {
    let mut results = BTreeMap::new();
    let mut rejected = BTreeMap::new();

    for (category, outcome) in outcomes {
        results.insert(category, outcome.accepted);
        rejected.insert(category, outcome.rejected);
    }

    Extraction {
        results: ExtractionResult(results),
        rejected: RejectionTally(rejected),
    }
}

/// Extracts every category from `text`, one after another.
pub fn extract(text: &str) -> Extraction {
    extract_with(text, &NoopObserver)
}

pub fn extract_with(text: &str, observer: &dyn ExtractionObserver) -> Extraction {
    extract_selected(text, &Category::ALL, observer)
}

/// Extracts only `categories`; the others are absent from the result.
pub fn extract_selected(
    text: &str,
    categories: &[Category],
    observer: &dyn ExtractionObserver,
) -> Extraction {
    collect_outcomes(
        categories
            .iter()
            .map(|category| run_category(*category, text, observer)),
    )
}

/// Same result as [`extract`], with the categories spread over the rayon pool.
pub fn extract_parallel(text: &str) -> Extraction {
    extract_parallel_with(text, &NoopObserver)
}

/// Observer calls may arrive from several threads and in any category order.
pub fn extract_parallel_with(text: &str, observer: &dyn ExtractionObserver) -> Extraction {
    extract_selected_parallel(text, &Category::ALL, observer)
}

pub fn extract_selected_parallel(
    text: &str,
    categories: &[Category],
    observer: &dyn ExtractionObserver,
) -> Extraction {
    let outcomes: Vec<(Category, CategoryOutcome)> = categories
        .par_iter()
        .map(|category| run_category(*category, text, observer))
        .collect();
    collect_outcomes(outcomes)
}

/// A validated value and the 1-based line it was found on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineFinding {
    pub line: usize,
    #[serde(rename = "type")]
    pub category: Category,
    pub value: String,
}

/// Per-line scan for the findings export. Values are neither deduplicated
/// nor tallied; rejected candidates are dropped.
pub fn extract_line_findings(text: &str) -> Vec<LineFinding> {
    let mut findings = Vec::new();

    for (index, line) in text.lines().enumerate() {
        for category in Category::ALL {
            for value in category.extract(line) {
                if category.is_valid(&value) {
                    findings.push(LineFinding {
                        line: index + 1,
                        category,
                        value,
                    });
                }
            }
        }
    }

    findings
}
