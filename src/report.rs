use crate::extractor::Extraction;
use crate::patterns::Category;
use serde_json::{json, Value};
use std::fmt::Write;

const RULE_WIDTH: usize = 60;

fn label(category: Category) -> &'static str {
    match category {
        Category::Email => "EMAILS",
        Category::Url => "URLs",
        Category::Phone => "PHONE NUMBERS",
        Category::Time => "TIMES",
        Category::Hashtag => "HASHTAGS",
    }
}

pub fn rule() -> String {
    ".".repeat(RULE_WIDTH)
}

/// Human-readable report: one numbered block per extracted category, then
/// the totals.
pub fn render_text(extraction: &Extraction) -> String {
    let rule = rule();
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}\nEXTRACTION RESULTS\n{}\n", rule, rule);

    for (category, items) in extraction.results.iter() {
        let _ = writeln!(
            out,
            "{}: {} found ({} rejected)",
            label(category),
            items.len(),
            extraction.rejected.get(category)
        );
        if items.is_empty() {
            let _ = writeln!(out, "   (none found)");
        } else {
            for (i, item) in items.iter().enumerate() {
                let _ = writeln!(out, "   {}. {}", i + 1, item);
            }
        }
        out.push('\n');
    }

    let _ = writeln!(out, "{}\nSUMMARY\n{}", rule, rule);
    let _ = writeln!(out, "Total valid items: {}", extraction.total_valid());
    let _ = writeln!(out, "Total rejected items: {}", extraction.total_rejected());
    let _ = writeln!(out, "{}", rule);

    out
}

/// Machine-readable report, shaped like the classifier's stats document.
pub fn render_json(extraction: &Extraction, source: &str) -> Value {
    let categories: Vec<Value> = extraction
        .results
        .iter()
        .map(|(category, items)| {
            json!({
                "category": category.name(),
                "found": items.len(),
                "rejected": extraction.rejected.get(category),
                "items": items
            })
        })
        .collect();

    json!({
        "summary": {
            "total_valid": extraction.total_valid(),
            "total_rejected": extraction.total_rejected(),
            "source": source
        },
        "categories": categories
    })
}
