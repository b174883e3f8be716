use super::digit::parse_int;
use super::extraction::time::extract_times;
use super::PatternMatcher;

/// Checks that a clock time makes sense.
///
/// Minutes are always 0-59. Hours are 1-12 when a meridiem (`AM`/`PM`, any
/// case) is present anywhere in the value and 0-23 otherwise. Anything that
/// does not split into exactly two integer parts around a single `:` is
/// rejected.
pub fn is_valid(value: &str) -> bool {
    let normalized = value.replace(' ', "").to_uppercase();

    let parts: Vec<&str> = normalized.split(':').collect();
    if parts.len() != 2 {
        return false;
    }

    let hours = match parse_int(parts[0]) {
        Some(hours) => hours,
        None => return false,
    };
    let minutes = match parse_int(&parts[1].replace("AM", "").replace("PM", "")) {
        Some(minutes) => minutes,
        None => return false,
    };

    if !(0..=59).contains(&minutes) {
        return false;
    }

    if normalized.contains("AM") || normalized.contains("PM") {
        (1..=12).contains(&hours)
    } else {
        (0..=23).contains(&hours)
    }
}

pub struct TimeMatcher {}

impl PatternMatcher for TimeMatcher {
    fn extract(&self, text: &str) -> Vec<String> {
        extract_times(text)
    }

    fn is_valid(&self, candidate: &str) -> bool {
        is_valid(candidate)
    }
}
