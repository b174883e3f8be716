//! Supplies the text to scan: a file, or the built-in sample when the file
//! does not exist.

use crate::error::InputError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const DEFAULT_INPUT_FILE: &str = "input.txt";

pub const SAMPLE_TEXT: &str = "\
Hi everyone!

Meeting scheduled for 2:30 PM tomorrow or 14:30 on Thursday.
Alternative times: 9:00 AM, 11:45 AM, 3:15 PM

Contact Information:
- John Smith: john.smith@example.com, (555) 123-4567
- Sarah Jones: sarah@company.co.uk, 555-987-6543
- Mike Davis: mike.davis@testmail.org, 555.111.2222

Resources:
https://www.example.com/meeting
https://docs.google.com/presentation
http://company-site.org/resources

Social Media:
#TechConference2024 #Innovation #Python #DataScience

Invalid Examples (should be rejected)
Bad email: notanemail@
Bad phone: 123-456 (too short)
Bad time: 25:99
Bad hashtag: #123 (only numbers)
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Sample,
}

#[derive(Debug, Clone)]
pub struct LoadedInput {
    pub text: String,
    pub source: InputSource,
}

pub fn load_text(path: &Path) -> Result<String, InputError> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => InputError::NotFound(path.to_path_buf()),
        _ => InputError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Reads `path`, falling back to [`SAMPLE_TEXT`] only when the file is missing.
pub fn load_or_sample(path: &Path) -> Result<LoadedInput, InputError> {
    match load_text(path) {
        Ok(text) => {
            info!(path = %path.display(), bytes = text.len(), "loaded input");
            Ok(LoadedInput {
                text,
                source: InputSource::File(path.to_path_buf()),
            })
        }
        Err(InputError::NotFound(missing)) => {
            warn!(path = %missing.display(), "input file not found, using sample text");
            Ok(LoadedInput {
                text: SAMPLE_TEXT.to_string(),
                source: InputSource::Sample,
            })
        }
        Err(e) => Err(e),
    }
}
