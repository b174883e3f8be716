use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures of the input provider. Extraction itself never fails.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("input file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
