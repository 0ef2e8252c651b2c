//! Page integration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Error raised while generating `config.js` or rewriting pages.
#[derive(Debug, Error)]
pub enum PagesError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
