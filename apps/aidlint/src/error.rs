//! Error kinds for the scan pipeline.
//!
//! Exactly two kinds exist: a missing target file, and everything else.
//! Both are fatal; no checks run once loading fails.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Dockerfile not found at: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Unexpected {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
