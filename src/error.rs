//! Error type shared by rule reading, merging and configuration loading.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MergeError {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to locate executable")]
    InstallRoot(#[source] std::io::Error),
    #[error("executable path has no install root: {}", .0.display())]
    NoInstallRoot(PathBuf),
    // Boxed: figment errors carry their whole metadata chain.
    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),
}
