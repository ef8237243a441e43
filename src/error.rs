//! Error types for harbor-version using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading, rewriting, or bumping the workspace version.
#[derive(Error, Debug)]
pub enum VersionError {
    #[error("Version not found in {} [workspace.package] section", path.display())]
    VersionNotFound { path: PathBuf },

    #[error("Invalid version format: {0}")]
    InvalidFormat(String),

    #[error("Invalid version component '{component}' in {version}: {source}")]
    InvalidComponent {
        version: String,
        component: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("Cannot apply {bump} bump to {version}: component would overflow")]
    ComponentOverflow {
        version: String,
        bump: crate::version::BumpType,
    },

    #[error("Invalid bump type: {0}. Use 'major', 'minor', or 'patch'")]
    InvalidBumpType(String),

    #[error("No version line found under {section} in {}", path.display())]
    PatternNotFound { path: PathBuf, section: &'static str },

    #[error("Failed to read {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to restore {} after a partial update: {reason}", path.display())]
    RollbackFailed { path: PathBuf, reason: String },
}
