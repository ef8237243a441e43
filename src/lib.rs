//! harbor-version - reads, sets, and bumps the Harbor workspace version.
//!
//! # Overview
//!
//! The version lives in two places: the `[workspace.package]` table of the
//! workspace `Cargo.toml` (authoritative) and the `[project]` table of
//! `pyproject.toml` (mirrored). [`VersionManager`] keeps them in step by
//! rewriting only the quoted version value in each file.

pub mod error;
pub mod manager;
pub mod version;

// Re-export commonly used types
pub use error::VersionError;
pub use manager::{FileChange, VersionManager, workspace_root};
pub use version::{BumpType, MetadataFile};
