//! Version parsing, bumping, and the metadata files that carry it.

pub mod bump;
pub mod files;

pub use bump::{BumpType, apply_bump, parse_version};
pub use files::{MetadataFile, find_version, replace_version};
