//! Metadata files holding the workspace version.
//!
//! Both files are treated as plain text. Only the quoted value of the first
//! matching `version = "..."` line is rewritten; every other byte is kept.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex_lite::Regex;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::VersionError;

/// First line-anchored `version = "..."` anywhere in the file.
static WORKSPACE_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^(\s*version\s*=\s*")([^"]+)(")"#)
        .expect("Invalid regex")
});

/// First `version = "..."` line following a `[project]` header.
static PROJECT_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?ms)^(\[project\].*?^\s*version\s*=\s*")([^"]+)(")"#)
        .expect("Invalid regex")
});

/// The kind of metadata file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataFile {
    /// Workspace-level `Cargo.toml`, authoritative.
    Workspace,
    /// Project-level `pyproject.toml`, a mirrored copy.
    Project,
}

impl MetadataFile {
    /// Every metadata file, in update order.
    pub const ALL: [MetadataFile; 2] = [MetadataFile::Workspace, MetadataFile::Project];

    pub fn file_name(&self) -> &'static str {
        match self {
            MetadataFile::Workspace => "Cargo.toml",
            MetadataFile::Project => "pyproject.toml",
        }
    }

    /// Label used in confirmation output.
    pub fn label(&self) -> &'static str {
        match self {
            MetadataFile::Workspace => "Cargo.toml (workspace)",
            MetadataFile::Project => "pyproject.toml",
        }
    }

    /// The table the version line is expected under.
    pub fn section(&self) -> &'static str {
        match self {
            MetadataFile::Workspace => "[workspace.package]",
            MetadataFile::Project => "[project]",
        }
    }

    pub fn path_in(&self, root: &Path) -> PathBuf {
        root.join(self.file_name())
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            MetadataFile::Workspace => &*WORKSPACE_VERSION_RE,
            MetadataFile::Project => &*PROJECT_VERSION_RE,
        }
    }
}

impl std::fmt::Display for MetadataFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Find the current version value in `content`.
///
/// The value is returned as captured, without checking the `X.Y.Z` shape.
pub fn find_version(kind: MetadataFile, content: &str) -> Option<&str> {
    kind.pattern()
        .captures(content)
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str())
}

/// Replace the first version value in `content` with `new_version`.
///
/// Returns the old value and the rewritten content, or `None` when nothing
/// matches. The replacement is inserted literally.
pub fn replace_version(
    kind: MetadataFile,
    content: &str,
    new_version: &str,
) -> Option<(String, String)> {
    let value = kind.pattern().captures(content)?.get(2)?;

    let mut updated = String::with_capacity(content.len() + new_version.len());
    updated.push_str(&content[..value.start()]);
    updated.push_str(new_version);
    updated.push_str(&content[value.end()..]);

    Some((value.as_str().to_string(), updated))
}

pub fn read_file(path: &Path) -> Result<String, VersionError> {
    debug!(path = %path.display(), "reading metadata file");
    std::fs::read_to_string(path).map_err(|e| VersionError::ReadFailed {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write `content` to `path` through a temp file in the same directory.
///
/// The target is replaced by rename, so readers never see a partial file.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), VersionError> {
    let write_failed = |e: std::io::Error| VersionError::WriteFailed {
        path: path.to_path_buf(),
        source: e,
    };

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir).map_err(write_failed)?;
    tmp.write_all(content.as_bytes()).map_err(write_failed)?;
    tmp.as_file().sync_all().map_err(write_failed)?;

    if let Ok(meta) = std::fs::metadata(path) {
        tmp.as_file()
            .set_permissions(meta.permissions())
            .map_err(write_failed)?;
    }

    tmp.persist(path).map_err(|e| write_failed(e.error))?;
    debug!(path = %path.display(), bytes = content.len(), "persisted metadata file");
    Ok(())
}
