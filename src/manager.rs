//! The version manager: read, set, show, and bump the workspace version.
//!
//! Every call re-reads the metadata files; nothing is cached between calls.

use std::path::{Path, PathBuf};

use semver::Version;
use tracing::{debug, warn};

use crate::error::VersionError;
use crate::version::files::{read_file, write_atomic};
use crate::version::{
    BumpType, MetadataFile, apply_bump, find_version, parse_version, replace_version,
};

/// Directories between this crate's manifest and the workspace root.
///
/// The crate lives at `<root>/tools/version/`.
const WORKSPACE_ROOT_DEPTH: usize = 2;

/// The Harbor workspace root, at a fixed offset from this crate.
pub fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .ancestors()
        .nth(WORKSPACE_ROOT_DEPTH)
        .unwrap_or(manifest_dir)
        .to_path_buf()
}

/// A planned rewrite of one metadata file.
#[derive(Debug, Clone)]
pub struct FileChange {
    pub kind: MetadataFile,
    pub path: PathBuf,
    pub old_version: String,
    pub new_version: String,
    /// File content before the change, kept for rollback.
    pub original: String,
    /// File content after the change.
    pub content: String,
}

/// Reads and rewrites the version across the workspace metadata files.
#[derive(Debug, Clone)]
pub struct VersionManager {
    root: PathBuf,
}

impl VersionManager {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Manager bound to [`workspace_root`].
    pub fn locate() -> Self {
        Self::new(workspace_root())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the current version from the workspace `Cargo.toml`.
    ///
    /// The value is returned as written; the `X.Y.Z` shape is only enforced
    /// when bumping.
    pub fn get_version(&self) -> Result<String, VersionError> {
        let path = MetadataFile::Workspace.path_in(&self.root);
        let content = read_file(&path)?;

        let version = find_version(MetadataFile::Workspace, &content)
            .ok_or_else(|| VersionError::VersionNotFound { path: path.clone() })?;

        debug!(path = %path.display(), version, "found workspace version");
        Ok(version.to_string())
    }

    /// Compute the rewrite of every metadata file without touching disk.
    ///
    /// Fails with `PatternNotFound` if either file lacks a version line, so a
    /// plan is always complete.
    pub fn plan_version(&self, new_version: &str) -> Result<Vec<FileChange>, VersionError> {
        MetadataFile::ALL
            .iter()
            .map(|&kind| -> Result<FileChange, VersionError> {
                let path = kind.path_in(&self.root);
                let original = read_file(&path)?;

                let (old_version, content) = replace_version(kind, &original, new_version)
                    .ok_or_else(|| VersionError::PatternNotFound {
                        path: path.clone(),
                        section: kind.section(),
                    })?;

                debug!(
                    file = %kind,
                    old = %old_version,
                    new = new_version,
                    "planned version change"
                );
                Ok(FileChange {
                    kind,
                    path,
                    old_version,
                    new_version: new_version.to_string(),
                    original,
                    content,
                })
            })
            .collect()
    }

    /// Write planned changes in order.
    ///
    /// If a write fails, files already written are restored to their original
    /// content before the error is returned.
    pub fn apply(&self, changes: &[FileChange]) -> Result<(), VersionError> {
        for (i, change) in changes.iter().enumerate() {
            if let Err(e) = write_atomic(&change.path, &change.content) {
                warn!(file = %change.kind, error = %e, "write failed, restoring updated files");
                rollback(&changes[..i], &e)?;
                return Err(e);
            }
        }
        Ok(())
    }

    /// Set the version in both `Cargo.toml` and `pyproject.toml`.
    ///
    /// The new value is not validated. Returns the paths that were rewritten.
    pub fn set_version(&self, new_version: &str) -> Result<Vec<PathBuf>, VersionError> {
        let changes = self.plan_version(new_version)?;
        self.apply(&changes)?;

        println!("✓ Updated version to {}", new_version);
        for change in &changes {
            println!("  - {}", change.kind.label());
        }

        Ok(changes.into_iter().map(|c| c.path).collect())
    }

    /// Print the current version. Returns the printed line.
    pub fn show_version(&self) -> Result<String, VersionError> {
        let line = format!("Current version: {}", self.get_version()?);
        println!("{}", line);
        Ok(line)
    }

    /// Compute the bumped version from the current one without writing.
    pub fn next_version(&self, bump: BumpType) -> Result<Version, VersionError> {
        let current = self.get_version()?;
        let base = parse_version(&current)?;
        apply_bump(&base, bump)
    }

    /// Bump the version and print the release follow-up steps.
    pub fn bump_version(&self, bump: BumpType) -> Result<Version, VersionError> {
        let next = self.next_version(bump)?;
        debug!(%bump, version = %next, "bumping version");

        self.set_version(&next.to_string())?;
        print_next_steps(&next);

        Ok(next)
    }
}

/// Print a planned change per file, as used by `--dry-run`.
pub fn print_plan(changes: &[FileChange]) {
    for change in changes {
        println!(
            "  [UPDATE] {}: {} -> {}",
            change.kind.label(),
            change.old_version,
            change.new_version
        );
    }
}

fn print_next_steps(version: &Version) {
    println!("\n📋 Next steps:");
    println!("  1. Review changes: git diff");
    println!("  2. Commit: git commit -am 'chore: bump version to {}'", version);
    println!("  3. Tag: git tag v{}", version);
    println!("  4. Push: git push && git push --tags");
}

fn rollback(written: &[FileChange], cause: &VersionError) -> Result<(), VersionError> {
    for change in written.iter().rev() {
        write_atomic(&change.path, &change.original).map_err(|e| {
            VersionError::RollbackFailed {
                path: change.path.clone(),
                reason: format!("{} (after: {})", e, cause),
            }
        })?;
        debug!(file = %change.kind, "restored original content");
    }
    Ok(())
}
