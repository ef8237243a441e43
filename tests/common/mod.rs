//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::PathBuf;

use harbor_version::VersionManager;

pub const CARGO_TOML: &str = r#"[workspace]
resolver = "2"
members = ["crates/core", "crates/cli"]

[workspace.package]
version = "1.2.3"
edition = "2021"
license = "MIT"

[workspace.dependencies]
serde = { version = "1", features = ["derive"] }
"#;

pub const PYPROJECT_TOML: &str = r#"[build-system]
requires = ["maturin>=1.0"]
build-backend = "maturin"

[project]
name = "harbor"
description = "Harbor bindings"
version = "1.2.3"
requires-python = ">=3.10"
"#;

/// A temporary workspace holding both metadata files.
pub struct TestWorkspace {
    pub dir: tempfile::TempDir,
}

impl TestWorkspace {
    /// Workspace with the default fixtures at version 1.2.3.
    pub fn new() -> Self {
        Self::with_files(CARGO_TOML, PYPROJECT_TOML)
    }

    /// Workspace with custom file contents.
    pub fn with_files(cargo: &str, pyproject: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        std::fs::write(dir.path().join("Cargo.toml"), cargo)
            .expect("Failed to write Cargo.toml");
        std::fs::write(dir.path().join("pyproject.toml"), pyproject)
            .expect("Failed to write pyproject.toml");
        Self { dir }
    }

    /// Workspace whose Cargo.toml carries the given version string.
    pub fn at_version(version: &str) -> Self {
        Self::with_files(
            &CARGO_TOML.replace("1.2.3", version),
            &PYPROJECT_TOML.replace("1.2.3", version),
        )
    }

    pub fn manager(&self) -> VersionManager {
        VersionManager::new(self.dir.path())
    }

    pub fn cargo_path(&self) -> PathBuf {
        self.dir.path().join("Cargo.toml")
    }

    pub fn pyproject_path(&self) -> PathBuf {
        self.dir.path().join("pyproject.toml")
    }

    pub fn cargo(&self) -> String {
        std::fs::read_to_string(self.cargo_path()).expect("Failed to read Cargo.toml")
    }

    pub fn pyproject(&self) -> String {
        std::fs::read_to_string(self.pyproject_path())
            .expect("Failed to read pyproject.toml")
    }
}
