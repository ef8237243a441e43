//! harbor-version - CLI entry point.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use harbor_version::manager::print_plan;
use harbor_version::{BumpType, VersionManager};

/// Read, set, and bump the Harbor workspace version.
#[derive(Parser, Debug)]
#[command(name = "harbor-version")]
#[command(about = "Read, set, and bump the version in Cargo.toml and pyproject.toml")]
#[command(version)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the current version
    Show,

    /// Print the bare version string
    Get,

    /// Set an explicit version in both metadata files
    Set {
        /// New version string, written as given
        version: String,

        /// Print the planned changes without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Bump the version by major, minor, or patch
    Bump {
        /// One of: major, minor, patch
        bump_type: BumpType,

        /// Print the planned changes without writing
        #[arg(long)]
        dry_run: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let manager = VersionManager::locate();

    match cli.command {
        Command::Show => {
            manager
                .show_version()
                .context("Failed to read current version")?;
        }
        Command::Get => {
            let version = manager
                .get_version()
                .context("Failed to read current version")?;
            println!("{}", version);
        }
        Command::Set { version, dry_run } => {
            if dry_run {
                preview(&manager, &version)?;
            } else {
                manager
                    .set_version(&version)
                    .with_context(|| format!("Failed to set version to {}", version))?;
            }
        }
        Command::Bump { bump_type, dry_run } => {
            if dry_run {
                let next = manager
                    .next_version(bump_type)
                    .with_context(|| format!("Failed to compute {} bump", bump_type))?;
                preview(&manager, &next.to_string())?;
            } else {
                manager
                    .bump_version(bump_type)
                    .with_context(|| format!("Failed to bump {} version", bump_type))?;
            }
        }
    }

    Ok(())
}

/// Print what a version change would rewrite without writing it.
fn preview(manager: &VersionManager, version: &str) -> Result<()> {
    let changes = manager
        .plan_version(version)
        .context("Failed to plan version change")?;

    println!("--- Dry Run ---");
    print_plan(&changes);
    Ok(())
}

/// `--verbose` forces debug; otherwise `RUST_LOG`, defaulting to warn.
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}

fn init_tracing(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bump_rejects_unknown_tag() {
        let err = Cli::try_parse_from(["harbor-version", "bump", "bogus"]).unwrap_err();
        assert!(err.to_string().contains("Invalid bump type: bogus"));
    }

    #[test]
    fn test_bump_parses_tag_and_dry_run() {
        let cli = Cli::try_parse_from(["harbor-version", "bump", "minor", "--dry-run"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Bump { bump_type: BumpType::Minor, dry_run: true }
        ));
    }

    #[test]
    fn test_set_takes_version_verbatim() {
        let cli = Cli::try_parse_from(["harbor-version", "set", "1.2"]).unwrap();
        match cli.command {
            Command::Set { version, dry_run } => {
                assert_eq!(version, "1.2");
                assert!(!dry_run);
            }
            other => panic!("expected Set, got {:?}", other),
        }
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["harbor-version", "show", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Show));
    }

    #[test]
    fn test_verbose_selects_debug_filter() {
        assert_eq!(log_filter(true).to_string(), "debug");
    }
}
