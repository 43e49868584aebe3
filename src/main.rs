//! pubbump - CLI entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pubbump::{DEFAULT_MANIFEST_PATH, bump_patch, plan_patch_bump, read_version};

/// Bump the patch version in a Flutter pubspec.yaml.
#[derive(Parser, Debug)]
#[command(name = "pubbump")]
#[command(about = "Bump the patch version in a Flutter pubspec.yaml")]
#[command(version)]
struct Cli {
    /// Path to the manifest
    #[arg(short = 'm', long, env = "PUBBUMP_MANIFEST", default_value = DEFAULT_MANIFEST_PATH)]
    manifest: PathBuf,

    /// Dry run - print the new version without writing
    #[arg(long, conflicts_with = "show")]
    dry_run: bool,

    /// Print the current version and its Android versionName/versionCode
    #[arg(long)]
    show: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let path = &cli.manifest;

    if cli.show {
        let version = read_version(path)
            .with_context(|| format!("Failed to read version from {}", path.display()))?;

        println!("version:     {}", version);
        println!("versionName: {}", version.version_name());
        println!("versionCode: {}", version.version_code());
        return Ok(());
    }

    if cli.dry_run {
        let outcome = plan_patch_bump(path)
            .with_context(|| format!("Failed to plan bump for {}", path.display()))?;

        println!("Version: {} -> {} (dry run)", outcome.previous, outcome.current);
        return Ok(());
    }

    let outcome = bump_patch(path)
        .with_context(|| format!("Failed to bump version in {}", path.display()))?;

    println!("✓ Version: {} -> {}", outcome.previous, outcome.current);

    Ok(())
}

/// Send logs to stderr. `--verbose` forces debug output for this crate,
/// otherwise `RUST_LOG` decides and the default is warnings only.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("pubbump=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
