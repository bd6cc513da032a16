//! Shared setup for the roadnet binaries.

use std::path::PathBuf;

use anyhow::{Context, Result};
use env_logger::{Builder, Env};

/// Log to stderr, filtered by `RUST_LOG` (default `info`).
pub fn init_logging() {
    Builder::from_env(Env::default().default_filter_or("info")).init();
}

/// Output directory from an optional argument, created if missing.
pub fn output_dir(arg: Option<String>) -> Result<PathBuf> {
    let dir = PathBuf::from(arg.unwrap_or_else(|| ".".to_owned()));
    std::fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;
    Ok(dir)
}
