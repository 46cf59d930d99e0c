// src/cli/status.rs — Resolved configuration display

use std::path::{Path, PathBuf};

use crate::infra::config::Config;
use crate::infra::paths;

/// Display the effective configuration. The API key is never printed.
///
/// `explicit` is the `--config` path, if one was given.
pub fn show_config(config: &Config, explicit: Option<&Path>) -> anyhow::Result<()> {
    println!("interview-coach v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("  Config:     {}", config_source(explicit));
    println!("  API key:    {}", key_status(config));
    println!();

    let mut shown = config.clone();
    shown.grading.api_key = shown.grading.api_key.map(|_| "<redacted>".into());
    print!("{}", toml::to_string_pretty(&shown)?);
    Ok(())
}

/// Where the effective config came from.
fn config_source(explicit: Option<&Path>) -> String {
    let path: PathBuf = match explicit {
        Some(p) => p.to_path_buf(),
        None => paths::config_file_path(),
    };
    if explicit.is_some() || path.exists() {
        format!("{} (loaded)", path.display())
    } else {
        "(using defaults)".into()
    }
}

fn key_status(config: &Config) -> &'static str {
    match config.api_key() {
        Some(_) => "set",
        None => "missing (set GEMINI_API_KEY)",
    }
}
