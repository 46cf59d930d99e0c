// src/infra/paths.rs — Config path resolution
//
// COACH_HOME overrides everything. Otherwise config lives in
// ~/.interview-coach/, falling back to the platform config dir when no
// home directory can be determined.

use directories::{BaseDirs, ProjectDirs};
use std::path::PathBuf;

fn coach_home() -> Option<PathBuf> {
    std::env::var_os("COACH_HOME").map(PathBuf::from)
}

/// Configuration directory: $COACH_HOME/ or ~/.interview-coach/
pub fn config_dir() -> PathBuf {
    if let Some(home) = coach_home() {
        return home;
    }
    if let Some(base) = BaseDirs::new() {
        return base.home_dir().join(".interview-coach");
    }
    ProjectDirs::from("", "", "interview-coach")
        .map(|p| p.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".interview-coach"))
}

pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_named_config_toml() {
        let path = config_file_path();
        assert_eq!(path.file_name().unwrap(), "config.toml");
    }
}
