//! Optional TOML run configuration.
//!
//! A `gms.toml` file can carry defaults for the solver backend and the JSON
//! output path. Command-line flags always win over the file.
//!
//! ```toml
//! solver = "microlp"
//! out = "schedule.json"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Default MILP backend name
    pub solver: Option<String>,
    /// Default JSON report path
    pub out: Option<PathBuf>,
}

impl RunConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config file '{}'", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("parsing config file '{}'", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_full_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gms.toml");
        fs::write(&path, "solver = \"microlp\"\nout = \"schedule.json\"\n").unwrap();

        let config = RunConfig::load(&path).unwrap();
        assert_eq!(config.solver.as_deref(), Some("microlp"));
        assert_eq!(config.out.as_deref(), Some(Path::new("schedule.json")));
    }

    #[test]
    fn test_empty_config_is_all_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gms.toml");
        fs::write(&path, "").unwrap();

        let config = RunConfig::load(&path).unwrap();
        assert!(config.solver.is_none());
        assert!(config.out.is_none());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gms.toml");
        fs::write(&path, "sovler = \"microlp\"\n").unwrap();

        assert!(RunConfig::load(&path).is_err());
    }

    #[test]
    fn test_missing_file_names_the_path() {
        let err = RunConfig::load(Path::new("/nonexistent/gms.toml")).unwrap_err();
        assert!(err.to_string().contains("gms.toml"));
    }
}
