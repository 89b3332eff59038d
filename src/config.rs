// src/config.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Run configuration for the persistence path, the file-based
/// alternative to CLI arguments.
#[derive(Deserialize, Serialize, Debug)]
pub struct RunConfig {
    pub red_path: PathBuf,
    pub nir_path: PathBuf,
    pub output_path: PathBuf,
    #[serde(default = "default_band")]
    pub band: usize,
}

fn default_band() -> usize {
    1
}

impl RunConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_config() {
        let config: RunConfig = serde_json::from_str(
            r#"{"red_path": "red.tif", "nir_path": "nir.tif", "output_path": "out.tif"}"#,
        )
        .unwrap();
        assert_eq!(config.red_path, PathBuf::from("red.tif"));
        assert_eq!(config.band, 1);
    }

    #[test]
    fn band_override() {
        let config: RunConfig = serde_json::from_str(
            r#"{"red_path": "r.tif", "nir_path": "n.tif", "output_path": "o.tif", "band": 3}"#,
        )
        .unwrap();
        assert_eq!(config.band, 3);
    }
}
