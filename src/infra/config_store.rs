// ============================================================
// Layer 6 — Config Store
// ============================================================
// Reads and writes ServiceConfig as pretty JSON so a service
// setup can be kept next to a tokenizer.json and reused.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::application::service_config::ServiceConfig;

/// Load a ServiceConfig from a JSON file.
/// Keys missing from the file take their default values.
pub fn load_config(path: &Path) -> Result<ServiceConfig> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Cannot read config from '{}'", path.display()))?;

    let cfg = serde_json::from_str(&json)
        .with_context(|| format!("Invalid config JSON in '{}'", path.display()))?;

    tracing::info!("Loaded service config from '{}'", path.display());
    Ok(cfg)
}

/// Write a ServiceConfig as pretty JSON, creating parent directories.
pub fn save_config(path: &Path, cfg: &ServiceConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Cannot create '{}'", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(cfg)?;
    fs::write(path, json)
        .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

    tracing::debug!("Saved service config to '{}'", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_save_then_load() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("service.json");

        let cfg = ServiceConfig {
            view_id:        "tokens".to_string(),
            tokenizer_path: Some(PathBuf::from("models/tokenizer.json")),
            pretty:         false,
            ..ServiceConfig::default()
        };
        save_config(&path, &cfg).unwrap();

        assert_eq!(load_config(&path).unwrap(), cfg);
    }

    #[test]
    fn test_missing_file_mentions_path() {
        let err = load_config(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(format!("{err:#}").contains("/definitely/not/here.json"));
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(load_config(&path).is_err());
    }
}
