use std::env;
use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

const ENV_KEY: &str = "TMDB_API_KEY";
const APP_DIR: &str = "tmdb_tui";

/// Operator configuration. The credential may be absent, in which case the
/// grid renders setup instructions instead of fetching.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    api_key: String,
}

impl Config {
    /// Reads `TMDB_API_KEY`, falling back to the JSON config file.
    pub fn load() -> Self {
        if let Ok(key) = env::var(ENV_KEY) {
            if !key.trim().is_empty() {
                return Self {
                    api_key: Some(key.trim().to_string()),
                };
            }
        }
        Self {
            api_key: read_config_file(),
        }
    }

    pub fn config_file_path() -> Option<PathBuf> {
        Some(dirs::config_dir()?.join(APP_DIR).join("config.json"))
    }

    pub fn log_file_path() -> Option<PathBuf> {
        Some(dirs::data_local_dir()?.join(APP_DIR).join("tmdb_tui.log"))
    }
}

fn read_config_file() -> Option<String> {
    let path = Config::config_file_path()?;
    let raw = fs::read_to_string(&path).ok()?;
    match serde_json::from_str::<ConfigFile>(&raw) {
        Ok(file) if !file.api_key.trim().is_empty() => Some(file.api_key.trim().to_string()),
        Ok(_) => None,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable config file");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_file_parses() {
        let file: ConfigFile = serde_json::from_str(r#"{"api_key": "abc123"}"#).unwrap();
        assert_eq!(file.api_key, "abc123");
    }

    #[test]
    fn config_file_rejects_other_shapes() {
        assert!(serde_json::from_str::<ConfigFile>(r#"{"key": "abc"}"#).is_err());
    }
}
