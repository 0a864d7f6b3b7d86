//! Configuration loading and store factory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use signdrill_core::store::ReviewStore;
use signdrill_core::Sign;

use crate::json::JsonFileStore;

/// Environment variable that overrides `store_path`.
pub const STORE_PATH_ENV: &str = "SIGNDRILL_STORE_PATH";

/// Top-level signdrill configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SigndrillConfig {
    /// Where the JSON review state lives.
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,
    /// Signs to practice. Signs without a classifier can still be scheduled.
    #[serde(default = "default_vocabulary")]
    pub vocabulary: Vec<String>,
    /// Consecutive matching frames required before a sign counts as performed.
    #[serde(default = "default_stable_frames")]
    pub stable_frames: usize,
}

fn default_store_path() -> PathBuf {
    PathBuf::from("./signdrill-progress.json")
}
fn default_vocabulary() -> Vec<String> {
    Sign::ALL.iter().map(|s| s.label().to_string()).collect()
}
fn default_stable_frames() -> usize {
    3
}

impl Default for SigndrillConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            vocabulary: default_vocabulary(),
            stable_frames: default_stable_frames(),
        }
    }
}

/// Expand `${VAR}` references in a configured store path.
///
/// Unset variables stay as written so the resulting path still shows which
/// one was missing.
fn expand_store_path(raw: &str) -> PathBuf {
    let mut expanded = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some((head, tail)) = rest.split_once("${") {
        expanded.push_str(head);
        let Some((name, after)) = tail.split_once('}') else {
            expanded.push_str("${");
            rest = tail;
            break;
        };
        match std::env::var(name) {
            Ok(value) => expanded.push_str(&value),
            Err(_) => {
                tracing::warn!("store_path references unset variable {name}");
                expanded.push_str(&format!("${{{name}}}"));
            }
        }
        rest = after;
    }
    expanded.push_str(rest);
    PathBuf::from(expanded)
}

/// Load config from an explicit path, or search the default locations:
/// `signdrill.toml` in the current directory, then
/// `~/.config/signdrill/config.toml`.
///
/// `SIGNDRILL_STORE_PATH` overrides the configured store path.
pub fn load_config_from(path: Option<&Path>) -> Result<SigndrillConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => {
            let local = PathBuf::from("signdrill.toml");
            if local.exists() {
                Some(local)
            } else {
                dirs_path()
                    .map(|home| home.join("config.toml"))
                    .filter(|global| global.exists())
            }
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = toml::from_str::<SigndrillConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            config
        }
        None => SigndrillConfig::default(),
    };

    if let Ok(store_path) = std::env::var(STORE_PATH_ENV) {
        config.store_path = PathBuf::from(store_path);
    }
    config.store_path = expand_store_path(&config.store_path.to_string_lossy());

    validate(&config)?;
    Ok(config)
}

fn validate(config: &SigndrillConfig) -> Result<()> {
    anyhow::ensure!(config.stable_frames >= 1, "stable_frames must be at least 1");
    anyhow::ensure!(!config.vocabulary.is_empty(), "vocabulary must not be empty");

    for sign in &config.vocabulary {
        if sign.parse::<Sign>().is_err() {
            tracing::warn!("vocabulary entry {sign:?} has no recognizer; it can be reviewed but not detected");
        }
    }
    Ok(())
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("signdrill"))
}

/// Create the review store described by the configuration.
pub fn create_store(config: &SigndrillConfig) -> Box<dyn ReviewStore> {
    Box::new(JsonFileStore::new(&config.store_path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_path_expands_variables() {
        std::env::set_var("_SIGNDRILL_TEST_DIR", "/data/drill");
        assert_eq!(
            expand_store_path("${_SIGNDRILL_TEST_DIR}/progress.json"),
            PathBuf::from("/data/drill/progress.json")
        );
        assert_eq!(
            expand_store_path("${_SIGNDRILL_UNSET_DIR}/progress.json"),
            PathBuf::from("${_SIGNDRILL_UNSET_DIR}/progress.json")
        );
        assert_eq!(expand_store_path("state/${"), PathBuf::from("state/${"));
        assert_eq!(expand_store_path("plain.json"), PathBuf::from("plain.json"));
        std::env::remove_var("_SIGNDRILL_TEST_DIR");
    }

    #[test]
    fn load_expands_store_path() {
        std::env::set_var("_SIGNDRILL_TEST_ROOT", "/var/lib");
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("signdrill.toml");
        std::fs::write(&path, "store_path = \"${_SIGNDRILL_TEST_ROOT}/signdrill.json\"\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        if std::env::var(STORE_PATH_ENV).is_err() {
            assert_eq!(config.store_path, PathBuf::from("/var/lib/signdrill.json"));
        }
        std::env::remove_var("_SIGNDRILL_TEST_ROOT");
    }

    #[test]
    fn default_config() {
        let config = SigndrillConfig::default();
        assert_eq!(config.vocabulary, vec!["I Love You", "Stop", "More", "Help"]);
        assert_eq!(config.stable_frames, 3);
        assert_eq!(config.store_path, PathBuf::from("./signdrill-progress.json"));
    }

    #[test]
    fn parse_partial_config() {
        let config: SigndrillConfig = toml::from_str(
            r#"
store_path = "/tmp/progress.json"
vocabulary = ["Stop", "Thank You"]
"#,
        )
        .unwrap();
        assert_eq!(config.store_path, PathBuf::from("/tmp/progress.json"));
        assert_eq!(config.vocabulary.len(), 2);
        assert_eq!(config.stable_frames, 3);
    }

    #[test]
    fn load_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("signdrill.toml");
        std::fs::write(&path, "stable_frames = 5\nstore_path = \"/srv/drill.json\"\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.stable_frames, 5);
        if std::env::var(STORE_PATH_ENV).is_err() {
            assert_eq!(config.store_path, PathBuf::from("/srv/drill.json"));
        }
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let err = load_config_from(Some(Path::new("/nonexistent/signdrill.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("signdrill.toml");

        std::fs::write(&path, "stable_frames = 0\n").unwrap();
        assert!(load_config_from(Some(&path)).is_err());

        std::fs::write(&path, "vocabulary = []\n").unwrap();
        assert!(load_config_from(Some(&path)).is_err());

        std::fs::write(&path, "stable_frames = \"many\"\n").unwrap();
        let err = load_config_from(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse config"));
    }

    #[test]
    fn create_store_uses_json_backend() {
        let store = create_store(&SigndrillConfig::default());
        assert_eq!(store.name(), "json");
    }
}
