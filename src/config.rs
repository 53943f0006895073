use std::path::PathBuf;

use serde::Deserialize;
use tracing::warn;

/// Name of the environment variable pointing at the config file.
const CONFIG_ENV: &str = "ATRIUM_CONFIG";
/// Config file looked for when [`CONFIG_ENV`] is unset.
const DEFAULT_CONFIG_FILE: &str = "atrium.yaml";

/// Server configuration.
///
/// Loaded from a YAML file when one exists, with the `LISTEN` environment
/// variable overriding the listen address either way. The document root
/// defaults to the process working directory.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address the server binds to, e.g. "127.0.0.1:8080".
    pub listen_addr: String,
    /// Directory files are served from.
    pub root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
            root: PathBuf::from("."),
        }
    }
}

impl Config {
    pub fn load() -> Self {
        let path =
            std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

        let mut cfg = match std::fs::read_to_string(&path) {
            Ok(text) => match serde_yaml::from_str(&text) {
                Ok(cfg) => cfg,
                Err(e) => {
                    warn!("Ignoring invalid config file {}: {}", path, e);
                    Config::default()
                }
            },
            Err(_) => Config::default(),
        };

        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.listen_addr = addr;
        }

        cfg
    }
}
