//! Configuration management using steamguessr.toml

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_PATH: &str = "steamguessr.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Proxy server base URL
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Character drawn over hidden title occurrences
    #[serde(default = "default_mask")]
    pub mask: String,

    /// Wrong guesses allowed per round (0 = unlimited)
    #[serde(default)]
    pub max_attempts: u32,
}

fn default_server_url() -> String {
    "http://localhost:3001".to_string()
}

fn default_mask() -> String {
    "█".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            mask: default_mask(),
            max_attempts: 0,
        }
    }
}

impl Config {
    /// Load config from file, creating default if it doesn't exist
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_PATH))
    }

    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => eprintln!("Error parsing {}: {}", path.display(), e),
                },
                Err(e) => eprintln!("Error reading {}: {}", path.display(), e),
            }
            return Config::default();
        }

        let config = Config::default();
        let _ = config.save_to(path); // Try to create the file
        config
    }

    pub fn save_to(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Server URL without trailing slash
    pub fn base_url(&self) -> &str {
        self.server_url.trim_end_matches('/')
    }

    pub fn attempt_limit(&self) -> Option<u32> {
        (self.max_attempts > 0).then_some(self.max_attempts)
    }
}
