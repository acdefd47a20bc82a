use super::persistence::config_dir;
use crate::theme::PaletteType;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_API_URL: &str = "https://vuibackend-6-0.onrender.com";

/// External speech commands. Empty means "not available".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceConfig {
    /// Prints one finalized utterance per line on stdout.
    pub recognizer: Vec<String>,
    /// Receives the text to say as its last argument.
    pub synthesizer: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_url: String,
    /// Rows moved by one `d`/`u` press.
    pub scroll_step: u16,
    pub notification_ttl_secs: u64,
    pub log_file: Option<PathBuf>,
    pub log_level: String,
    pub theme: PaletteType,
    pub voice: VoiceConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            scroll_step: 10,
            notification_ttl_secs: 5,
            log_file: None,
            log_level: "info".to_string(),
            theme: PaletteType::CatppuccinMocha,
            voice: VoiceConfig::default(),
        }
    }
}

impl AppConfig {
    /// Reads `~/.config/melt/config.toml`. A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        match config_dir() {
            Some(dir) => Self::load_from(&dir.join("config.toml")),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("invalid config in {}", path.display()))
    }

    #[must_use]
    pub fn with_env(self) -> Self {
        self.with_env_from(|name| std::env::var(name).ok())
    }

    /// `MELT_API_URL` and `MELT_LOG` override the file.
    #[must_use]
    pub fn with_env_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup("MELT_API_URL").filter(|v| !v.trim().is_empty()) {
            self.api_url = url.trim().to_string();
        }
        if let Some(level) = lookup("MELT_LOG").filter(|v| !v.trim().is_empty()) {
            self.log_level = level.trim().to_string();
        }
        self
    }

    /// Where logs go. The terminal belongs to the UI, so always a file.
    #[must_use]
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| config_dir().map(|dir| dir.join("melt.log")))
    }
}
