use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Simple configuration for scrub
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scrub: ScrubConfig,

    #[serde(default)]
    pub image: ImageConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrubConfig {
    /// Mask character used when a whole value is masked
    #[serde(default = "default_char")]
    pub char: char,

    #[serde(default)]
    pub action_text: ActionTextConfig,

    /// JSON keys whose string values are scrubbed
    #[serde(default = "default_keys")]
    pub keys: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionTextConfig {
    #[serde(default = "default_separator")]
    pub separator: String,

    #[serde(default = "default_name_prefix")]
    pub name_prefix: String,

    #[serde(default = "default_name_suffix")]
    pub name_suffix: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlurKind {
    #[default]
    Gaussian,
    Box,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageConfig {
    #[serde(default)]
    pub blur: BlurKind,

    /// Gaussian standard deviation
    #[serde(default = "default_sigma")]
    pub sigma: f32,

    /// Box filter passes
    #[serde(default = "default_passes")]
    pub passes: u32,
}

impl Default for ScrubConfig {
    fn default() -> Self {
        Self {
            char: default_char(),
            action_text: ActionTextConfig::default(),
            keys: default_keys(),
        }
    }
}

impl Default for ActionTextConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            name_prefix: default_name_prefix(),
            name_suffix: default_name_suffix(),
        }
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            blur: BlurKind::default(),
            sigma: default_sigma(),
            passes: default_passes(),
        }
    }
}

fn default_char() -> char {
    '*'
}

fn default_separator() -> String {
    "-".to_string()
}

fn default_name_prefix() -> String {
    "<".to_string()
}

fn default_name_suffix() -> String {
    ">".to_string()
}

fn default_sigma() -> f32 {
    2.0
}

fn default_passes() -> u32 {
    3
}

fn default_keys() -> Vec<String> {
    vec![
        "text".to_string(),
        "canonical_text".to_string(),
        "title".to_string(),
        "state".to_string(),
        "task_description".to_string(),
        "key_char".to_string(),
        "canonical_key_char".to_string(),
        "key_vk".to_string(),
        "children".to_string(),
    ]
}

impl Config {
    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();

        if path.exists() {
            Self::load_from(&path)
        } else {
            // Create default config file
            let config = Config::default();
            config.save_to(&path)?;
            Ok(config)
        }
    }

    /// Load config from an explicit file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "scrub", "scrub") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.scrub/config.toml")
        }
    }
}
