use crate::domain::error::JsontrError;
use crate::domain::model::Language;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Overrides `engine.libretranslate.url`
pub const URL_ENV: &str = "JSONTR_URL";

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub logging: Logging,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    #[default]
    Libretranslate,
    Command,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub kind: EngineKind,
    #[serde(default)]
    pub libretranslate: LibreTranslateConfig,
    #[serde(default)]
    pub command: CommandConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LibreTranslateConfig {
    #[serde(default = "default_url")]
    pub url: String,
    pub api_key: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CommandConfig {
    #[serde(default = "default_program")]
    pub program: String,
    #[serde(default = "default_args")]
    pub args: Vec<String>,
    #[serde(default)]
    pub languages: Vec<Language>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Logging {
    #[serde(default = "default_enable")]
    pub enable: bool,
    pub path: Option<String>,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LibreTranslateConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: default_args(),
            languages: Vec::new(),
        }
    }
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            enable: true,
            path: None,
            level: default_log_level(),
        }
    }
}

// Defaults
fn default_url() -> String {
    "http://127.0.0.1:5000".to_string()
}
fn default_timeout_secs() -> u64 {
    60
}
fn default_program() -> String {
    "argos-translate".to_string()
}
fn default_args() -> Vec<String> {
    ["--from-lang", "{source}", "--to-lang", "{target}", "{text}"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
fn default_enable() -> bool {
    true
}
fn default_log_level() -> String {
    "WARN".to_string()
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("jsontr").join("config.toml"))
}

pub fn parse_config(content: &str) -> Result<Config, JsontrError> {
    Ok(toml::from_str::<Config>(content)?)
}

/// Load the config from `path`, or from the default location when `None`.
///
/// A missing file yields defaults. A file that fails to parse is reported and
/// also yields defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config, JsontrError> {
    let config_path = path.map(Path::to_path_buf).or_else(get_config_path);

    let mut config = Config::default();
    if let Some(path) = config_path {
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            match parse_config(&content) {
                Ok(parsed) => config = parsed,
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to parse config file: {}. Using defaults.",
                        e
                    );
                }
            }
        }
    }

    if let Ok(url) = std::env::var(URL_ENV) {
        if !url.is_empty() {
            config.engine.libretranslate.url = url;
        }
    }

    Ok(config)
}

pub fn generate_config_sample(path: Option<&Path>) -> Result<(), JsontrError> {
    let config_path = path.map(Path::to_path_buf).or_else(get_config_path);

    if let Some(path) = config_path {
        if path.exists() {
            eprintln!("Config file already exists at: {}", path.display());
            return Ok(());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let toml_content = sample_config()?;
        fs::write(&path, toml_content)
            .map_err(|e| JsontrError::Config(format!("Failed to write config file: {}", e)))?;
        println!("Generated config file at: {}", path.display());
    } else {
        return Err(JsontrError::Config(
            "Cannot determine config directory".to_string(),
        ));
    }

    Ok(())
}

/// Default config rendered as TOML, with one example language pair for the command engine
pub fn sample_config() -> Result<String, JsontrError> {
    let mut sample = Config::default();
    sample.engine.command.languages = vec![Language::new("en", &["es"]), Language::new("es", &["en"])];
    toml::to_string_pretty(&sample)
        .map_err(|e| JsontrError::Config(format!("Failed to serialize config: {}", e)))
}
