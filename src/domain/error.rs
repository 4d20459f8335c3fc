use thiserror::Error;

#[derive(Error, Debug)]
pub enum JsontrError {
    #[error("need language {0}")]
    MissingLanguage(String),

    #[error("no translator available from {source_code} to {target_code}")]
    NoTranslator {
        source_code: String,
        target_code: String,
    },

    #[error("Engine error: {0}")]
    Engine(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
