use crate::application::resolve::{resolve_languages, LanguageRegistry, Translator};
use crate::domain::error::JsontrError;
use crate::domain::traits::Engine;
use crate::infrastructure::build_engine;
use crate::infrastructure::config::Config;
use std::sync::Arc;

/// Process-wide, read-only context: the engine and its installed languages.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<dyn Engine>,
    pub registry: Arc<LanguageRegistry>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> Result<Self, JsontrError> {
        let engine = build_engine(&config.engine)?;
        Self::with_engine(engine, config).await
    }

    /// Enumerate the languages of an already-built engine
    pub async fn with_engine(engine: Arc<dyn Engine>, config: Config) -> Result<Self, JsontrError> {
        let registry = LanguageRegistry::load(engine.as_ref()).await?;
        Ok(Self {
            engine,
            registry: Arc::new(registry),
            config: Arc::new(config),
        })
    }

    pub fn translator(&self, source: &str, target: &str) -> Result<Translator, JsontrError> {
        resolve_languages(&self.registry, self.engine.clone(), source, target)
    }
}
