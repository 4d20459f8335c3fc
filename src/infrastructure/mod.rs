pub mod config;
pub mod logging;
pub mod network;
pub mod process;

use crate::domain::error::JsontrError;
use crate::domain::traits::Engine;
use config::{EngineConfig, EngineKind};
use network::http::create_client;
use network::LibreTranslateEngine;
use process::CommandEngine;
use std::sync::Arc;

/// Build the engine selected by `engine.kind`
pub fn build_engine(config: &EngineConfig) -> Result<Arc<dyn Engine>, JsontrError> {
    match config.kind {
        EngineKind::Libretranslate => {
            let client = create_client(config.libretranslate.timeout_secs)?;
            Ok(Arc::new(LibreTranslateEngine::new(
                client,
                config.libretranslate.clone(),
            )))
        }
        EngineKind::Command => Ok(Arc::new(CommandEngine::new(config.command.clone()))),
    }
}
