use crate::domain::error::JsontrError;
use crate::domain::model::{Language, LanguagePair};
use crate::domain::traits::Engine;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Installed languages keyed by code. Built once per process and never mutated.
#[derive(Debug, Clone, Default)]
pub struct LanguageRegistry {
    languages: HashMap<String, Language>,
}

impl LanguageRegistry {
    pub fn new(languages: Vec<Language>) -> Self {
        Self {
            languages: languages
                .into_iter()
                .map(|lang| (lang.code.clone(), lang))
                .collect(),
        }
    }

    /// Enumerate the engine's installed languages
    pub async fn load(engine: &dyn Engine) -> Result<Self, JsontrError> {
        let languages = engine.installed_languages().await?;
        debug!(count = languages.len(), "loaded installed languages");
        Ok(Self::new(languages))
    }

    pub fn get(&self, code: &str) -> Option<&Language> {
        self.languages.get(code)
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Sorted codes, as printed by `--languages`
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.languages.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}

/// A translation capability bound to one ordered language pair.
#[derive(Clone)]
pub struct Translator {
    pair: LanguagePair,
    engine: Arc<dyn Engine>,
}

impl Translator {
    pub fn pair(&self) -> &LanguagePair {
        &self.pair
    }

    pub async fn translate(&self, text: &str) -> Result<String, JsontrError> {
        self.engine.translate(&self.pair, text).await
    }
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator").field("pair", &self.pair).finish()
    }
}

pub fn resolve_languages(
    registry: &LanguageRegistry,
    engine: Arc<dyn Engine>,
    source_code: &str,
    target_code: &str,
) -> Result<Translator, JsontrError> {
    let source = registry
        .get(source_code)
        .ok_or_else(|| JsontrError::MissingLanguage(source_code.to_string()))?;
    let target = registry
        .get(target_code)
        .ok_or_else(|| JsontrError::MissingLanguage(target_code.to_string()))?;

    let pair = source
        .get_translation(target)
        .ok_or_else(|| JsontrError::NoTranslator {
            source_code: source_code.to_string(),
            target_code: target_code.to_string(),
        })?;

    Ok(Translator { pair, engine })
}
