//! In-memory engine shared by the integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use jsontr::infrastructure::config::Config;
use jsontr::{AppState, Engine, JsontrError, Language, LanguagePair};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Translates by prefixing the target code and upper-casing the text.
/// Any text equal to `poison` fails.
pub struct MockEngine {
    languages: Vec<Language>,
    pub listings: AtomicUsize,
    pub calls: Mutex<Vec<String>>,
    poison: Option<String>,
    delay: Option<Duration>,
}

impl MockEngine {
    pub fn new() -> Self {
        Self {
            languages: vec![
                Language::new("en", &["es", "fr"]),
                Language::new("es", &["en"]),
                Language::new("fr", &["en"]),
                Language::new("de", &[]),
            ],
            listings: AtomicUsize::new(0),
            calls: Mutex::new(Vec::new()),
            poison: None,
            delay: None,
        }
    }

    pub fn poisoned(text: &str) -> Self {
        Self {
            poison: Some(text.to_string()),
            ..Self::new()
        }
    }

    /// Every translate call sleeps for `delay` first
    pub fn slow(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::new()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

pub fn fake_translation(target: &str, text: &str) -> String {
    format!("{}:{}", target, text.to_uppercase())
}

#[async_trait]
impl Engine for MockEngine {
    async fn installed_languages(&self) -> Result<Vec<Language>, JsontrError> {
        self.listings.fetch_add(1, Ordering::SeqCst);
        Ok(self.languages.clone())
    }

    async fn translate(&self, pair: &LanguagePair, text: &str) -> Result<String, JsontrError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.calls.lock().unwrap().push(text.to_string());
        if self.poison.as_deref() == Some(text) {
            return Err(JsontrError::Engine(format!("cannot translate {text}")));
        }
        Ok(fake_translation(&pair.target, text))
    }
}

pub async fn state_with(engine: Arc<MockEngine>) -> AppState {
    AppState::with_engine(engine, Config::default())
        .await
        .unwrap()
}

/// Diagnostic lines written so far
pub fn diag_lines(diag: &[u8]) -> Vec<String> {
    String::from_utf8(diag.to_vec())
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}
