use crate::domain::error::JsontrError;
use crate::domain::model::{Language, LanguagePair};
use async_trait::async_trait;

/// Trait for translation engines
///
/// Implementations wrap an installed translation backend. The calling code
/// only ever enumerates languages once and then translates single strings.
#[async_trait]
pub trait Engine: Send + Sync {
    /// Enumerate installed languages along with the targets each can reach
    async fn installed_languages(&self) -> Result<Vec<Language>, JsontrError>;

    /// Translate one string along a resolved pair
    async fn translate(&self, pair: &LanguagePair, text: &str) -> Result<String, JsontrError>;
}
