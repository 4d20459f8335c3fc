//! Translate every string leaf of a JSON document through an installed
//! machine-translation engine.
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod presentation;
pub mod state;

pub use application::resolve::{resolve_languages, LanguageRegistry, Translator};
pub use application::tree::translate_tree;
pub use domain::error::JsontrError;
pub use domain::model::{Language, LanguagePair, Task};
pub use domain::traits::Engine;
pub use state::AppState;
