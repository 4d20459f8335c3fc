use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// One line of streaming input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub source: String,
    pub target: String,
    pub strings: Value,
}

/// An installed language as reported by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Language {
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Codes this language can be translated into
    #[serde(default)]
    pub targets: Vec<String>,
}

impl Language {
    pub fn new(code: impl Into<String>, targets: &[&str]) -> Self {
        Self {
            code: code.into(),
            name: None,
            targets: targets.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Translation path from this language to `target`, if the engine has one.
    pub fn get_translation(&self, target: &Language) -> Option<LanguagePair> {
        if self.targets.iter().any(|t| t == &target.code) {
            Some(LanguagePair {
                source: self.code.clone(),
                target: target.code.clone(),
            })
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguagePair {
    pub source: String,
    pub target: String,
}

impl fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.source, self.target)
    }
}
