use crate::domain::error::JsontrError;
use crate::domain::model::{Language, LanguagePair};
use crate::domain::traits::Engine;
use crate::infrastructure::config::LibreTranslateConfig;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

// LibreTranslate API structures
#[derive(Deserialize, Debug)]
struct LanguageEntry {
    code: String,
    name: Option<String>,
    #[serde(default)]
    targets: Vec<String>,
}

#[derive(Serialize, Debug)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Deserialize, Debug)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
    error: Option<String>,
}

/// Engine backed by a LibreTranslate server (HTTP front end for Argos models)
pub struct LibreTranslateEngine {
    client: Client,
    config: LibreTranslateConfig,
}

impl LibreTranslateEngine {
    pub fn new(client: Client, config: LibreTranslateConfig) -> Self {
        Self { client, config }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl Engine for LibreTranslateEngine {
    async fn installed_languages(&self) -> Result<Vec<Language>, JsontrError> {
        let url = self.endpoint("languages");
        debug!(%url, "listing languages");
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(api_error(status, &body));
        }
        decode_languages(&body)
    }

    async fn translate(&self, pair: &LanguagePair, text: &str) -> Result<String, JsontrError> {
        let request = TranslateRequest {
            q: text,
            source: &pair.source,
            target: &pair.target,
            format: "text",
            api_key: self.config.api_key.as_deref().filter(|k| !k.is_empty()),
        };

        let response = self
            .client
            .post(self.endpoint("translate"))
            .json(&request)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        decode_translation(status, &body)
    }
}

/// Decode a `/languages` body.
///
/// Servers that predate per-language `targets` get every other installed
/// language as a target, which matches how Argos pivots between models.
pub(crate) fn decode_languages(body: &str) -> Result<Vec<Language>, JsontrError> {
    let entries: Vec<LanguageEntry> = serde_json::from_str(body)?;
    let all_codes: Vec<String> = entries.iter().map(|e| e.code.clone()).collect();
    let legacy = entries.iter().all(|e| e.targets.is_empty());

    Ok(entries
        .into_iter()
        .map(|e| {
            let targets = if legacy {
                all_codes.iter().filter(|c| **c != e.code).cloned().collect()
            } else {
                e.targets
            };
            Language {
                code: e.code,
                name: e.name,
                targets,
            }
        })
        .collect())
}

/// Decode a `/translate` body
pub(crate) fn decode_translation(status: StatusCode, body: &str) -> Result<String, JsontrError> {
    if !status.is_success() {
        return Err(api_error(status, body));
    }
    let response: TranslateResponse = serde_json::from_str(body)?;
    match (response.translated_text, response.error) {
        (Some(text), _) => Ok(text),
        (None, Some(error)) => Err(JsontrError::Engine(error)),
        (None, None) => Err(JsontrError::Engine(
            "response has no translatedText".to_string(),
        )),
    }
}

fn api_error(status: StatusCode, body: &str) -> JsontrError {
    let message = serde_json::from_str::<TranslateResponse>(body)
        .ok()
        .and_then(|r| r.error)
        .unwrap_or_else(|| body.trim().to_string());
    JsontrError::Engine(format!("LibreTranslate API Error {}: {}", status.as_u16(), message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_languages_with_targets() {
        let body = r#"[
            {"code": "en", "name": "English", "targets": ["en", "es"]},
            {"code": "es", "name": "Spanish", "targets": ["en"]}
        ]"#;
        let languages = decode_languages(body).unwrap();
        assert_eq!(languages.len(), 2);
        assert_eq!(languages[0].code, "en");
        assert_eq!(languages[0].name.as_deref(), Some("English"));
        assert_eq!(languages[0].targets, vec!["en", "es"]);
        assert_eq!(languages[1].targets, vec!["en"]);
    }

    #[test]
    fn test_decode_languages_without_targets() {
        let body = r#"[{"code": "en", "name": "English"}, {"code": "fr", "name": "French"}, {"code": "de", "name": "German"}]"#;
        let languages = decode_languages(body).unwrap();
        assert_eq!(languages[0].targets, vec!["fr", "de"]);
        assert_eq!(languages[1].targets, vec!["en", "de"]);
    }

    #[test]
    fn test_decode_translation_ok() {
        let text = decode_translation(StatusCode::OK, r#"{"translatedText": "¡Hola!"}"#).unwrap();
        assert_eq!(text, "¡Hola!");
    }

    #[test]
    fn test_decode_translation_api_error() {
        let err = decode_translation(
            StatusCode::BAD_REQUEST,
            r#"{"error": "xx is not supported"}"#,
        )
        .unwrap_err();
        match err {
            JsontrError::Engine(msg) => {
                assert!(msg.contains("400"));
                assert!(msg.contains("xx is not supported"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_decode_translation_plain_text_error() {
        let err = decode_translation(StatusCode::BAD_GATEWAY, "upstream down\n").unwrap_err();
        assert!(err.to_string().contains("upstream down"));
    }

    #[test]
    fn test_decode_translation_missing_text() {
        let err = decode_translation(StatusCode::OK, "{}").unwrap_err();
        assert!(matches!(err, JsontrError::Engine(_)));
    }

    #[test]
    fn test_request_omits_missing_api_key() {
        let request = TranslateRequest {
            q: "hello",
            source: "en",
            target: "es",
            format: "text",
            api_key: None,
        };
        let encoded = serde_json::to_value(&request).unwrap();
        assert_eq!(encoded["q"], "hello");
        assert_eq!(encoded["format"], "text");
        assert!(encoded.get("api_key").is_none());
    }

    #[test]
    fn test_endpoint_joins_trailing_slash() {
        let config = LibreTranslateConfig {
            url: "http://localhost:5000/".to_string(),
            ..LibreTranslateConfig::default()
        };
        let engine = LibreTranslateEngine::new(Client::new(), config);
        assert_eq!(engine.endpoint("translate"), "http://localhost:5000/translate");
    }
}
