//! Recursive string translation tests

mod common;

use common::{diag_lines, fake_translation, state_with, MockEngine};
use jsontr::{translate_tree, JsontrError};
use serde_json::{json, Value};
use std::sync::Arc;

async fn run(value: Value) -> (Result<Value, JsontrError>, Vec<String>, Arc<MockEngine>) {
    let engine = Arc::new(MockEngine::new());
    let state = state_with(engine.clone()).await;
    let translator = state.translator("en", "es").unwrap();
    let mut diag = Vec::new();
    let result = translate_tree(&value, &translator, &mut diag).await;
    (result, diag_lines(&diag), engine)
}

#[tokio::test]
async fn test_root_string() {
    let (result, diag, _) = run(json!("hello")).await;
    assert_eq!(result.unwrap(), json!(fake_translation("es", "hello")));
    assert_eq!(diag, vec!["en->es root"]);
}

#[tokio::test]
async fn test_mapping_with_list() {
    let (result, diag, _) = run(json!({"a": "hi", "b": ["yo", null]})).await;
    assert_eq!(result.unwrap(), json!({"a": "es:HI", "b": ["es:YO", null]}));
    assert_eq!(diag, vec!["en->es a", "en->es b"]);
}

#[tokio::test]
async fn test_null_is_identity() {
    let (result, diag, engine) = run(Value::Null).await;
    assert_eq!(result.unwrap(), Value::Null);
    assert!(diag.is_empty());
    assert!(engine.calls().is_empty());
}

#[tokio::test]
async fn test_non_string_scalars_pass_through() {
    let (result, diag, engine) = run(json!({"n": 3, "f": 1.5, "t": true, "list": [false, 0]})).await;
    assert_eq!(result.unwrap(), json!({"n": 3, "f": 1.5, "t": true, "list": [false, 0]}));
    assert!(diag.is_empty());
    assert!(engine.calls().is_empty());
}

#[tokio::test]
async fn test_keys_untranslated_and_order_kept() {
    let input: Value = serde_json::from_str(r#"{"zeta": "z", "alpha": "a", "mid": {"inner": "i"}}"#).unwrap();
    let (result, diag, _) = run(input).await;
    let output = result.unwrap();

    let keys: Vec<&String> = output.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    assert_eq!(output["mid"]["inner"], json!("es:I"));
    assert_eq!(diag, vec!["en->es zeta", "en->es alpha", "en->es inner"]);
}

#[tokio::test]
async fn test_sequence_length_and_order() {
    let (result, _, engine) = run(json!(["one", "two", null, "three"])).await;
    assert_eq!(
        result.unwrap(),
        json!(["es:ONE", "es:TWO", null, "es:THREE"])
    );
    assert_eq!(engine.calls(), vec!["one", "two", "three"]);
}

#[tokio::test]
async fn test_list_inside_root_uses_root_label() {
    let (_, diag, _) = run(json!(["x", ["y"]])).await;
    assert_eq!(diag, vec!["en->es root", "en->es root"]);
}

#[tokio::test]
async fn test_diagnostics_depth_first() {
    let input = json!({
        "menu": [{"title": "File"}, "Edit"],
        "footer": "Bye"
    });
    let (result, diag, engine) = run(input).await;
    assert_eq!(
        result.unwrap(),
        json!({"menu": [{"title": "es:FILE"}, "es:EDIT"], "footer": "es:BYE"})
    );
    assert_eq!(diag, vec!["en->es title", "en->es menu", "en->es footer"]);
    assert_eq!(engine.calls(), vec!["File", "Edit", "Bye"]);
}

#[tokio::test]
async fn test_empty_containers() {
    let (result, diag, _) = run(json!({"a": [], "b": {}})).await;
    assert_eq!(result.unwrap(), json!({"a": [], "b": {}}));
    assert!(diag.is_empty());
}

#[tokio::test]
async fn test_engine_failure_stops_traversal() {
    let engine = Arc::new(MockEngine::poisoned("bad"));
    let state = state_with(engine.clone()).await;
    let translator = state.translator("en", "fr").unwrap();
    let mut diag = Vec::new();

    let err = translate_tree(&json!(["ok", "bad", "never"]), &translator, &mut diag)
        .await
        .unwrap_err();
    assert!(matches!(err, JsontrError::Engine(_)));
    assert_eq!(engine.calls(), vec!["ok", "bad"]);
    // The diagnostic precedes the failing call
    assert_eq!(diag_lines(&diag), vec!["en->fr root", "en->fr root"]);
}
