use crate::application::resolve::Translator;
use crate::domain::error::JsontrError;
use futures_util::future::{BoxFuture, FutureExt};
use serde_json::{Map, Value};
use std::io::Write;
use tracing::trace;

/// Label used for a string that is not inside any mapping
pub const ROOT_KEY: &str = "root";

/// Translate every string leaf of `value`, keeping its shape.
///
/// Before each engine call a line `<source>-><target> <key>` is written to
/// `diag`, where `<key>` is the nearest enclosing mapping key (or `root`).
/// Nulls, numbers and booleans come back unchanged. Mapping keys are never
/// translated.
pub async fn translate_tree<W>(
    value: &Value,
    translator: &Translator,
    diag: &mut W,
) -> Result<Value, JsontrError>
where
    W: Write + Send,
{
    translate_node(value, translator, ROOT_KEY, diag).await
}

fn translate_node<'a, W>(
    value: &'a Value,
    translator: &'a Translator,
    key: &'a str,
    diag: &'a mut W,
) -> BoxFuture<'a, Result<Value, JsontrError>>
where
    W: Write + Send,
{
    async move {
        match value {
            Value::Null => Ok(Value::Null),
            Value::Bool(_) | Value::Number(_) => Ok(value.clone()),
            Value::Array(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    out.push(translate_node(item, translator, key, &mut *diag).await?);
                }
                Ok(Value::Array(out))
            }
            Value::Object(map) => {
                let mut out = Map::with_capacity(map.len());
                for (k, v) in map {
                    let translated = translate_node(v, translator, k, &mut *diag).await?;
                    out.insert(k.clone(), translated);
                }
                Ok(Value::Object(out))
            }
            Value::String(text) => {
                writeln!(diag, "{} {}", translator.pair(), key)?;
                trace!(pair = %translator.pair(), key, len = text.len(), "translating leaf");
                let translated = translator.translate(text).await?;
                Ok(Value::String(translated))
            }
        }
    }
    .boxed()
}
