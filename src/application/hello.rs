use crate::domain::error::JsontrError;
use crate::presentation::output::to_line;
use crate::state::AppState;
use serde_json::Value;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

pub const HELLO_SOURCE: &str = "en";
pub const HELLO_PHRASE: &str = "Hello world";

/// Smoke test for a language pair.
///
/// Resolves `en -> target`, echoes the JSON document read from `input`, then
/// prints the translation of a fixed phrase. The echoed document is never
/// translated. Returns the translated phrase.
pub async fn run_hello<R, O>(
    state: &AppState,
    target: &str,
    mut input: R,
    out: &mut O,
) -> Result<String, JsontrError>
where
    R: AsyncRead + Unpin,
    O: AsyncWrite + Unpin,
{
    let translator = state.translator(HELLO_SOURCE, target)?;

    let mut raw = String::new();
    input.read_to_string(&mut raw).await?;
    let document: Value = serde_json::from_str(&raw)?;
    debug!(bytes = raw.len(), "read input document");

    let echoed = to_line(&document)?;
    out.write_all(echoed.as_bytes()).await?;
    out.write_all(b"\n").await?;

    let translated = translator.translate(HELLO_PHRASE).await?;
    out.write_all(translated.as_bytes()).await?;
    out.write_all(b"\n").await?;
    out.flush().await?;

    Ok(translated)
}
