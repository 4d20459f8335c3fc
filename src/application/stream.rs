use crate::application::tree::translate_tree;
use crate::domain::error::JsontrError;
use crate::domain::model::Task;
use crate::presentation::output::to_line;
use crate::state::AppState;
use serde_json::Value;
use std::future::Future;
use std::io::Write;
use std::pin::pin;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, Default)]
pub struct StreamOptions {
    /// Report a failing line and emit `null` for it instead of stopping
    pub keep_going: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamSummary {
    /// Tasks processed (blank lines excluded)
    pub lines: usize,
    pub failed: usize,
    /// Stopped by `shutdown` before input ran out
    pub interrupted: bool,
}

/// Translate one task line into its output value.
pub async fn process_line<W>(state: &AppState, line: &str, diag: &mut W) -> Result<Value, JsontrError>
where
    W: Write + Send,
{
    let task: Task = serde_json::from_str(line)?;
    let translator = state.translator(&task.source, &task.target)?;
    translate_tree(&task.strings, &translator, diag).await
}

/// Read newline-delimited tasks from `input` and write one JSON line per task to `out`.
///
/// Lines are processed strictly in order. Blank lines are skipped and produce
/// no output. `shutdown` is only checked while waiting for the next line, so a
/// task that has started always finishes and its output line is flushed.
/// Error labels (`line N:`) use physical line numbers, blank lines included.
pub async fn run_stream<R, O, W, S>(
    state: &AppState,
    input: R,
    out: &mut O,
    diag: &mut W,
    options: StreamOptions,
    shutdown: S,
) -> Result<StreamSummary, JsontrError>
where
    R: AsyncBufRead + Unpin,
    O: AsyncWrite + Unpin,
    W: Write + Send,
    S: Future<Output = ()>,
{
    let mut summary = StreamSummary::default();
    let mut lines = input.lines();
    let mut line_no = 0usize;
    let mut shutdown = pin!(shutdown);

    loop {
        // next_line is cancel safe, so losing the race drops no input
        let next = tokio::select! {
            biased;
            _ = &mut shutdown => {
                summary.interrupted = true;
                break;
            }
            next = lines.next_line() => next?,
        };
        let Some(line) = next else {
            break;
        };

        line_no += 1;
        if line.trim().is_empty() {
            continue;
        }
        summary.lines += 1;
        debug!(line = line_no, "processing task");

        let value = match process_line(state, &line, diag).await {
            Ok(value) => value,
            Err(e) if options.keep_going => {
                summary.failed += 1;
                warn!(line = line_no, error = %e, "task failed");
                writeln!(diag, "line {}: {}", line_no, e)?;
                Value::Null
            }
            Err(e) => return Err(e),
        };

        let mut encoded = to_line(&value)?;
        encoded.push('\n');
        out.write_all(encoded.as_bytes()).await?;
        out.flush().await?;
    }

    info!(
        lines = summary.lines,
        failed = summary.failed,
        interrupted = summary.interrupted,
        "stream finished"
    );
    Ok(summary)
}
