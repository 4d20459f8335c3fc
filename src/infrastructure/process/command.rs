use crate::domain::error::JsontrError;
use crate::domain::model::{Language, LanguagePair};
use crate::domain::traits::Engine;
use crate::infrastructure::config::CommandConfig;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, warn};

const SOURCE_PLACEHOLDER: &str = "{source}";
const TARGET_PLACEHOLDER: &str = "{target}";
const TEXT_PLACEHOLDER: &str = "{text}";

/// Engine that runs an installed translator CLI once per string.
///
/// The argument template may use `{source}`, `{target}` and `{text}`. When no
/// argument mentions `{text}` the string is written to the child's stdin.
pub struct CommandEngine {
    config: CommandConfig,
}

impl CommandEngine {
    pub fn new(config: CommandConfig) -> Self {
        Self { config }
    }

    fn feeds_stdin(&self) -> bool {
        !self.config.args.iter().any(|a| a.contains(TEXT_PLACEHOLDER))
    }
}

pub fn render_args(template: &[String], pair: &LanguagePair, text: &str) -> Vec<String> {
    template
        .iter()
        .map(|arg| {
            arg.replace(SOURCE_PLACEHOLDER, &pair.source)
                .replace(TARGET_PLACEHOLDER, &pair.target)
                .replace(TEXT_PLACEHOLDER, text)
        })
        .collect()
}

#[async_trait]
impl Engine for CommandEngine {
    async fn installed_languages(&self) -> Result<Vec<Language>, JsontrError> {
        if self.config.languages.is_empty() {
            warn!("command engine has no languages configured");
        }
        Ok(self.config.languages.clone())
    }

    async fn translate(&self, pair: &LanguagePair, text: &str) -> Result<String, JsontrError> {
        let program = &self.config.program;
        let feeds_stdin = self.feeds_stdin();
        let args = render_args(&self.config.args, pair, text);
        debug!(%program, %pair, feeds_stdin, "running translator command");

        let mut child = Command::new(program)
            .args(&args)
            .stdin(if feeds_stdin {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| JsontrError::Engine(format!("failed to start {}: {}", program, e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            // A child that exits without reading its input is judged by its exit status
            if let Err(e) = stdin.write_all(text.as_bytes()).await {
                if e.kind() != std::io::ErrorKind::BrokenPipe {
                    return Err(e.into());
                }
            }
            drop(stdin);
        }

        let output = child.wait_with_output().await?;
        if !output.status.success() {
            return Err(JsontrError::Engine(format!(
                "{} exited with {}: {}",
                program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let stdout = String::from_utf8(output.stdout).map_err(|e| {
            JsontrError::Engine(format!("{} wrote non UTF-8 output: {}", program, e))
        })?;
        Ok(stdout.trim_end_matches(['\n', '\r']).to_string())
    }
}
