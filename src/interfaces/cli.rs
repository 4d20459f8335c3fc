use crate::infrastructure::config::{Config, EngineKind};
use clap::{Args, Parser};
use std::path::PathBuf;

/// Options shared by both binaries
#[derive(Args, Debug, Clone, Default)]
pub struct EngineArgs {
    /// Config file (defaults to <config dir>/jsontr/config.toml)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Translation engine to use
    #[arg(short = 'e', long, value_enum)]
    pub engine: Option<EngineKind>,

    /// LibreTranslate server URL
    #[arg(short = 'u', long)]
    pub url: Option<String>,
}

impl EngineArgs {
    /// Apply command-line overrides on top of the loaded config
    pub fn apply(&self, config: &mut Config) {
        if let Some(kind) = self.engine {
            config.engine.kind = kind;
        }
        if let Some(url) = &self.url {
            config.engine.libretranslate.url = url.clone();
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "jsontr")]
#[command(about = "Translate the strings of newline-delimited JSON tasks.")]
#[command(
    long_about = "Reads one task per line, {\"source\": \"en\", \"target\": \"es\", \"strings\": ...}, \
and prints the `strings` value with every string translated, one JSON line per task."
)]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub engine: EngineArgs,

    /// Report a failing line (by its input line number) and print `null` for it instead of stopping
    #[arg(short = 'k', long)]
    pub keep_going: bool,

    /// List the engine's installed languages and exit
    #[arg(long)]
    pub languages: bool,

    /// Generate config sample
    #[arg(long)]
    pub generate_config: bool,
}

#[derive(Parser, Debug)]
#[command(name = "jsontr-hello")]
#[command(about = "Translate \"Hello world\" from English to TARGET.")]
#[command(
    long_about = "Smoke test for a language pair. Reads a JSON document from stdin and prints it back \
unchanged (the document is NOT translated), then prints the translation of \"Hello world\" \
from English to TARGET."
)]
#[command(version)]
pub struct HelloCli {
    #[command(flatten)]
    pub engine: EngineArgs,

    /// Target language code
    pub target: String,
}
