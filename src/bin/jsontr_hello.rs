// Single-shot entry point: echo a JSON document, then translate "Hello world"
use clap::Parser;
use jsontr::application::hello::run_hello;
use jsontr::infrastructure::config::load_config;
use jsontr::infrastructure::logging::init_logging;
use jsontr::interfaces::cli::HelloCli;
use jsontr::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = HelloCli::parse();

    let mut config = load_config(cli.engine.config.as_deref())?;
    cli.engine.apply(&mut config);
    init_logging(&config.logging)?;

    let state = AppState::new(config).await?;
    let mut stdout = tokio::io::stdout();
    run_hello(&state, &cli.target, tokio::io::stdin(), &mut stdout).await?;

    Ok(())
}
