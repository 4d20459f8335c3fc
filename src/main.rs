// Streaming entry point: one task per stdin line, one translated JSON line per task
use clap::Parser;
use colored::Colorize;
use jsontr::application::stream::{run_stream, StreamOptions};
use jsontr::infrastructure::config::{generate_config_sample, load_config};
use jsontr::infrastructure::logging::init_logging;
use jsontr::interfaces::cli::Cli;
use jsontr::AppState;
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup graceful shutdown handler
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for shutdown signal: {}", e);
        } else {
            let _ = shutdown_tx.send(());
        }
    });

    let cli = Cli::parse();
    let config_path = cli.engine.config.as_deref();

    if cli.generate_config {
        generate_config_sample(config_path)?;
        return Ok(());
    }

    let mut config = load_config(config_path)?;
    cli.engine.apply(&mut config);
    init_logging(&config.logging)?;

    // Installed languages are enumerated once for the whole stream
    let state = AppState::new(config).await?;

    if cli.languages {
        print_languages(&state);
        return Ok(());
    }

    let options = StreamOptions {
        keep_going: cli.keep_going,
    };
    let input = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    let mut stderr = std::io::stderr();

    // Only consulted between lines; a dropped sender means no signal will come
    let shutdown = async move {
        if shutdown_rx.await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    let summary = run_stream(&state, input, &mut stdout, &mut stderr, options, shutdown).await?;
    if summary.interrupted {
        eprintln!("{}", "Interrupted, stopped before the next line".yellow());
        std::process::exit(130);
    }
    if summary.failed > 0 {
        eprintln!(
            "{}",
            format!("✘ {} of {} lines failed", summary.failed, summary.lines).red()
        );
        std::process::exit(1);
    }

    Ok(())
}

fn print_languages(state: &AppState) {
    println!("{}", "Installed languages".green().bold());
    for code in state.registry.codes() {
        let Some(language) = state.registry.get(code) else {
            continue;
        };
        let name = language.name.as_deref().unwrap_or("");
        let mut targets = language.targets.clone();
        targets.sort();
        println!("  {:<6} {:<20} -> {}", code.cyan(), name, targets.join(", "));
    }
}
