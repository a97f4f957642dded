use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::Parser;

use quotecard::cli::Cli;
use quotecard::config::Config;
use quotecard::data::remote::HttpQuoteClient;
use quotecard::data::QuoteRepository;
use quotecard::logging::{init_file_tracing, init_stderr_tracing};
use quotecard::presenter::QuotePresenter;
use quotecard::ui::app::App;
use quotecard::ui::plain::{render_plain, run_once};
use quotecard::ui::quote::QuoteUiState;
use quotecard::ui::runtime;

#[tokio::main]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(1)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    if cli.once {
        init_stderr_tracing();
    } else {
        init_file_tracing();
    }

    let mut config = match &cli.config {
        Some(path) if !path.exists() => bail!("Config file '{}' not found", path.display()),
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply(&mut config);
    config.validate()?;

    let client = HttpQuoteClient::new(&config.api).context("Failed to build HTTP client")?;
    let endpoint = client.base_url().to_string();
    let presenter = QuotePresenter::new(QuoteRepository::new(Arc::new(client)));
    let quote_id = config.ui.initial_quote_id;

    tracing::info!(endpoint = %endpoint, quote_id, once = cli.once, "Starting quotecard");

    if cli.once {
        let state = run_once(&presenter, quote_id).await;
        println!("{}", render_plain(&state));
        return Ok(match state {
            QuoteUiState::Success { .. } => ExitCode::SUCCESS,
            _ => ExitCode::from(1),
        });
    }

    let mut app = App::new(presenter, quote_id, endpoint);
    runtime::run(&mut app, config.ui.tick_rate())
        .await
        .context("Terminal UI failed")?;
    Ok(ExitCode::SUCCESS)
}
