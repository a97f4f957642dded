use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::domain::QuoteId;

/// Fetch a quote and show it in the terminal.
#[derive(Debug, Parser)]
#[command(name = "quotecard", version)]
pub struct Cli {
    /// Quote id to show first (overrides ui.initial_quote_id)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub id: Option<QuoteId>,

    /// Base URL of the quote service (overrides api.base_url)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Fetch once, print the result to stdout and exit
    #[arg(long)]
    pub once: bool,
}

impl Cli {
    /// Apply command-line overrides on top of a loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(id) = self.id {
            config.ui.initial_quote_id = id;
        }
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
    }
}
