use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::infra::{ApiKey, ConfigManager};
use crate::nlp;
use crate::prompts;
use crate::server;

#[derive(Parser)]
#[command(name = "briefly")]
#[command(about = "Text summarization backend with Gemini forwarding", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server
    Serve {
        /// Bind address, e.g. 127.0.0.1:5000
        #[arg(long, env = "BRIEFLY_BIND")]
        bind: Option<String>,
    },

    /// Summarize a file (or stdin) locally, without calling Gemini
    Summarize {
        /// Input file; reads stdin when omitted
        file: Option<PathBuf>,

        /// Number of sentences in the summary
        #[arg(short = 'n', long, default_value = "5")]
        sentences: usize,
    },
}

pub async fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("briefly=info,tower_http=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { bind } => serve_command(bind).await,
        Commands::Summarize { file, sentences } => summarize_command(file, sentences),
    }
}

async fn serve_command(bind: Option<String>) -> Result<()> {
    let mut config = ConfigManager::new()?.get();
    if let Some(bind) = bind {
        config.bind = bind;
    }

    let api_key = ApiKey::from_env()?;

    println!("{} http://{}", "Serving on".bold(), config.bind);
    server::serve(config, api_key).await
}

fn summarize_command(file: Option<PathBuf>, sentences: usize) -> Result<()> {
    anyhow::ensure!(sentences >= 1, prompts::MSG_INVALID_SENTENCE_COUNT);

    let text = match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };

    if text.trim().is_empty() {
        anyhow::bail!(prompts::MSG_EMPTY_INPUT);
    }

    println!("{}", nlp::summarize(&text, sentences));
    Ok(())
}
