// src/cli.rs
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{error, info};

use crate::core::{ConfigManager, HeadHunterClient};
use crate::utils::parse_keywords;
use crate::{process_batch, top_stored, Vacancy, WireVacancy};

#[derive(Parser)]
#[command(name = "vacancy-scout")]
#[command(about = "Search hh.ru vacancies, filter them by keywords and keep them in a local store")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Store file name inside the data directory (".json" is appended)
    #[arg(long, global = true)]
    pub store: Option<String>,

    /// Directory holding the store file
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch vacancies, save them and print the ones matching the keywords
    Search {
        /// Search query; prompted for when omitted
        #[arg(short, long)]
        query: Option<String>,
        /// Number of vacancies to fetch (1-100); prompted for when omitted
        #[arg(short = 'n', long)]
        top: Option<u32>,
        /// Filter keywords; prompted for when omitted
        #[arg(short, long, num_args = 0..)]
        keywords: Option<Vec<String>>,
    },
    /// Print stored vacancies, highest salary first
    List {
        #[arg(short, long, num_args = 0..)]
        keywords: Vec<String>,
        #[arg(short = 'n', long)]
        top: Option<usize>,
    },
    /// Add one wire-shaped vacancy given as JSON
    Add { json: String },
    /// Remove every stored vacancy
    Clear,
}

pub async fn handle_command(cli: Cli, config: ConfigManager) -> Result<()> {
    let saver = config.saver();
    info!("Using store {}", saver.path().display());

    match cli.command {
        None => run_search(&config, None, None, None).await,

        Some(Command::Search {
            query,
            top,
            keywords,
        }) => run_search(&config, query, top, keywords).await,

        Some(Command::List { keywords, top }) => {
            let vacancies = top_stored(&saver, keywords.as_slice(), top)?;
            print_vacancies(&vacancies);
            Ok(())
        }

        Some(Command::Add { json }) => {
            let value: serde_json::Value =
                serde_json::from_str(&json).context("Argument is not valid JSON")?;
            if saver.add(&value)? {
                println!("Vacancy added to {}", saver.path().display());
            } else {
                println!("Nothing added: expected a new vacancy object with name and alternate_url");
            }
            Ok(())
        }

        Some(Command::Clear) => {
            saver.clear()?;
            println!("Store cleared: {}", saver.path().display());
            Ok(())
        }
    }
}

async fn run_search(
    config: &ConfigManager,
    query: Option<String>,
    top: Option<u32>,
    keywords: Option<Vec<String>>,
) -> Result<()> {
    let query = match query {
        Some(query) => query,
        None => prompt("Enter a search query: ")?,
    };
    let top = match top {
        Some(top) => top,
        None => prompt("How many vacancies to fetch: ")?
            .parse::<u32>()
            .context("The number of vacancies must be a positive integer")?,
    };
    let keywords = match keywords {
        Some(keywords) => keywords,
        None => parse_keywords(&prompt("Enter filter keywords separated by spaces: ")?),
    };

    let batch = fetch_or_empty(config, &query, top).await;
    let vacancies = process_batch(&config.saver(), &batch, keywords.as_slice())?;

    print_vacancies(&vacancies);
    Ok(())
}

/// A failed fetch is reported and treated as an empty result
async fn fetch_or_empty(config: &ConfigManager, query: &str, top: u32) -> Vec<WireVacancy> {
    let fetched = match HeadHunterClient::new(&config.service) {
        Ok(client) => client.get_vacancies(query, top).await,
        Err(e) => Err(e),
    };

    match fetched {
        Ok(batch) => batch,
        Err(e) => {
            error!("Fetching vacancies failed: {:#}", e);
            println!("Could not fetch vacancies: {:#}", e);
            Vec::new()
        }
    }
}

fn print_vacancies(vacancies: &[Vacancy]) {
    if vacancies.is_empty() {
        println!("No vacancies found.");
        return;
    }
    for vacancy in vacancies {
        println!("{}", vacancy);
    }
}

fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    Ok(line.trim().to_string())
}
