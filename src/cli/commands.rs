use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use super::report::{format_career_paths, format_person, format_search_line, format_stats};
use crate::analysis::{analyze_career_paths, compute_stats};
use crate::dataset::{load_dataset, spawn_loader};
use crate::filters::{apply_filters, parse_filter};
use crate::models::Alumnus;
use crate::search::{matches_query, search_people};
use crate::timeline::current_year;
use crate::tui::run_browser;
use crate::utils::{default_browse_log_path, init_logging, resolve_data_path, sanitize_for_terminal};

#[derive(Parser)]
#[command(name = "alumni-explorer")]
#[command(version)]
#[command(about = "Search and browse an alumni career dataset", long_about = None)]
pub struct Cli {
    /// Dataset file (default: $ALUMNI_EXPLORER_DATA, then ./structured_careers.json)
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show statistics about the dataset
    Stats,
    /// Search alumni by name, company, title or location
    Search {
        /// Search words, joined with spaces (empty matches everyone)
        query: Vec<String>,

        /// Field filter applied before the text search, e.g. "comp:google since:2015"
        #[arg(short, long, value_name = "EXPR")]
        filter: Option<String>,

        /// Print at most this many matches
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Print matches as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one person's profile and career history
    Show {
        /// Exact id, exact name, or a part of one name
        #[arg(required = true, value_name = "NAME_OR_ID")]
        query: Vec<String>,
    },
    /// Show the most common sector transitions and career paths
    Paths {
        /// Number of transitions and paths to list
        #[arg(long, default_value_t = 10)]
        top: usize,
    },
    /// Open the interactive browser
    Browse,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = &cli.command else {
        println!("Use --help for usage information");
        return Ok(());
    };

    // The browser owns the terminal, so its logs go to a file by default
    let log_file = match (&cli.log_file, command) {
        (Some(path), _) => Some(path.clone()),
        (None, Commands::Browse) => Some(default_browse_log_path()),
        (None, _) => None,
    };
    init_logging(cli.verbose, log_file.as_deref())?;

    let data_path = resolve_data_path(cli.data.as_deref())?;
    debug!("Using dataset {}", data_path.display());

    match command {
        Commands::Stats => show_stats(&data_path),
        Commands::Search { query, filter, limit, json } => {
            search(&data_path, &query.join(" "), filter.as_deref(), *limit, *json)
        }
        Commands::Show { query } => show_person(&data_path, &query.join(" ")),
        Commands::Paths { top } => show_paths(&data_path, *top),
        Commands::Browse => {
            info!("Opening browser for {}", data_path.display());
            run_browser(spawn_loader(data_path))
        }
    }
}

fn show_stats(data_path: &Path) -> Result<()> {
    let alumni = load_dataset(data_path)?;
    print!("{}", format_stats(&compute_stats(&alumni), data_path));
    Ok(())
}

fn search(
    data_path: &Path,
    query: &str,
    filter: Option<&str>,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let alumni = load_dataset(data_path)?;
    let matches = find_matches(&alumni, query, filter)?;
    let shown = &matches[..limit.unwrap_or(matches.len()).min(matches.len())];

    if json {
        let output =
            serde_json::to_string_pretty(shown).context("Failed to serialize search results")?;
        println!("{}", output);
        return Ok(());
    }

    for alumnus in shown {
        println!("{}", format_search_line(alumnus));
    }

    let noun = if matches.len() == 1 { "match" } else { "matches" };
    if shown.len() < matches.len() {
        println!(
            "\nShowing {} of {} {} ({} alumni)",
            shown.len(),
            matches.len(),
            noun,
            alumni.len()
        );
    } else {
        println!("\n{} {} ({} alumni)", matches.len(), noun, alumni.len());
    }
    Ok(())
}

/// Field filter first (when given), then the text search, in dataset order
fn find_matches<'a>(
    alumni: &'a [Alumnus],
    query: &str,
    filter: Option<&str>,
) -> Result<Vec<&'a Alumnus>> {
    let Some(filter) = filter else {
        return Ok(search_people(alumni, query));
    };

    let expr = parse_filter(filter).with_context(|| format!("Invalid filter: {}", filter))?;
    Ok(apply_filters(alumni, &expr)
        .into_iter()
        .filter(|alumnus| matches_query(alumnus, query))
        .collect())
}

fn show_person(data_path: &Path, query: &str) -> Result<()> {
    let alumni = load_dataset(data_path)?;
    let alumnus = find_person(&alumni, query)?;
    print!("{}", format_person(alumnus, current_year()));
    Ok(())
}

/// Look up one person: exact id, then case-insensitive exact name, then a unique name
/// substring
fn find_person<'a>(alumni: &'a [Alumnus], query: &str) -> Result<&'a Alumnus> {
    let query = query.trim();
    if query.is_empty() {
        bail!("Empty name or id");
    }

    if let Some(alumnus) = alumni.iter().find(|a| a.id() == Some(query)) {
        return Ok(alumnus);
    }

    let needle = query.to_lowercase();
    if let Some(alumnus) = alumni.iter().find(|a| a.name().to_lowercase() == needle) {
        return Ok(alumnus);
    }

    let candidates: Vec<&Alumnus> =
        alumni.iter().filter(|a| a.name().to_lowercase().contains(&needle)).collect();

    match candidates.as_slice() {
        [] => bail!("No alumni named '{}'", sanitize_for_terminal(query)),
        [only] => Ok(*only),
        many => {
            let names: Vec<String> =
                many.iter().take(10).map(|a| sanitize_for_terminal(a.name())).collect();
            bail!(
                "'{}' matches {} alumni: {}{}",
                sanitize_for_terminal(query),
                many.len(),
                names.join(", "),
                if many.len() > names.len() { ", ..." } else { "" }
            )
        }
    }
}

fn show_paths(data_path: &Path, top: usize) -> Result<()> {
    let alumni = load_dataset(data_path)?;
    let report = analyze_career_paths(&alumni);
    print!("{}", format_career_paths(&report, top));
    Ok(())
}
