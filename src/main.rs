//! Userdex CLI
//!
//! Launches the interactive browser by default; `list` performs a single
//! fetch cycle and prints the table to stdout.

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{HumanDuration, ProgressBar};
use std::time::{Duration, Instant};
use userdex::filter::filter_indices;
use userdex::{AppConfig, Fetcher};

/// Userdex - browse a remote user directory from the terminal
#[derive(Parser)]
#[command(name = "userdex")]
#[command(author = "Userdex Contributors")]
#[command(version)]
#[command(about = "Browse a remote user directory with live name search", long_about = None)]
struct Cli {
    /// Endpoint serving the user list as a JSON array
    #[arg(long, default_value = userdex::DEFAULT_ENDPOINT)]
    url: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse users interactively (default)
    Browse,

    /// Fetch once and print the user table
    List {
        /// Filter rows by name substring (case-insensitive)
        #[arg(short, long)]
        query: Option<String>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        output: String,
    },
}

fn main() {
    userdex::logging::init();
    userdex::logging::info("MAIN", "userdex starting up");

    let cli = Cli::parse();
    let config = AppConfig {
        endpoint: cli.url,
        ..AppConfig::default()
    };

    let result = match cli.command {
        None | Some(Commands::Browse) => userdex::tui::run(&config),
        Some(Commands::List { query, output }) => {
            cmd_list(&config, query.as_deref().unwrap_or(""), &output)
        }
    };

    userdex::logging::flush();

    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

/// List command implementation
fn cmd_list(config: &AppConfig, query: &str, output_format: &str) -> userdex::Result<()> {
    let fetcher = Fetcher::new(config.endpoint.clone())?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!("Fetching {}", fetcher.endpoint()));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let start = Instant::now();
    let fetched = fetcher.fetch_users();
    spinner.finish_and_clear();

    let users = fetched?;
    let elapsed = start.elapsed();
    let visible = filter_indices(&users, query);

    if output_format == "json" {
        let rows: Vec<serde_json::Value> = visible
            .iter()
            .map(|&idx| {
                let user = &users[idx];
                serde_json::json!({
                    "id": user.id,
                    "name": user.name,
                    "email": user.email,
                    "city": user.city(),
                })
            })
            .collect();
        println!("{}", serde_json::json!(rows));
    } else {
        println!(
            "{} Fetched {} users in {}",
            style("\u{2713}").green().bold(),
            style(users.len()).yellow(),
            style(HumanDuration(elapsed)).cyan()
        );
        if !query.trim().is_empty() {
            println!(
                "  {} '{}' ({} matching)",
                style("Filter:").bold(),
                query,
                visible.len()
            );
        }
        println!();
        println!(
            "  {:<25} {:<30} {}",
            style("Name").bold(),
            style("Email").bold(),
            style("City").bold()
        );

        if visible.is_empty() {
            println!("  {}", style("(no matching users)").dim());
        }
        for &idx in &visible {
            let user = &users[idx];
            println!("  {:<25} {:<30} {}", user.name, user.email, user.city());
        }
    }

    Ok(())
}
