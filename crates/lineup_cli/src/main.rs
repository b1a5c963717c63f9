//! Lineup CLI
//!
//! Roster → formation assignment and single-player position recommendation

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lineup_core::api::{AssignResponse, RecommendResponse};
use lineup_core::SCHEMA_VERSION;
use lineup_cli::{
    load_config, render_assignment, render_formations, render_recommendation, run_assign,
    run_recommend,
};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lineup")]
#[command(about = "Assign a squad to a formation", long_about = None)]
struct Cli {
    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assign a roster to a formation
    Assign {
        /// Roster JSON file (array of player entries)
        #[arg(long)]
        roster: PathBuf,

        /// Formation name (unknown names fall back to 4-3-3)
        #[arg(long, default_value = "4-3-3")]
        formation: String,

        /// YAML or JSON config file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write the JSON response to this file instead of printing a table
        #[arg(long)]
        out: Option<PathBuf>,

        /// Print the JSON response to stdout
        #[arg(long, default_value = "false")]
        json: bool,

        /// Pretty-print JSON output
        #[arg(long, default_value = "false")]
        pretty: bool,
    },

    /// List the built-in formations
    Formations,

    /// Recommend positions for one player's ratings
    Recommend {
        /// Attributes JSON file (attribute name → rating)
        #[arg(long)]
        attributes: PathBuf,

        /// Formation name (unknown names fall back to 4-3-3)
        #[arg(long, default_value = "4-3-3")]
        formation: String,

        /// YAML or JSON config file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the JSON response to stdout
        #[arg(long, default_value = "false")]
        json: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json =
        if pretty { serde_json::to_string_pretty(value)? } else { serde_json::to_string(value)? };
    Ok(json)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Assign { roster, formation, config, out, json, pretty } => {
            let config = load_config(config.as_deref())?;
            let assignment = run_assign(&roster, &formation, &config)?;

            if out.is_none() && !json {
                print!("{}", render_assignment(&assignment));
                return Ok(());
            }

            let response = AssignResponse { schema_version: SCHEMA_VERSION, assignment };
            let text = to_json(&response, pretty)?;
            match out {
                Some(path) => {
                    fs::write(&path, text)
                        .with_context(|| format!("Failed to write output: {}", path.display()))?;
                    println!("✅ Assignment written to {}", path.display());
                }
                None => println!("{text}"),
            }
        }

        Commands::Formations => {
            print!("{}", render_formations());
        }

        Commands::Recommend { attributes, formation, config, json } => {
            let config = load_config(config.as_deref())?;
            let recommendation = run_recommend(&attributes, &formation, &config)?;

            if json {
                let response = RecommendResponse { schema_version: SCHEMA_VERSION, recommendation };
                println!("{}", to_json(&response, true)?);
            } else {
                match recommendation {
                    Some(rec) => print!("{}", render_recommendation(&rec)),
                    None => println!("No recommendation: empty suitability distribution"),
                }
            }
        }
    }

    Ok(())
}
