use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use commands::{generate_data, serve};

use crate::config::DEFAULT_DATA_PATH;

#[derive(Parser)]
#[command(name = "stockboard")]
#[command(about = "Warehouse operations dashboard with CLI tools and web server")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Path to the default warehouse data CSV
        ///
        /// Absence of the file is not fatal: the dashboard starts over an
        /// empty dataset and waits for an upload.
        #[arg(short, long, env = "DATA_PATH", default_value = DEFAULT_DATA_PATH)]
        data_path: PathBuf,

        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long, env = "BIND_ADDRESS", default_value = "0.0.0.0:3000")]
        bind_address: String,
    },
    /// Generate a synthetic warehouse dataset
    ///
    /// Writes a reproducible CSV to the path the `serve` command reads at
    /// startup. The parent directory is created automatically.
    Generate {
        /// Output CSV path
        #[arg(short, long, env = "DATA_PATH", default_value = DEFAULT_DATA_PATH)]
        output: PathBuf,

        /// Number of records to generate
        #[arg(short, long, default_value_t = 500)]
        records: usize,

        /// RNG seed for reproducible output
        #[arg(short, long, default_value_t = 42)]
        seed: u64,

        /// First possible record date (YYYY-MM-DD); records spread over
        /// the following 90 days
        #[arg(long, default_value = "2026-01-01")]
        start_date: NaiveDate,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve {
                data_path,
                bind_address,
            } => {
                serve(&data_path, &bind_address).await?;
            }
            Commands::Generate {
                output,
                records,
                seed,
                start_date,
            } => {
                generate_data(&output, records, seed, start_date)?;
            }
        }
        Ok(())
    }
}
