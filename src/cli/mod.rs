use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod config;
mod convert;
mod inspect;

/// catalog2xlsx - Product catalog XML to XLSX converter
#[derive(Parser)]
#[command(name = "catalog2xlsx")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a catalog XML file to an XLSX workbook
    Convert {
        /// Input catalog XML file path
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output workbook path (defaults to INPUT with an .xlsx extension)
        #[arg(value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Worksheet name
        #[arg(long, value_name = "NAME")]
        sheet_name: Option<String>,

        /// Keep document order instead of sorting by index
        #[arg(long)]
        keep_order: bool,

        /// Print the summary or error as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse a catalog and print the extracted products
    Inspect {
        /// Input catalog XML file path
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Print products as a JSON array
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Convert {
            input,
            output,
            config,
            sheet_name,
            keep_order,
            json,
        } => convert::run(convert::ConvertArgs {
            input,
            output,
            config,
            sheet_name,
            keep_order,
            json,
        }),
        Commands::Inspect { input, json } => inspect::run(input, json),
    }
}
