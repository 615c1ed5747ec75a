//! # catalog2xlsx
//!
//! Command-line front end for converting product-catalog XML documents into
//! XLSX workbooks.
//!
//! ## Usage
//!
//! ```bash
//! # Convert a catalog (writes catalog.xlsx next to the input)
//! catalog2xlsx convert catalog.xml
//!
//! # Custom sheet name, document order, machine-readable result
//! catalog2xlsx convert catalog.xml out/products.xlsx --sheet-name Items --keep-order --json
//!
//! # Print the extracted products
//! catalog2xlsx -v inspect catalog.xml
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
