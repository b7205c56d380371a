use clap::{Args, Subcommand};

use crate::cli::subcommands::{CategoryCommands, ProductCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Category management.
    Category {
        #[command(subcommand)]
        action: CategoryCommands,
    },
    /// Product management.
    Product {
        #[command(subcommand)]
        action: ProductCommands,
    },
    /// Inventory statistics: counts, total value, low-stock set.
    Stats(StatsArgs),
    /// Export the product list as CSV.
    Export(ExportArgs),
    /// Send the low-stock alert mail.
    Alert(AlertArgs),
}

/// Arguments for `mgz stats`.
#[derive(Clone, Debug, Args)]
pub struct StatsArgs {
    /// Low-stock threshold override (defaults to the configured value).
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=50))]
    pub threshold: Option<u32>,
}

/// Arguments for `mgz export`.
#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    /// Write the CSV to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Arguments for `mgz alert`.
#[derive(Clone, Debug, Args)]
pub struct AlertArgs {
    /// Low-stock threshold override (defaults to the configured value).
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=50))]
    pub threshold: Option<u32>,
}
