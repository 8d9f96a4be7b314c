//! CLI command definitions.
//!
//! This module defines the argument structure of all subcommands.

use clap::{Args, ValueEnum};

/// Add command arguments.
#[derive(Debug, Args)]
pub struct AddCommand {
    /// The destination of the flight
    #[arg(short, long)]
    pub point: String,

    /// The flight number
    #[arg(short, long)]
    pub number: i64,

    /// The aircraft type
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub kind: String,
}

/// Display command arguments.
#[derive(Debug, Args)]
pub struct DisplayCommand {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Select command arguments.
#[derive(Debug, Args)]
pub struct SelectCommand {
    /// Minimum number of years since the flight was recorded
    #[arg(short, long, allow_negative_numbers = true)]
    pub period: i32,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Bordered fixed-width table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}
