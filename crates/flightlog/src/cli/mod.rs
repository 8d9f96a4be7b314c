//! Command-line interface for flightlog.
//!
//! This module provides the CLI structure for the `flightlog` binary: a
//! required data file path followed by an optional subcommand.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{AddCommand, DisplayCommand, OutputFormat, SelectCommand};

/// flightlog - keep a list of flights in a JSON file
///
/// Records destination, flight number and aircraft type per flight, and
/// filters the list by how many years ago a flight was recorded.
#[derive(Debug, Parser)]
#[command(name = "flightlog")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The JSON data file to operate on
    #[arg(value_name = "FILENAME")]
    pub filename: PathBuf,

    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute; with none, the data file is only loaded
    /// and checked
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a new flight record
    Add(AddCommand),

    /// Display all flight records
    Display(DisplayCommand),

    /// Select flights recorded at least a given number of years ago
    Select(SelectCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}
