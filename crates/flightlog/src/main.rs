//! `flightlog` - CLI for keeping flight records in a JSON file.
//!
//! This binary parses the command line, loads the configuration and
//! dispatches one command against the data file named on the command line.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use clap::Parser;

use flightlog::cli::{AddCommand, Cli, Command, DisplayCommand, OutputFormat, SelectCommand};
use flightlog::{init_logging, render, Config, FlightList, Result, Storage};

fn main() {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    if let Err(err) = run(&cli) {
        // Diagnostics go to stdout, like every other message this tool prints.
        println!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::load_from(cli.config.clone())?;
    let storage = Storage::new(&cli.filename);

    match &cli.command {
        Some(Command::Add(cmd)) => handle_add(&storage, &config, cmd),
        Some(Command::Display(cmd)) => handle_display(&storage, &config, cmd),
        Some(Command::Select(cmd)) => handle_select(&storage, &config, cmd),
        // A bare filename loads the file, reporting any schema violation,
        // and changes nothing.
        None => storage.load_or_default().map(|_| ()),
    }
}

fn handle_add(storage: &Storage, config: &Config, cmd: &AddCommand) -> Result<()> {
    let mut flights = storage.load_or_default()?;
    flights.add(cmd.point.clone(), cmd.number, cmd.kind.clone());
    storage.save(&flights, config.storage.indent)
}

fn handle_display(storage: &Storage, config: &Config, cmd: &DisplayCommand) -> Result<()> {
    let flights = storage.load_or_default()?;
    print_flights(&flights, config, cmd.format)
}

fn handle_select(storage: &Storage, config: &Config, cmd: &SelectCommand) -> Result<()> {
    let flights = storage.load_or_default()?;
    let selected = flights.select(cmd.period);
    print_flights(&selected, config, cmd.format)
}

fn print_flights(flights: &FlightList, config: &Config, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", render::table(flights, &config.display)),
        OutputFormat::Json => println!("{}", render::json(flights)?),
    }
    Ok(())
}
