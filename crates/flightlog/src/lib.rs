//! `flightlog` - keep a small list of flight records in a JSON file.
//!
//! This library provides the functionality behind the `flightlog` binary:
//! a serde record model, whole-file JSON storage with schema validation on
//! load, selection by elapsed years, and fixed-width table rendering.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod flights;
pub mod logging;
pub mod record;
pub mod render;
pub mod storage;

pub use config::Config;
pub use error::{Error, Result};
pub use flights::FlightList;
pub use logging::init_logging;
pub use record::Record;
pub use storage::Storage;
