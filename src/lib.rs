//! mods-csv-cli library
//!
//! This crate provides the core functionality for the `mods-csv-cli` binary,
//! which turns a folder of MODS XML records into a Master Metadata Sheet CSV.
//!
//! ## Overview
//!
//! - [`parser`] - Discovers MODS files, parses them into an element tree and writes CSV
//! - [`mapping`] - Column schemas and the rules extracting each column from a record
//! - [`converter`] - Runs a whole conversion, from folder to CSV file
//! - [`cli`] - Command-line interface
//! - [`config`] - Conversion settings, including the TOML configuration file
//! - [`models`] - Rows, schema variants and conversion summaries
//! - [`errors`] - Error types used throughout the application
//!
//! ## Example Usage
//!
//! ```no_run
//! use mods_csv_cli::{converter, errors::AppResult};
//! use std::path::Path;
//!
//! # fn example() -> AppResult<()> {
//! let summary = converter::convert(
//!     Path::new("collections/klhs_photographs"),
//!     Path::new("out"),
//!     "klhs_photographs.csv",
//! )?;
//! println!("{} rows written", summary.rows_written);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod converter;
pub mod errors;
pub mod mapping;
pub mod models;
pub mod parser;
