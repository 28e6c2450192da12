// Kardex - Patient Register
// Copyright (c) 2025 Kardex Contributors
// Licensed under the MIT License

//! # Kardex - Patient Register
//!
//! Kardex is a patient register that keeps a collection of patient records
//! keyed by social security number, with duplicate-key rejection, bulk CSV
//! import/export, and two interchangeable storage backends behind one
//! contract.
//!
//! ## Architecture
//!
//! Kardex follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`adapters`] - Register backends (in-memory, sled) and the CSV codec
//! - [`domain`] - The patient record, error types, and business rules
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kardex::adapters::register::create_register;
//! use kardex::config::load_config;
//! use kardex::domain::Patient;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load configuration and open the configured backend
//!     let config = load_config("kardex.toml")?;
//!     let mut register = create_register(&config)?;
//!
//!     // Add a patient
//!     let patient = Patient::builder("Nina", "Olsen", "01019912345")
//!         .general_practitioner("Dr. Strand")
//!         .build()?;
//!     register.add(patient)?;
//!
//!     println!("{} patient(s) in the register", register.count()?);
//!     register.close()?;
//!     Ok(())
//! }
//! ```
//!
//! ## Storage Backends
//!
//! The register contract is one trait with two implementations selected by
//! configuration: a `HashMap`-backed in-memory store for sessions that
//! deliberately start empty, and an embedded sled database for persistent
//! use. External behavior is identical; the one documented asymmetry is
//! that `add_all` applies additions up to the first duplicate key and does
//! not roll them back.
//!
//! ## CSV Import/Export
//!
//! Patient lists round-trip through a fixed-header CSV dialect:
//!
//! ```rust,no_run
//! use kardex::adapters::csv::CsvCodec;
//! use std::path::Path;
//!
//! # fn example() -> kardex::domain::Result<()> {
//! let codec = CsvCodec::default();
//! let patients = codec.read(Some(Path::new("patients.csv")))?;
//! codec.write(Some(Path::new("copy.csv")), &patients)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Kardex uses the [`domain::KardexError`] type for all errors:
//!
//! ```rust,no_run
//! use kardex::domain::KardexError;
//!
//! fn example() -> Result<(), KardexError> {
//!     let config = kardex::config::load_config("kardex.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Kardex uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!("Register opened");
//! warn!(ssn = "123", "Duplicate social security number rejected");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
