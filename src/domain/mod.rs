//! Domain models and types for Kardex.
//!
//! This module contains the core domain model, error types, and business
//! rules shared by every register backend and the CSV codec.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **The patient record** ([`Patient`], [`PatientBuilder`])
//! - **Error types** ([`KardexError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, KardexError>`]:
//!
//! ```rust
//! use kardex::domain::{KardexError, Result};
//!
//! fn example() -> Result<()> {
//!     let patient = kardex::domain::Patient::new("Nina", "Olsen", "01019912345")?;
//!     Ok(())
//! }
//! ```
//!
//! # Builder Pattern
//!
//! Optional fields are set through the builder; validation happens once, at
//! the terminal build step:
//!
//! ```rust
//! use kardex::domain::Patient;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let patient = Patient::builder("Nina", "Olsen", "01019912345")
//!     .general_practitioner("Dr. Strand")
//!     .diagnosis("Influenza")
//!     .build()?;
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod patient;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::KardexError;
pub use patient::{Patient, PatientBuilder};
pub use result::Result;
