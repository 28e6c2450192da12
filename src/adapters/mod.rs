//! Storage and format adapters
//!
//! This module contains the register backends behind the shared register
//! contract, and the CSV codec for bulk import/export.

pub mod csv;
pub mod memory;
pub mod register;
pub mod sled;

pub use self::csv::CsvCodec;
pub use self::memory::MemoryRegister;
pub use self::register::{create_register, PatientRegister};
pub use self::sled::SledRegister;
