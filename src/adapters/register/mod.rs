//! Register abstraction layer
//!
//! This module provides the trait-based abstraction for the patient
//! register, allowing the application to work with either storage backend
//! (in-memory or sled) behind one contract.

pub mod factory;
pub mod traits;

pub use factory::create_register;
pub use traits::PatientRegister;
