//! Register abstraction trait
//!
//! This module defines the contract that every register backend must
//! implement. The application depends only on this trait; the concrete
//! backend is picked once at startup by the factory.

use crate::domain::{Patient, Result};

/// Keyed patient store with uniqueness enforcement
///
/// A register owns the authoritative collection of patients, keyed by
/// social security number. Two backends implement this contract with
/// identical external behavior: an in-memory map and a persistent
/// sled-backed store. All operations are synchronous and run to
/// completion; the register assumes exclusive single-writer access and
/// defines no locking discipline of its own.
pub trait PatientRegister: Send {
    /// Adds a patient to the register
    ///
    /// # Errors
    ///
    /// Returns [`KardexError::DuplicateKey`](crate::domain::KardexError::DuplicateKey)
    /// if a patient with the same social security number is already stored.
    fn add(&mut self, patient: Patient) -> Result<()>;

    /// Adds every patient in the given sequence, in order
    ///
    /// Applies [`add`](Self::add) to each element. On a duplicate key the
    /// iteration stops at the failing element and the error is returned;
    /// patients added before the failure stay in the register. There is no
    /// rollback — a partially applied bulk import is the documented
    /// behavior of this contract, not a backend quirk.
    ///
    /// # Errors
    ///
    /// Returns [`KardexError::DuplicateKey`](crate::domain::KardexError::DuplicateKey)
    /// for the first element whose key is already stored.
    fn add_all(&mut self, patients: Vec<Patient>) -> Result<()>;

    /// Removes the given patient if an equal record is stored under its key
    ///
    /// This is a compare-and-delete, not a delete-by-key: the entry is
    /// removed only when the stored record is structurally equal to
    /// `patient`. A stale reference — one whose stored counterpart was
    /// re-keyed or edited elsewhere — removes nothing.
    ///
    /// # Returns
    ///
    /// `true` if an entry was removed, `false` if the key was absent or the
    /// stored record differed. A miss is not an error.
    fn remove(&mut self, patient: &Patient) -> Result<bool>;

    /// Replaces `old_patient` with `new_patient` as one logical unit
    ///
    /// A no-op when `old_patient`'s key is not currently stored. The
    /// uniqueness check runs before any mutation, so a rejected update
    /// leaves the register unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`KardexError::DuplicateKey`](crate::domain::KardexError::DuplicateKey)
    /// if `new_patient`'s key is occupied by a stored record that is not
    /// equal to `old_patient`.
    fn update(&mut self, new_patient: Patient, old_patient: &Patient) -> Result<()>;

    /// Returns a snapshot of all stored patients
    ///
    /// The returned vector is detached: mutating it does not affect the
    /// register. Ordering is not significant.
    fn list(&self) -> Result<Vec<Patient>>;

    /// Returns the number of stored patients
    fn count(&self) -> Result<usize>;

    /// Releases backend resources
    ///
    /// Idempotent. A no-op for the in-memory backend; flushes and releases
    /// the storage session for the persistent backend, after which further
    /// operations on that backend fail with
    /// [`KardexError::Storage`](crate::domain::KardexError::Storage).
    fn close(&mut self) -> Result<()>;
}
