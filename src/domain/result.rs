//! Result type alias for Kardex
//!
//! This module provides a convenient Result type alias that uses KardexError
//! as the error type.

use super::errors::KardexError;

/// Result type alias for Kardex operations
///
/// This is a convenience type alias that uses `KardexError` as the error type.
/// Use this throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use kardex::domain::result::Result;
/// use kardex::domain::errors::KardexError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(KardexError::Validation("invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, KardexError>;
