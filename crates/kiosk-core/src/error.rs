//! # Error Types
//!
//! Domain-specific error types for kiosk-core.
//!
//! `ValidationError` makes a menu file fatal; `OrderError` only rejects one
//! command.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Field validation errors.
///
/// Raised while parsing a menu record. Every one of them is fatal for the
/// menu file that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// Field value does not have the one permitted length.
    #[error("{field} must be exactly {len} characters")]
    WrongLength { field: &'static str, len: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: &'static str },

    /// Value could not be parsed.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: &'static str, reason: String },

    /// Duplicate value (e.g., an item id seen twice).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: &'static str, value: String },
}

// =============================================================================
// Order Error
// =============================================================================

/// Order operation errors.
///
/// These never end the session: the interpreter reports every one of them
/// as `Invalid command` and keeps prompting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// Quantity is below 1, or the merged quantity would overflow.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// No order item references this id.
    #[error("Item not in order: {0}")]
    NotInOrder(String),

    /// Id is neither in the order nor on the menu.
    #[error("Item not on menu: {0}")]
    NotOnMenu(String),

    /// Trying to remove more than the order holds.
    #[error("Cannot remove {requested} of {id}: only {held} in order")]
    ExceedsHolding {
        id: String,
        held: i64,
        requested: i64,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with OrderError.
pub type OrderResult<T> = Result<T, OrderError>;
