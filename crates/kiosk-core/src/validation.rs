//! # Validation Module
//!
//! Field rules for menu records and order quantities.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Menu file load (fatal)                                       │
//! │  ├── validate_item_id        exactly 4 characters                      │
//! │  ├── validate_category       0..=15 characters                         │
//! │  ├── parse_cost_cents        positive integer                          │
//! │  └── validate_item_name      1..=20 characters                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Menu insert (fatal)                                          │
//! │  └── duplicate id check (Menu::insert)                                 │
//! │                                                                         │
//! │  Layer 3: Interactive commands (recoverable)                           │
//! │  ├── parse_quantity          any integer, or "Invalid command"         │
//! │  └── validate_quantity       >= 1, or "Invalid command"                │
//! │                                                                         │
//! │  Over-length input is REJECTED, never truncated.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lengths are counted in characters, not bytes.

use crate::error::ValidationError;
use crate::{ITEM_ID_LEN, MAX_CATEGORY_LEN, MAX_NAME_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a menu item id.
///
/// ## Rules
/// - Exactly 4 characters
///
/// ## Example
/// ```rust
/// use kiosk_core::validation::validate_item_id;
///
/// assert!(validate_item_id("A001").is_ok());
/// assert!(validate_item_id("A01").is_err());
/// assert!(validate_item_id("A0001").is_err());
/// ```
pub fn validate_item_id(id: &str) -> ValidationResult<()> {
    if id.is_empty() {
        return Err(ValidationError::Required { field: "id" });
    }

    if id.chars().count() != ITEM_ID_LEN {
        return Err(ValidationError::WrongLength {
            field: "id",
            len: ITEM_ID_LEN,
        });
    }

    Ok(())
}

/// Validates a menu item name.
///
/// ## Rules
/// - Must not be empty
/// - At most 20 characters
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    if name.is_empty() {
        return Err(ValidationError::Required { field: "name" });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name",
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a category label. Empty is allowed.
pub fn validate_category(category: &str) -> ValidationResult<()> {
    if category.chars().count() > MAX_CATEGORY_LEN {
        return Err(ValidationError::TooLong {
            field: "category",
            max: MAX_CATEGORY_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses a menu cost field.
///
/// ## Rules
/// - Must parse as an integer (cents)
/// - Must be positive (> 0)
///
/// ## Example
/// ```rust
/// use kiosk_core::validation::parse_cost_cents;
///
/// assert_eq!(parse_cost_cents("150").unwrap(), 150);
/// assert!(parse_cost_cents("0").is_err());
/// assert!(parse_cost_cents("1.50").is_err());
/// ```
pub fn parse_cost_cents(raw: &str) -> ValidationResult<i64> {
    if raw.is_empty() {
        return Err(ValidationError::Required { field: "cost" });
    }

    let cents: i64 = raw.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "cost",
        reason: format!("'{}' is not a whole number of cents", raw),
    })?;

    validate_cost_cents(cents)?;
    Ok(cents)
}

/// Validates a cost in cents. Free items are not allowed.
pub fn validate_cost_cents(cents: i64) -> ValidationResult<()> {
    if cents <= 0 {
        return Err(ValidationError::MustBePositive { field: "cost" });
    }

    Ok(())
}

/// Parses a quantity token from a command line.
///
/// Only checks that the token is an integer; the sign is checked by
/// [`validate_quantity`] so that `add X -1` and `add X abc` take the same
/// rejection path.
pub fn parse_quantity(raw: &str) -> ValidationResult<i64> {
    raw.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "quantity",
        reason: format!("'{}' is not a whole number", raw),
    })
}

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (>= 1)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 1 {
        return Err(ValidationError::MustBePositive { field: "quantity" });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
