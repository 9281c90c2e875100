//! # Menu Store
//!
//! The catalog of menu items, plus the parser for one menu-file record.
//!
//! ## Record Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  A001   Drinks   150   Diet Cola                                        │
//! │  ────   ──────   ───   ─────────────────────                            │
//! │   id   category  cost  name (rest of line, leading spaces skipped)      │
//! │                                                                         │
//! │  id        whitespace-delimited, exactly 4 characters                   │
//! │  category  whitespace-delimited, 0..=15 characters                      │
//! │  cost      whitespace-delimited, positive integer cents                 │
//! │  name      1..=20 characters, may contain spaces                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Opening and reading files is the app crate's job; this module only sees
//! `&str`.

use crate::error::ValidationError;
use crate::types::MenuItem;
use crate::validation::{
    parse_cost_cents, validate_category, validate_item_id, ValidationResult,
};
use crate::MENU_INITIAL_CAPACITY;

// =============================================================================
// Record Parsing
// =============================================================================

/// Splits off the next whitespace-delimited field.
///
/// Returns the field and everything after it. The remainder keeps its
/// leading delimiter.
fn next_field(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    let end = s.find(char::is_whitespace).unwrap_or(s.len());
    s.split_at(end)
}

/// Returns true for lines the loader skips instead of parsing.
///
/// Only a truly empty line is skipped; a line holding nothing but
/// whitespace has no id and fails in [`parse_record`].
pub fn is_blank_record(line: &str) -> bool {
    line.is_empty()
}

/// Parses one menu-file line into a validated [`MenuItem`].
///
/// ## Example
/// ```rust
/// use kiosk_core::menu::parse_record;
///
/// let item = parse_record("A001 Drinks 150 Diet Cola").unwrap();
/// assert_eq!(item.name(), "Diet Cola");
/// assert_eq!(item.cost().cents(), 150);
///
/// assert!(parse_record("A001 Drinks free Cola").is_err());
/// ```
pub fn parse_record(line: &str) -> ValidationResult<MenuItem> {
    let (id, rest) = next_field(line);
    validate_item_id(id)?;

    let (category, rest) = next_field(rest);
    validate_category(category)?;

    let (cost, rest) = next_field(rest);
    let cost_cents = parse_cost_cents(cost)?;

    let name = rest.trim_start_matches(' ');

    MenuItem::new(id, name, category, cost_cents)
}

// =============================================================================
// Menu
// =============================================================================

/// All menu items loaded at startup.
///
/// ## Invariants
/// - Item ids are unique
/// - Items keep load order; listings sort a view, never the menu itself
#[derive(Debug, Clone)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    /// Creates an empty menu.
    pub fn new() -> Self {
        Menu {
            items: Vec::with_capacity(MENU_INITIAL_CAPACITY),
        }
    }

    /// Appends an item, rejecting an id that is already on the menu.
    pub fn insert(&mut self, item: MenuItem) -> ValidationResult<()> {
        if self.find(item.id()).is_some() {
            return Err(ValidationError::Duplicate {
                field: "id",
                value: item.id().to_string(),
            });
        }

        self.items.push(item);
        Ok(())
    }

    /// Looks up an item by id.
    pub fn find(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Items whose category equals `category` exactly.
    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a MenuItem> {
        self.items.iter().filter(move |item| item.in_category(category))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MenuItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Menu {
    type Item = &'a MenuItem;
    type IntoIter = std::slice::Iter<'a, MenuItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
