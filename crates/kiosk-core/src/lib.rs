//! # kiosk-core: Menu & Order Logic for the Kiosk
//!
//! Everything the kiosk decides lives here: which menu records are valid,
//! what an add or remove does to the order, how listings are sorted and laid
//! out, and what a command line means. It never touches a file or a terminal.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Kiosk Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    kiosk (app crate)                            │   │
//! │  │   args ──► config ──► menu file loader ──► session loop        │   │
//! │  │                       (LineReader)         stdin ⇄ stdout       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ &str in, String out                    │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ kiosk-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────────┐  │   │
//! │  │   │   menu   │ │  order   │ │ sort +   │ │ command +        │  │   │
//! │  │   │ MenuItem │ │OrderItem │ │  table   │ │ interpreter      │  │   │
//! │  │   │  parse   │ │ add/rm   │ │ listings │ │ Outcome          │  │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO FILES • NO STDIN/STDOUT • PURE FUNCTIONS                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `MenuItem` and `OrderItem`
//! - [`money`] - integer cents
//! - [`validation`] - field rules
//! - [`menu`] - the menu store and record parser
//! - [`order`] - the order store
//! - [`sort`] - listing comparators
//! - [`table`] - fixed-width rendering
//! - [`command`] - command-line grammar
//! - [`interpreter`] - command execution and transcript rendering
//! - [`error`] - domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use kiosk_core::interpreter::{execute, transcript};
//! use kiosk_core::menu::{parse_record, Menu};
//! use kiosk_core::{Command, Order};
//!
//! let mut menu = Menu::new();
//! menu.insert(parse_record("A001 Drinks 150 Cola").unwrap()).unwrap();
//!
//! let mut order = Order::new();
//! let outcome = execute(&Command::parse("add A001 2"), &menu, &mut order);
//! assert_eq!(transcript("add A001 2", &outcome), "add A001 2\n\n");
//! assert_eq!(order.total().cents(), 300);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod command;
pub mod error;
pub mod interpreter;
pub mod menu;
pub mod money;
pub mod order;
pub mod sort;
pub mod table;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use command::Command;
pub use error::{OrderError, ValidationError};
pub use interpreter::{Outcome, Rejection};
pub use menu::Menu;
pub use money::Money;
pub use order::Order;
pub use types::{MenuItem, OrderItem};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Exact length of a menu item id.
pub const ITEM_ID_LEN: usize = 4;

/// Maximum length of a menu item name.
pub const MAX_NAME_LEN: usize = 20;

/// Maximum length of a category label.
pub const MAX_CATEGORY_LEN: usize = 15;

/// Starting capacity of the menu; it grows as items are loaded.
pub const MENU_INITIAL_CAPACITY: usize = 5;

/// Starting capacity of the order.
pub const ORDER_INITIAL_CAPACITY: usize = 5;
