//! # Command Interpreter
//!
//! Runs a [`Command`] against the menu and order and renders the result.
//!
//! `execute` only computes an [`Outcome`]; [`transcript`] turns it into text.

use std::fmt;

use crate::command::Command;
use crate::error::{OrderError, OrderResult};
use crate::menu::Menu;
use crate::order::Order;
use crate::table::{category_listing, menu_listing, order_listing};

/// Status line printed for every rejected command.
pub const INVALID_COMMAND: &str = "Invalid command";

/// Why a command was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The line did not match the grammar.
    Unrecognized,
    /// The order refused the add or remove.
    Order(OrderError),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Unrecognized => f.write_str("unrecognized command"),
            Rejection::Order(err) => write!(f, "{}", err),
        }
    }
}

impl From<OrderError> for Rejection {
    fn from(err: OrderError) -> Self {
        Rejection::Order(err)
    }
}

/// The result of running one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A rendered table.
    Listing(String),
    /// An add or remove went through.
    Accepted,
    /// Nothing changed; the user sees `Invalid command`.
    Rejected(Rejection),
    /// Stop reading input.
    Quit,
}

impl Outcome {
    pub fn is_quit(&self) -> bool {
        matches!(self, Outcome::Quit)
    }
}

/// Runs `command`. Only `Add` and `Remove` touch the order.
pub fn execute<'m>(command: &Command, menu: &'m Menu, order: &mut Order<'m>) -> Outcome {
    match command {
        Command::ListMenu => Outcome::Listing(menu_listing(menu)),
        Command::ListCategory(category) => Outcome::Listing(category_listing(menu, category)),
        Command::ListOrder => Outcome::Listing(order_listing(order)),
        Command::Add { id, quantity } => match add_item(menu, order, id, *quantity) {
            Ok(_) => Outcome::Accepted,
            Err(err) => Outcome::Rejected(err.into()),
        },
        Command::Remove { id, quantity } => match order.remove(id, *quantity) {
            Ok(_) => Outcome::Accepted,
            Err(err) => Outcome::Rejected(err.into()),
        },
        Command::Quit => Outcome::Quit,
        Command::Invalid => Outcome::Rejected(Rejection::Unrecognized),
    }
}

/// Existing order lines win over the menu so a repeat add merges.
fn add_item<'m>(menu: &'m Menu, order: &mut Order<'m>, id: &str, quantity: i64) -> OrderResult<i64> {
    let item = match order.find(id) {
        Some(line) => line.item(),
        None => menu
            .find(id)
            .ok_or_else(|| OrderError::NotOnMenu(id.to_string()))?,
    };
    order.add(item, quantity)
}

/// Renders what the user sees for one processed line.
///
/// ## Example
/// ```rust
/// use kiosk_core::interpreter::{transcript, Outcome, Rejection};
///
/// assert_eq!(transcript("add A001 2", &Outcome::Accepted), "add A001 2\n\n");
/// assert_eq!(
///     transcript("foo bar", &Outcome::Rejected(Rejection::Unrecognized)),
///     "foo bar\nInvalid command\n\n"
/// );
/// ```
pub fn transcript(line: &str, outcome: &Outcome) -> String {
    let mut out = String::with_capacity(line.len() + 1);
    out.push_str(line);
    out.push('\n');

    match outcome {
        Outcome::Listing(table) => out.push_str(table),
        Outcome::Accepted => out.push('\n'),
        Outcome::Rejected(_) => {
            out.push_str(INVALID_COMMAND);
            out.push_str("\n\n");
        }
        Outcome::Quit => {}
    }

    out
}
