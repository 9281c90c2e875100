//! # Command Grammar
//!
//! Turns one line of user input into a [`Command`].
//!
//! ## Grammar
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  word 1    word 2      word 3      Command                             │
//! │  ──────    ──────      ──────      ───────                             │
//! │  list      menu        (none)      ListMenu                            │
//! │  list      category    <name>      ListCategory(name)                  │
//! │  list      order       (any)       ListOrder                           │
//! │  add       <id>        <qty>       Add { id, quantity }                │
//! │  remove    <id>        <qty>       Remove { id, quantity }             │
//! │  quit      (any)       (any)       Quit                                │
//! │  anything else                     Invalid                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Words are whitespace-delimited; only the first three are looked at.
//! A quantity must be an integer here; whether it is >= 1 is decided when
//! the command runs.

use crate::validation::parse_quantity;

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ListMenu,
    ListCategory(String),
    ListOrder,
    Add { id: String, quantity: i64 },
    Remove { id: String, quantity: i64 },
    Quit,
    Invalid,
}

impl Command {
    /// Parses a command line.
    ///
    /// ## Example
    /// ```rust
    /// use kiosk_core::Command;
    ///
    /// assert_eq!(Command::parse("list menu"), Command::ListMenu);
    /// assert_eq!(
    ///     Command::parse("add A001 2"),
    ///     Command::Add { id: "A001".to_string(), quantity: 2 }
    /// );
    /// assert_eq!(Command::parse("list menu please"), Command::Invalid);
    /// ```
    pub fn parse(line: &str) -> Self {
        let mut words = line.split_whitespace();
        let verb = words.next();
        let first = words.next();
        let second = words.next();

        match (verb, first, second) {
            (Some("list"), Some("menu"), None) => Command::ListMenu,
            (Some("list"), Some("category"), name) => {
                Command::ListCategory(name.unwrap_or_default().to_string())
            }
            (Some("list"), Some("order"), _) => Command::ListOrder,
            (Some("add"), Some(id), Some(qty)) => match parse_quantity(qty) {
                Ok(quantity) => Command::Add {
                    id: id.to_string(),
                    quantity,
                },
                Err(_) => Command::Invalid,
            },
            (Some("remove"), Some(id), Some(qty)) => match parse_quantity(qty) {
                Ok(quantity) => Command::Remove {
                    id: id.to_string(),
                    quantity,
                },
                Err(_) => Command::Invalid,
            },
            (Some("quit"), _, _) => Command::Quit,
            _ => Command::Invalid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_commands() {
        assert_eq!(Command::parse("list menu"), Command::ListMenu);
        assert_eq!(Command::parse("  list   menu  "), Command::ListMenu);
        assert_eq!(
            Command::parse("list category Snacks"),
            Command::ListCategory("Snacks".to_string())
        );
        assert_eq!(Command::parse("list order"), Command::ListOrder);
    }

    #[test]
    fn test_list_menu_rejects_extra_word() {
        assert_eq!(Command::parse("list menu Drinks"), Command::Invalid);
    }

    #[test]
    fn test_list_with_unknown_target() {
        assert_eq!(Command::parse("list foo"), Command::Invalid);
        assert_eq!(Command::parse("list"), Command::Invalid);
        assert_eq!(Command::parse("list Menu"), Command::Invalid);
    }

    #[test]
    fn test_list_category_without_name() {
        assert_eq!(
            Command::parse("list category"),
            Command::ListCategory(String::new())
        );
    }

    #[test]
    fn test_add_and_remove() {
        assert_eq!(
            Command::parse("add A001 2"),
            Command::Add {
                id: "A001".to_string(),
                quantity: 2
            }
        );
        assert_eq!(
            Command::parse("remove A001 -1"),
            Command::Remove {
                id: "A001".to_string(),
                quantity: -1
            }
        );
        assert_eq!(
            Command::parse("add A001 0"),
            Command::Add {
                id: "A001".to_string(),
                quantity: 0
            }
        );
    }

    #[test]
    fn test_add_and_remove_need_numeric_quantity() {
        assert_eq!(Command::parse("add A001"), Command::Invalid);
        assert_eq!(Command::parse("add A001 two"), Command::Invalid);
        assert_eq!(Command::parse("remove A001 2x"), Command::Invalid);
        assert_eq!(Command::parse("remove"), Command::Invalid);
    }

    #[test]
    fn test_quit_and_unknown() {
        assert_eq!(Command::parse("quit"), Command::Quit);
        assert_eq!(Command::parse("quit now"), Command::Quit);
        assert_eq!(Command::parse("foo bar"), Command::Invalid);
        assert_eq!(Command::parse("QUIT"), Command::Invalid);
        assert_eq!(Command::parse(""), Command::Invalid);
    }
}
