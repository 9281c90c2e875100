//! # Order Store
//!
//! The customer's order: menu item references with quantities.
//!
//! ## Order Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Operations                                     │
//! │                                                                         │
//! │  Command            Operation               State Change                │
//! │  ───────            ─────────               ────────────                │
//! │                                                                         │
//! │  add A001 2 ──────► add(item, 2) ─────────► items.push / qty += 2       │
//! │                                                                         │
//! │  remove A001 1 ───► remove("A001", 1) ────► qty -= 1                    │
//! │                                                                         │
//! │  remove A001 n ───► remove("A001", n) ────► items.remove(i)  (n == qty) │
//! │                                                                         │
//! │  list order ──────► sorted view ──────────► (read only)                 │
//! │                                                                         │
//! │  NOTE: every rejected operation leaves the order untouched.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{OrderError, OrderResult};
use crate::money::Money;
use crate::types::{MenuItem, OrderItem};
use crate::validation::validate_quantity;
use crate::ORDER_INITIAL_CAPACITY;

/// What a successful [`Order::remove`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// The quantity went down and the line stays.
    Decremented { remaining: i64 },
    /// The whole line was removed.
    Deleted,
}

/// The current order.
///
/// ## Invariants
/// - At most one item per menu item id (adding again merges)
/// - Every quantity is >= 1 (reaching zero deletes the item)
/// - Deleting an item keeps the others in their relative order
#[derive(Debug, Clone)]
pub struct Order<'m> {
    items: Vec<OrderItem<'m>>,
}

impl<'m> Order<'m> {
    /// Creates an empty order.
    pub fn new() -> Self {
        Order {
            items: Vec::with_capacity(ORDER_INITIAL_CAPACITY),
        }
    }

    /// Adds a menu item or increases its quantity if already present.
    ///
    /// ## Returns
    /// The quantity now held for this item.
    pub fn add(&mut self, item: &'m MenuItem, quantity: i64) -> OrderResult<i64> {
        validate_quantity(quantity).map_err(|_| OrderError::InvalidQuantity(quantity))?;

        if let Some(line) = self.items.iter_mut().find(|l| l.id() == item.id()) {
            let merged = line
                .quantity()
                .checked_add(quantity)
                .ok_or(OrderError::InvalidQuantity(quantity))?;
            line.set_quantity(merged);
            return Ok(merged);
        }

        self.items.push(OrderItem::new(item, quantity));
        Ok(quantity)
    }

    /// Removes `quantity` of the item with this id.
    pub fn remove(&mut self, id: &str, quantity: i64) -> OrderResult<Removal> {
        let index = self
            .items
            .iter()
            .position(|l| l.id() == id)
            .ok_or_else(|| OrderError::NotInOrder(id.to_string()))?;

        validate_quantity(quantity).map_err(|_| OrderError::InvalidQuantity(quantity))?;

        let held = self.items[index].quantity();
        if quantity > held {
            return Err(OrderError::ExceedsHolding {
                id: id.to_string(),
                held,
                requested: quantity,
            });
        }

        if quantity == held {
            self.items.remove(index);
            return Ok(Removal::Deleted);
        }

        let remaining = held - quantity;
        self.items[index].set_quantity(remaining);
        Ok(Removal::Decremented { remaining })
    }

    /// Looks up the order line for an item id.
    pub fn find(&self, id: &str) -> Option<&OrderItem<'m>> {
        self.items.iter().find(|l| l.id() == id)
    }

    /// Order lines in insertion order.
    pub fn items(&self) -> &[OrderItem<'m>] {
        &self.items
    }

    /// Sum of all line totals.
    pub fn total(&self) -> Money {
        self.items.iter().map(OrderItem::line_total).sum()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Order<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, cost: i64) -> MenuItem {
        MenuItem::new(id, format!("Item {}", id), "Misc", cost).unwrap()
    }

    #[test]
    fn test_add_same_item_merges() {
        let x = item("X001", 100);
        let mut order = Order::new();

        assert_eq!(order.add(&x, 2), Ok(2));
        assert_eq!(order.add(&x, 3), Ok(5));

        assert_eq!(order.len(), 1);
        assert_eq!(order.find("X001").unwrap().quantity(), 5);
    }

    #[test]
    fn test_add_rejects_non_positive_quantity() {
        let x = item("X001", 100);
        let mut order = Order::new();

        assert_eq!(order.add(&x, 0), Err(OrderError::InvalidQuantity(0)));
        assert_eq!(order.add(&x, -1), Err(OrderError::InvalidQuantity(-1)));
        assert!(order.is_empty());

        order.add(&x, 1).unwrap();
        assert!(order.add(&x, 0).is_err());
        assert_eq!(order.find("X001").unwrap().quantity(), 1);
    }

    #[test]
    fn test_add_rejects_overflow() {
        let x = item("X001", 1);
        let mut order = Order::new();
        order.add(&x, i64::MAX).unwrap();

        assert!(order.add(&x, 1).is_err());
        assert_eq!(order.find("X001").unwrap().quantity(), i64::MAX);
    }

    #[test]
    fn test_remove_exact_quantity_deletes() {
        let x = item("X001", 100);
        let mut order = Order::new();
        order.add(&x, 5).unwrap();

        assert_eq!(order.remove("X001", 5), Ok(Removal::Deleted));
        assert!(order.find("X001").is_none());
        assert!(order.is_empty());
    }

    #[test]
    fn test_remove_partial_quantity_decrements() {
        let x = item("X001", 100);
        let mut order = Order::new();
        order.add(&x, 5).unwrap();

        assert_eq!(
            order.remove("X001", 3),
            Ok(Removal::Decremented { remaining: 2 })
        );
        assert_eq!(order.find("X001").unwrap().quantity(), 2);
    }

    #[test]
    fn test_remove_more_than_held_is_rejected() {
        let x = item("X001", 100);
        let mut order = Order::new();
        order.add(&x, 5).unwrap();

        assert_eq!(
            order.remove("X001", 6),
            Err(OrderError::ExceedsHolding {
                id: "X001".to_string(),
                held: 5,
                requested: 6,
            })
        );
        assert_eq!(order.find("X001").unwrap().quantity(), 5);
    }

    #[test]
    fn test_remove_rejects_unknown_and_non_positive() {
        let x = item("X001", 100);
        let mut order = Order::new();
        order.add(&x, 5).unwrap();

        assert_eq!(
            order.remove("Y001", 1),
            Err(OrderError::NotInOrder("Y001".to_string()))
        );
        assert!(order.remove("X001", 0).is_err());
        assert!(order.remove("X001", -2).is_err());
        assert_eq!(order.find("X001").unwrap().quantity(), 5);
    }

    #[test]
    fn test_remove_preserves_relative_order() {
        let items: Vec<MenuItem> = (1..=7).map(|i| item(&format!("X{:03}", i), 100)).collect();
        let mut order = Order::new();
        for it in &items {
            order.add(it, 1).unwrap();
        }

        order.remove("X003", 1).unwrap();

        let ids: Vec<&str> = order.items().iter().map(|l| l.id()).collect();
        assert_eq!(ids, vec!["X001", "X002", "X004", "X005", "X006", "X007"]);
    }

    #[test]
    fn test_total() {
        let a = item("A001", 150);
        let b = item("B001", 275);
        let mut order = Order::new();
        assert_eq!(order.total(), Money::zero());

        order.add(&a, 2).unwrap();
        order.add(&b, 1).unwrap();
        assert_eq!(order.total().cents(), 575);
    }
}
