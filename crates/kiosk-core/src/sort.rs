//! # Sort Orders
//!
//! Comparators for listings. Each one is a strict total order: ids are
//! unique, so the id tie-break always decides.
//!
//! String comparison is byte-wise, so `B` sorts before `a`.

use std::cmp::Ordering;

use crate::types::{MenuItem, OrderItem};

/// Comparator over menu items.
pub type MenuComparator = fn(&MenuItem, &MenuItem) -> Ordering;

/// How a menu listing is sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOrder {
    /// Category, then id. Used by `list menu`.
    Category,
    /// Id only. Used by `list category <name>`.
    Id,
}

impl MenuOrder {
    pub fn comparator(self) -> MenuComparator {
        match self {
            MenuOrder::Category => by_category,
            MenuOrder::Id => by_id,
        }
    }
}

/// Category, then id.
pub fn by_category(a: &MenuItem, b: &MenuItem) -> Ordering {
    a.category()
        .cmp(b.category())
        .then_with(|| a.id().cmp(b.id()))
}

/// Id only.
pub fn by_id(a: &MenuItem, b: &MenuItem) -> Ordering {
    a.id().cmp(b.id())
}

/// Highest line total first, then id.
pub fn by_value(a: &OrderItem<'_>, b: &OrderItem<'_>) -> Ordering {
    b.line_total()
        .cmp(&a.line_total())
        .then_with(|| a.id().cmp(b.id()))
}

/// Returns a sorted view over menu items.
pub fn sorted_menu<'a, I>(items: I, order: MenuOrder) -> Vec<&'a MenuItem>
where
    I: IntoIterator<Item = &'a MenuItem>,
{
    let compare = order.comparator();
    let mut view: Vec<&MenuItem> = items.into_iter().collect();
    view.sort_by(|a, b| compare(a, b));
    view
}

/// Returns a view over order lines, highest value first.
pub fn sorted_order<'a, 'm>(items: &'a [OrderItem<'m>]) -> Vec<&'a OrderItem<'m>> {
    let mut view: Vec<&OrderItem<'m>> = items.iter().collect();
    view.sort_by(|a, b| by_value(a, b));
    view
}
