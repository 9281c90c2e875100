//! # Domain Types
//!
//! A [`MenuItem`] is owned by the menu for the whole run. An [`OrderItem`]
//! borrows it, so an order can never outlive the menu it was taken from.

use crate::money::Money;
use crate::validation::{
    validate_category, validate_cost_cents, validate_item_id, validate_item_name,
    ValidationResult,
};

// =============================================================================
// Menu Item
// =============================================================================

/// A purchasable catalog entry.
///
/// Fields are private so that every `MenuItem` in existence has passed
/// [`MenuItem::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    id: String,
    name: String,
    category: String,
    cost: Money,
}

impl MenuItem {
    /// Creates a validated menu item.
    ///
    /// ## Example
    /// ```rust
    /// use kiosk_core::MenuItem;
    ///
    /// let cola = MenuItem::new("A001", "Cola", "Drinks", 150).unwrap();
    /// assert_eq!(cola.cost().to_decimal_string(), "1.50");
    ///
    /// assert!(MenuItem::new("A1", "Cola", "Drinks", 150).is_err());
    /// assert!(MenuItem::new("A001", "Cola", "Drinks", 0).is_err());
    /// ```
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        cost_cents: i64,
    ) -> ValidationResult<Self> {
        let id = id.into();
        let name = name.into();
        let category = category.into();

        validate_item_id(&id)?;
        validate_category(&category)?;
        validate_cost_cents(cost_cents)?;
        validate_item_name(&name)?;

        Ok(MenuItem {
            id,
            name,
            category,
            cost: Money::from_cents(cost_cents),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Unit cost in cents.
    pub fn cost(&self) -> Money {
        self.cost
    }

    /// Exact, case-sensitive category match.
    ///
    /// `Drink` does not match `Drinks`, and neither does `drinks`.
    pub fn in_category(&self, category: &str) -> bool {
        self.category == category
    }
}

// =============================================================================
// Order Item
// =============================================================================

/// A quantity of one menu item in the current order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderItem<'m> {
    item: &'m MenuItem,
    quantity: i64,
}

impl<'m> OrderItem<'m> {
    pub(crate) fn new(item: &'m MenuItem, quantity: i64) -> Self {
        OrderItem { item, quantity }
    }

    /// The referenced menu item.
    pub fn item(&self) -> &'m MenuItem {
        self.item
    }

    pub fn id(&self) -> &'m str {
        self.item.id()
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub(crate) fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }

    /// Calculates the line total (unit cost × quantity).
    pub fn line_total(&self) -> Money {
        self.item.cost().multiply_quantity(self.quantity)
    }
}
