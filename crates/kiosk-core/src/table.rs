//! # Table Rendering
//!
//! Fixed-width listings for the menu and the order.
//!
//! ## Column Layout
//! ```text
//! col:  0    5                    26       35              51
//!       ID   Name                 Quantity Category        Cost
//!       A001 Cola                        2 Drinks          $  3.00
//!       Total                                              $  3.00
//!       ─┬── ──────────┬───────── ───┬──── ───────┬─────── ───┬───
//!        │             │             │            │           └─ '$' + 6 wide, 2 decimals
//!        │             │             │            └─ 16 wide, left
//!        │             │             └─ 8 wide, right, then one space (order only)
//!        │             └─ 21 wide, left
//!        └─ 5 wide, left
//! ```
//!
//! Every listing ends with a blank line.

use crate::menu::Menu;
use crate::money::Money;
use crate::order::Order;
use crate::sort::{sorted_menu, sorted_order, MenuOrder};
use crate::types::{MenuItem, OrderItem};

const ID_WIDTH: usize = 5;
const NAME_WIDTH: usize = 21;
const QUANTITY_WIDTH: usize = 8;
const CATEGORY_WIDTH: usize = 16;
const COST_WIDTH: usize = 6;

/// Width of everything left of the cost column on an order row.
const TOTAL_LABEL_WIDTH: usize = ID_WIDTH + NAME_WIDTH + QUANTITY_WIDTH + 1 + CATEGORY_WIDTH;

fn cost_cell(amount: Money) -> String {
    format!("${:>width$}", amount.to_decimal_string(), width = COST_WIDTH)
}

/// Header row for menu listings.
pub fn menu_header() -> String {
    format!(
        "{:<ID_WIDTH$}{:<NAME_WIDTH$}{:<CATEGORY_WIDTH$}Cost",
        "ID", "Name", "Category"
    )
}

/// Header row for order listings.
pub fn order_header() -> String {
    format!(
        "{:<ID_WIDTH$}{:<NAME_WIDTH$}{:<q$}{:<CATEGORY_WIDTH$}Cost",
        "ID",
        "Name",
        "Quantity",
        "Category",
        q = QUANTITY_WIDTH + 1
    )
}

fn menu_row(item: &MenuItem) -> String {
    format!(
        "{:<ID_WIDTH$}{:<NAME_WIDTH$}{:<CATEGORY_WIDTH$}{}",
        item.id(),
        item.name(),
        item.category(),
        cost_cell(item.cost())
    )
}

fn order_row(line: &OrderItem<'_>) -> String {
    format!(
        "{:<ID_WIDTH$}{:<NAME_WIDTH$}{:>QUANTITY_WIDTH$} {:<CATEGORY_WIDTH$}{}",
        line.id(),
        line.item().name(),
        line.quantity(),
        line.item().category(),
        cost_cell(line.line_total())
    )
}

fn total_row(total: Money) -> String {
    format!("{:<TOTAL_LABEL_WIDTH$}{}", "Total", cost_cell(total))
}

/// Renders menu items in the order given.
pub fn render_menu<'a, I>(items: I) -> String
where
    I: IntoIterator<Item = &'a MenuItem>,
{
    let mut out = menu_header();
    out.push('\n');
    for item in items {
        out.push_str(&menu_row(item));
        out.push('\n');
    }
    out.push('\n');
    out
}

/// Renders order lines in the order given, followed by the `Total` row.
pub fn render_order(lines: &[&OrderItem<'_>], total: Money) -> String {
    let mut out = order_header();
    out.push('\n');
    for line in lines {
        out.push_str(&order_row(line));
        out.push('\n');
    }
    out.push_str(&total_row(total));
    out.push_str("\n\n");
    out
}

/// `list menu`: every item, category order.
pub fn menu_listing(menu: &Menu) -> String {
    render_menu(sorted_menu(menu, MenuOrder::Category))
}

/// `list category <name>`: exact category matches, id order.
pub fn category_listing(menu: &Menu, category: &str) -> String {
    render_menu(sorted_menu(menu.in_category(category), MenuOrder::Id))
}

/// `list order`: highest line total first.
pub fn order_listing(order: &Order<'_>) -> String {
    render_order(&sorted_order(order.items()), order.total())
}
