//! Order

use std::slice;

use rust_decimal::Decimal;

use crate::menu::IndexedMenuItem;

/// One ordered entry: an item name, its unit price and a quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    name: String,
    price: Decimal,
    quantity: u32,
}

impl LineItem {
    /// Creates a new line item.
    pub fn new(name: impl Into<String>, price: Decimal, quantity: u32) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
        }
    }

    /// Creates a line item for a menu entry.
    ///
    /// The unit price always comes from the menu, never from the customer.
    pub fn from_menu_item(item: &IndexedMenuItem<'_>, quantity: u32) -> Self {
        Self::new(item.name(), item.price(), quantity)
    }

    /// Item name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Quantity ordered
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unrounded `price × quantity`
    pub fn amount(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Line items in the order they were selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Order {
    items: Vec<LineItem>,
}

impl Order {
    /// Create a new empty order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an order from existing line items.
    pub fn with_items(items: impl Into<Vec<LineItem>>) -> Self {
        Self {
            items: items.into(),
        }
    }

    /// Appends a line item.
    pub fn push(&mut self, item: LineItem) {
        self.items.push(item);
    }

    /// Calculates the order total.
    ///
    /// Line amounts are summed exactly and the sum is rounded once to two
    /// decimal places (half-to-even); individual lines are never rounded.
    pub fn total(&self) -> Decimal {
        self.items
            .iter()
            .map(LineItem::amount)
            .sum::<Decimal>()
            .round_dp(2)
    }

    /// Iterate over the line items in selection order.
    pub fn iter(&self) -> slice::Iter<'_, LineItem> {
        self.items.iter()
    }

    /// Line items in selection order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get the number of line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the order is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a Order {
    type Item = &'a LineItem;
    type IntoIter = slice::Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
