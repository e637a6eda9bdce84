//! Receipt

use std::io;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    format::{render_receipt_footer, render_receipt_heading, render_receipt_line},
    order::Order,
};

/// Printed above the itemized receipt.
pub const RECEIPT_TITLE: &str = "This is what we are preparing for you.";

/// Errors that can occur when printing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Writing to the output failed.
    #[error("failed to write receipt: {0}")]
    Io(#[from] io::Error),
}

/// Itemized receipt for a finalized order.
#[derive(Debug, Clone, Copy)]
pub struct Receipt<'a> {
    /// Line items in selection order
    order: &'a Order,

    /// Rounded order total
    total: Decimal,
}

impl<'a> Receipt<'a> {
    /// Create a receipt for an order and the total computed when it was
    /// finalized.
    pub fn new(order: &'a Order, total: Decimal) -> Self {
        Self { order, total }
    }

    /// The order being receipted
    pub fn order(&self) -> &'a Order {
        self.order
    }

    /// Total amount to pay
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Prints the receipt.
    ///
    /// # Errors
    ///
    /// Returns an error if the receipt cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        writeln!(out)?;
        writeln!(out, "{RECEIPT_TITLE}")?;
        writeln!(out, "{}", render_receipt_heading())?;

        for item in self.order {
            writeln!(
                out,
                "{}",
                render_receipt_line(item.name(), item.price(), item.quantity())
            )?;
        }

        writeln!(out, "{}", render_receipt_footer(self.total))?;

        out.flush()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;
    use crate::order::LineItem;

    #[test]
    fn accessors_return_values_from_constructor() {
        let order = Order::with_items([LineItem::new("Burger - Beef", Decimal::new(849, 2), 1)]);
        let receipt = Receipt::new(&order, Decimal::new(849, 2));

        assert_eq!(receipt.order().len(), 1);
        assert_eq!(receipt.total(), Decimal::new(849, 2));
    }

    #[test]
    fn writes_itemized_receipt() -> TestResult {
        let order = Order::with_items([
            LineItem::new("Burrito - Chicken", Decimal::new(449, 2), 2),
            LineItem::new("Pizza - Pepperoni", Decimal::new(1099, 2), 1),
        ]);
        let mut out = Vec::new();

        Receipt::new(&order, order.total()).write_to(&mut out)?;

        let expected = "\n\
This is what we are preparing for you.
----------------------------------------------------
Item name                       | Price  | Quantity
--------------------------------|--------|----------
Burrito - Chicken               | $4.49  | 2
Pizza - Pepperoni               | $10.99 | 1
----------------------------------------------------
Total price: $19.97
----------------------------------------------------
";

        assert_eq!(String::from_utf8(out)?, expected);

        Ok(())
    }

    #[test]
    fn empty_order_prints_zero_total() -> TestResult {
        let order = Order::new();
        let mut out = Vec::new();

        Receipt::new(&order, order.total()).write_to(&mut out)?;

        let text = String::from_utf8(out)?;

        assert!(text.contains("--------------------------------|--------|----------\n----"));
        assert!(text.contains("Total price: $0.00\n"));

        Ok(())
    }
}
