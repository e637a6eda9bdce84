//! Format
//!
//! Fixed-width text rendering for the menu and the receipt. Every function is
//! pure and returns its lines without a trailing newline.

use rust_decimal::Decimal;

/// Width of the item name column on the menu and the receipt.
pub const NAME_WIDTH: usize = 32;

/// Width of the price text on a receipt line, excluding the `$`.
pub const PRICE_WIDTH: usize = 6;

const MENU_SEPARATOR: &str = " - ";

const MENU_RULE: &str = "--------------------------------------------------";
const RECEIPT_RULE: &str = "----------------------------------------------------";

/// Spaces needed to pad `text` to `width` characters, never negative.
fn pad(text: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(text.chars().count()))
}

/// The three heading lines printed above the menu.
pub fn render_menu_heading() -> String {
    [
        MENU_RULE,
        "Item # | Item name                        | Price",
        "-------|----------------------------------|-------",
    ]
    .join("\n")
}

/// One numbered menu line.
///
/// The index column lines up single and double digit numbers, and the name
/// column is padded to [`NAME_WIDTH`] including the `" - "` separator.
pub fn render_menu_line(index: usize, category: &str, meal: &str, price: Decimal) -> String {
    let index_spaces = if index >= 10 { 5 } else { 6 };
    let name_width = NAME_WIDTH.saturating_sub(MENU_SEPARATOR.len());
    let item_spaces = " ".repeat(
        name_width.saturating_sub(category.chars().count() + meal.chars().count()),
    );

    format!(
        "{index}{}| {category}{MENU_SEPARATOR}{meal}{item_spaces} | ${price}",
        " ".repeat(index_spaces)
    )
}

/// The column heading printed above the receipt lines.
pub fn render_receipt_heading() -> String {
    [
        RECEIPT_RULE,
        "Item name                       | Price  | Quantity",
        "--------------------------------|--------|----------",
    ]
    .join("\n")
}

/// One receipt line: name, unit price and quantity.
pub fn render_receipt_line(name: &str, price: Decimal, quantity: u32) -> String {
    let price = price.to_string();

    format!(
        "{name}{}| ${price}{}| {quantity}",
        pad(name, NAME_WIDTH),
        pad(&price, PRICE_WIDTH)
    )
}

/// The footer with the order total to two decimal places.
pub fn render_receipt_footer(total: Decimal) -> String {
    format!("{RECEIPT_RULE}\nTotal price: ${total:.2}\n{RECEIPT_RULE}")
}
