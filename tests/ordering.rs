//! End-to-end ordering sessions driven through in-memory console buffers.

use std::io::Cursor;

use rust_decimal::Decimal;
use testresult::TestResult;

use takeout::prelude::*;

fn burrito_catalog() -> MenuCatalog {
    MenuCatalog::with_categories([Category::new(
        "Burrito",
        [Meal::new("Chicken", Decimal::new(449, 2))],
    )])
}

fn order_from(catalog: &MenuCatalog, input: &str) -> TestResult<(Order, Decimal, String)> {
    let mut output = Vec::new();

    let (order, total) = place_order(catalog, Cursor::new(input), &mut output)?;

    Ok((order, total, String::from_utf8(output)?))
}

#[test]
fn single_burrito_session_transcript() -> TestResult {
    let catalog = burrito_catalog();
    let (order, total, output) = order_from(&catalog, "1\n2\nn\n")?;

    assert_eq!(
        order.items(),
        [LineItem::new("Burrito - Chicken", Decimal::new(449, 2), 2)]
    );
    assert_eq!(total, Decimal::new(898, 2));

    let expected = "\
Welcome to the Generic Take Out Restaurant.
--------------------------------------------------
Item # | Item name                        | Price
-------|----------------------------------|-------
1      | Burrito - Chicken                | $4.49
Type menu number: \
What quantity of Burrito - Chicken would you like? \
Would you like to keep ordering? (N) to quit: \
Thank you for your order.
";

    assert_eq!(output, expected);

    Ok(())
}

#[test]
fn single_burrito_receipt() -> TestResult {
    let catalog = burrito_catalog();
    let (order, total, _) = order_from(&catalog, "1\n2\nN\n")?;
    let mut out = Vec::new();

    Receipt::new(&order, total).write_to(&mut out)?;

    let expected = "
This is what we are preparing for you.
----------------------------------------------------
Item name                       | Price  | Quantity
--------------------------------|--------|----------
Burrito - Chicken               | $4.49  | 2
----------------------------------------------------
Total price: $8.98
----------------------------------------------------
";

    assert_eq!(String::from_utf8(out)?, expected);

    Ok(())
}

#[test]
fn order_length_counts_only_valid_selections() -> TestResult {
    let catalog = MenuCatalog::house();
    let input = [
        "1", "2", "y", // valid
        "abc", "y", // malformed
        "99", "y", // out of range
        "15", "1", "y", // valid
        "0", "y", // out of range
        "", "y", // malformed
        "5", "x", "n", // valid, default quantity
    ]
    .join("\n");

    let (order, _, _) = order_from(&catalog, &input)?;

    let names: Vec<&str> = order.iter().map(LineItem::name).collect();

    assert_eq!(
        names,
        ["Burrito - Chicken", "Burger - Beef", "Rice Bowl - Sweet and Sour Pork"]
    );

    Ok(())
}

#[test]
fn out_of_range_selection_keeps_looping() -> TestResult {
    let catalog = burrito_catalog();
    let (order, _, output) = order_from(&catalog, "99\ny\n1\n1\nn\n")?;

    assert!(output.contains("99 is not available on the menu. Please try again.\n"));
    assert_eq!(order.len(), 1);

    let (order, total, _) = order_from(&catalog, "99\nn\n")?;

    assert!(order.is_empty());
    assert_eq!(total, Decimal::ZERO);

    Ok(())
}

#[test]
fn non_numeric_selection_warns_and_keeps_looping() -> TestResult {
    let catalog = burrito_catalog();
    let (order, _, output) = order_from(&catalog, "abc\n\n1\n3\nn\n")?;

    assert!(output.contains("Invalid selection. Please select a valid menu item number.\n"));
    assert_eq!(
        order.items(),
        [LineItem::new("Burrito - Chicken", Decimal::new(449, 2), 3)]
    );

    Ok(())
}

#[test]
fn invalid_quantity_defaults_to_one_silently() -> TestResult {
    let catalog = burrito_catalog();
    let (order, _, output) = order_from(&catalog, "1\nabc\nn\n")?;

    assert_eq!(order.items().first().map(LineItem::quantity), Some(1));
    assert!(!output.contains("Invalid"));

    Ok(())
}

#[test]
fn continue_prompt_only_stops_on_n() -> TestResult {
    let catalog = burrito_catalog();

    for stop in ["n", "N"] {
        let (order, _, _) = order_from(&catalog, &format!("1\n1\n{stop}\n1\n1\nn\n"))?;

        assert_eq!(order.len(), 1, "{stop:?} should stop ordering");
    }

    for keep_going in ["No", "", "y", "quit"] {
        let (order, _, _) = order_from(&catalog, &format!("1\n1\n{keep_going}\n1\n1\nn\n"))?;

        assert_eq!(order.len(), 2, "{keep_going:?} should keep ordering");
    }

    Ok(())
}

#[test]
fn total_is_rounded_once_over_many_lines() -> TestResult {
    let catalog = MenuCatalog::house();
    let (order, total, _) = order_from(&catalog, "1\n3\ny\n6\n7\ny\n12\n1\ny\n9\n11\nn\n")?;

    let exact: Decimal = order.iter().map(LineItem::amount).sum();

    assert_eq!(order.len(), 4);
    assert_eq!(exact, Decimal::new(16478, 2));
    assert_eq!(total, exact.round_dp(2));
    assert_eq!(total, Decimal::new(16478, 2));

    Ok(())
}

#[test]
fn fractional_cent_prices_round_at_the_end() -> TestResult {
    let catalog = MenuCatalog::with_categories([Category::new(
        "Candy",
        [
            Meal::new("Gum", Decimal::new(3335, 3)),
            Meal::new("Mint", Decimal::new(3335, 3)),
            Meal::new("Toffee", Decimal::new(3335, 3)),
        ],
    )]);
    let (order, total, output) = order_from(&catalog, "1\n1\ny\n2\n1\ny\n3\n1\nn\n")?;

    let per_line: Decimal = order.iter().map(|item| item.amount().round_dp(2)).sum();

    assert_eq!(total, Decimal::new(1000, 2));
    assert_eq!(per_line, Decimal::new(1002, 2));
    assert!(output.contains("| $3.335"));

    Ok(())
}

#[test]
fn line_item_prices_always_come_from_the_menu() -> TestResult {
    let catalog = MenuCatalog::house();
    let menu = catalog.flatten();
    let (order, _, _) = order_from(&catalog, "4\n2\ny\n11\n1\nn\n")?;

    for (item, number) in order.iter().zip([4, 11]) {
        let entry = menu.get(number);

        assert_eq!(entry.map(IndexedMenuItem::name).as_deref(), Some(item.name()));
        assert_eq!(entry.map(IndexedMenuItem::price), Some(item.price()));
    }

    Ok(())
}
