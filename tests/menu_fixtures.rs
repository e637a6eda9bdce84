//! Loading the sample menus shipped in `fixtures/menus`.

use std::{fs, io::Cursor, path::PathBuf};

use rust_decimal::Decimal;
use testresult::TestResult;

use takeout::prelude::*;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("menus")
        .join(format!("{name}.yml"))
}

#[test]
fn house_fixture_matches_built_in_menu() -> TestResult {
    let catalog = load_menu(fixture_path("house"))?;

    assert_eq!(catalog, MenuCatalog::house());

    Ok(())
}

#[test]
fn cafe_fixture_renders_aligned_menu() -> TestResult {
    let catalog = load_menu(fixture_path("cafe"))?;
    let mut output = Vec::new();

    let (order, total) = place_order(&catalog, Cursor::new("10\n2\nn\n"), &mut output)?;
    let output = String::from_utf8(output)?;

    assert!(output.starts_with("Welcome to the Corner Café.\n"));
    assert!(output.contains("\n1      | Coffee - Espresso                | $2.5\n"));
    assert!(output.contains("\n10     | Pastries - Scone                 | $2.20\n"));
    assert!(output.contains("| Breakfast - Crêpe                | $6\n"));
    assert!(
        output.contains("\n3      | Breakfast - Full English with Extra Black Pudding | $12.00\n")
    );

    assert_eq!(
        order.items(),
        [LineItem::new("Pastries - Scone", Decimal::new(220, 2), 2)]
    );
    assert_eq!(total, Decimal::new(440, 2));

    Ok(())
}

#[test]
fn menu_written_to_disk_round_trips_through_loader() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("tiny.yml");

    fs::write(
        &path,
        "categories:\n  - name: A\n    meals:\n      - name: x\n        price: \"1.00\"\n  - name: B\n    meals:\n      - name: y\n        price: \"2.00\"\n      - name: z\n        price: \"3.00\"\n",
    )?;

    let catalog = load_menu(&path)?;
    let menu = catalog.flatten();
    let entries: Vec<(usize, String)> =
        menu.iter().map(|item| (item.index(), item.name())).collect();

    assert_eq!(
        entries,
        [
            (1, "A - x".to_string()),
            (2, "B - y".to_string()),
            (3, "B - z".to_string()),
        ]
    );

    Ok(())
}

#[test]
fn invalid_fixture_is_rejected() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("broken.yml");

    fs::write(&path, "categories:\n  - name: A\n    meals: []\n")?;

    assert!(matches!(load_menu(&path), Err(MenuError::EmptyCategory(name)) if name == "A"));

    Ok(())
}
