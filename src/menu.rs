//! Menu
//!
//! The static catalog of categories, meals and unit prices, and the numbered
//! index customers select from.

use std::slice;

use rust_decimal::Decimal;

pub mod fixtures;

pub use fixtures::MenuError;

/// Restaurant name used when a menu does not provide one.
pub const DEFAULT_RESTAURANT: &str = "Generic Take Out Restaurant";

/// A single meal and its unit price.
#[derive(Debug, Clone, PartialEq)]
pub struct Meal {
    name: String,
    price: Decimal,
}

impl Meal {
    /// Creates a new meal with the given unit price
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Meal name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price
    pub fn price(&self) -> Decimal {
        self.price
    }
}

/// A named group of meals, kept in the order they were defined.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    name: String,
    meals: Vec<Meal>,
}

impl Category {
    /// Creates a new category from its meals.
    pub fn new(name: impl Into<String>, meals: impl Into<Vec<Meal>>) -> Self {
        Self {
            name: name.into(),
            meals: meals.into(),
        }
    }

    /// Category name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Meals in definition order
    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }
}

/// Ordered mapping of category -> meal -> unit price.
///
/// A catalog is immutable once built; the order loop only ever reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuCatalog {
    restaurant: String,
    categories: Vec<Category>,
}

impl MenuCatalog {
    /// Creates a catalog for the named restaurant.
    pub fn new(restaurant: impl Into<String>, categories: impl Into<Vec<Category>>) -> Self {
        Self {
            restaurant: restaurant.into(),
            categories: categories.into(),
        }
    }

    /// Creates a catalog under the default restaurant name.
    pub fn with_categories(categories: impl Into<Vec<Category>>) -> Self {
        Self::new(DEFAULT_RESTAURANT, categories)
    }

    /// The built-in house menu.
    pub fn house() -> Self {
        let category = |name: &str, meals: &[(&str, i64)]| {
            Category::new(
                name,
                meals
                    .iter()
                    .map(|&(meal, cents)| Meal::new(meal, Decimal::new(cents, 2)))
                    .collect::<Vec<_>>(),
            )
        };

        Self::with_categories([
            category(
                "Burrito",
                &[("Chicken", 449), ("Beef", 549), ("Vegetarian", 399)],
            ),
            category(
                "Rice Bowl",
                &[("Teriyaki Chicken", 999), ("Sweet and Sour Pork", 899)],
            ),
            category(
                "Sushi",
                &[("California Roll", 749), ("Spicy Tuna Roll", 849)],
            ),
            category(
                "Noodles",
                &[("Pad Thai", 699), ("Lo Mein", 799), ("Mee Goreng", 899)],
            ),
            category(
                "Pizza",
                &[("Cheese", 899), ("Pepperoni", 1099), ("Vegetarian", 999)],
            ),
            category("Burger", &[("Chicken", 749), ("Beef", 849)]),
        ])
    }

    /// Name shown in the greeting.
    pub fn restaurant(&self) -> &str {
        &self.restaurant
    }

    /// Categories in definition order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Whether the catalog has no meals at all.
    pub fn is_empty(&self) -> bool {
        self.categories.iter().all(|category| category.meals.is_empty())
    }

    /// Flattens the catalog into a numbered index.
    ///
    /// Categories are walked in order, then meals within each category, and
    /// numbered from 1 with no gaps.
    pub fn flatten(&self) -> MenuIndex<'_> {
        let items = self
            .categories
            .iter()
            .flat_map(|category| {
                category
                    .meals
                    .iter()
                    .map(move |meal| (category.name.as_str(), meal))
            })
            .enumerate()
            .map(|(i, (category, meal))| IndexedMenuItem {
                index: i + 1,
                category,
                meal: &meal.name,
                price: meal.price,
            })
            .collect();

        MenuIndex { items }
    }
}

/// One numbered entry of a flattened catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexedMenuItem<'a> {
    index: usize,
    category: &'a str,
    meal: &'a str,
    price: Decimal,
}

impl<'a> IndexedMenuItem<'a> {
    /// 1-based menu number
    pub fn index(&self) -> usize {
        self.index
    }

    /// Category name
    pub fn category(&self) -> &'a str {
        self.category
    }

    /// Meal name
    pub fn meal(&self) -> &'a str {
        self.meal
    }

    /// Display name, `"category - meal"`
    pub fn name(&self) -> String {
        format!("{} - {}", self.category, self.meal)
    }

    /// Unit price
    pub fn price(&self) -> Decimal {
        self.price
    }
}

/// The numbered menu, built once per run.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuIndex<'a> {
    items: Vec<IndexedMenuItem<'a>>,
}

impl<'a> MenuIndex<'a> {
    /// Looks up an item by its 1-based menu number.
    pub fn get(&self, number: u64) -> Option<&IndexedMenuItem<'a>> {
        let position = usize::try_from(number).ok()?.checked_sub(1)?;

        self.items.get(position)
    }

    /// Iterate over the items in menu order.
    pub fn iter(&self) -> slice::Iter<'_, IndexedMenuItem<'a>> {
        self.items.iter()
    }

    /// Number of items on the menu
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the menu has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a, 'b> IntoIterator for &'b MenuIndex<'a> {
    type Item = &'b IndexedMenuItem<'a>;
    type IntoIter = slice::Iter<'b, IndexedMenuItem<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
