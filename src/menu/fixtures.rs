//! Menu Fixtures
//!
//! Loads a [`MenuCatalog`] from YAML. Categories and meals are sequences so the
//! file order is the menu order:
//!
//! ```yaml
//! restaurant: Generic Take Out Restaurant
//! categories:
//!   - name: Burrito
//!     meals:
//!       - name: Chicken
//!         price: "4.49"
//! ```

use std::{fs, path::Path};

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::menu::{Category, DEFAULT_RESTAURANT, Meal, MenuCatalog};

/// Menu Loading Errors
#[derive(Debug, Error)]
pub enum MenuError {
    /// IO error reading the menu file
    #[error("Failed to read menu file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Price below zero
    #[error("Price of {meal} must not be negative, got {price}")]
    NegativePrice {
        /// Meal the price belongs to
        meal: String,
        /// Offending price
        price: Decimal,
    },

    /// Category defined more than once
    #[error("Duplicate category: {0}")]
    DuplicateCategory(String),

    /// Meal defined more than once within a category
    #[error("Duplicate meal in {category}: {meal}")]
    DuplicateMeal {
        /// Category name
        category: String,
        /// Meal name
        meal: String,
    },

    /// Category without any meals
    #[error("Category has no meals: {0}")]
    EmptyCategory(String),

    /// Menu without any categories
    #[error("Menu has no categories")]
    Empty,
}

/// Wrapper for a menu in YAML
#[derive(Debug, Deserialize)]
pub struct MenuFixture {
    /// Restaurant name shown in the greeting
    #[serde(default)]
    pub restaurant: Option<String>,

    /// Categories in menu order
    pub categories: Vec<CategoryFixture>,
}

/// Category Fixture
#[derive(Debug, Deserialize)]
pub struct CategoryFixture {
    /// Category name
    pub name: String,

    /// Meals in menu order
    pub meals: Vec<MealFixture>,
}

/// Meal Fixture
#[derive(Debug, Deserialize)]
pub struct MealFixture {
    /// Meal name
    pub name: String,

    /// Unit price, e.g. `"4.49"` or `4.49`
    pub price: PriceFixture,
}

/// A price as written in YAML.
///
/// Quoted prices keep their trailing zeros (`"10.00"`); bare numbers go through
/// their shortest decimal form (`10.00` becomes `10`).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PriceFixture {
    /// Quoted price
    Text(String),

    /// Bare YAML number
    Number(f64),
}

impl TryFrom<MenuFixture> for MenuCatalog {
    type Error = MenuError;

    fn try_from(fixture: MenuFixture) -> Result<Self, Self::Error> {
        if fixture.categories.is_empty() {
            return Err(MenuError::Empty);
        }

        let mut categories: Vec<Category> = Vec::with_capacity(fixture.categories.len());

        for category_fixture in fixture.categories {
            if categories
                .iter()
                .any(|category| category.name() == category_fixture.name)
            {
                return Err(MenuError::DuplicateCategory(category_fixture.name));
            }

            if category_fixture.meals.is_empty() {
                return Err(MenuError::EmptyCategory(category_fixture.name));
            }

            let mut meals: Vec<Meal> = Vec::with_capacity(category_fixture.meals.len());

            for meal_fixture in category_fixture.meals {
                if meals.iter().any(|meal| meal.name() == meal_fixture.name) {
                    return Err(MenuError::DuplicateMeal {
                        category: category_fixture.name,
                        meal: meal_fixture.name,
                    });
                }

                let price = parse_price(&meal_fixture.price)?;

                if price.is_sign_negative() && !price.is_zero() {
                    return Err(MenuError::NegativePrice {
                        meal: meal_fixture.name,
                        price,
                    });
                }

                meals.push(Meal::new(meal_fixture.name, price));
            }

            categories.push(Category::new(category_fixture.name, meals));
        }

        let restaurant = fixture
            .restaurant
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_RESTAURANT.to_string());

        Ok(MenuCatalog::new(restaurant, categories))
    }
}

/// Parse a YAML price into a decimal with at most two decimal places
///
/// # Errors
///
/// Returns [`MenuError::InvalidPrice`] if the value is not a finite decimal
/// number or carries more than two significant decimal places.
pub fn parse_price(price: &PriceFixture) -> Result<Decimal, MenuError> {
    let text = match price {
        PriceFixture::Text(text) => text.trim().to_string(),
        PriceFixture::Number(number) => number.to_string(),
    };

    let amount = text
        .parse::<Decimal>()
        .map_err(|_err| MenuError::InvalidPrice(text.clone()))?;

    if amount.normalize().scale() > 2 {
        return Err(MenuError::InvalidPrice(text));
    }

    Ok(amount)
}

/// Parse a menu from YAML text
///
/// # Errors
///
/// Returns an error if the YAML is malformed or the menu fails validation.
pub fn parse_menu(contents: &str) -> Result<MenuCatalog, MenuError> {
    let fixture: MenuFixture = serde_norway::from_str(contents)?;

    fixture.try_into()
}

/// Load a menu from a YAML file
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or fails validation.
pub fn load_menu(path: impl AsRef<Path>) -> Result<MenuCatalog, MenuError> {
    let contents = fs::read_to_string(path)?;

    parse_menu(&contents)
}
