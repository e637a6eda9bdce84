//! Takeout prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    input::InputError,
    menu::{
        Category, IndexedMenuItem, Meal, MenuCatalog, MenuError, MenuIndex,
        fixtures::{load_menu, parse_menu},
    },
    order::{LineItem, Order},
    receipt::{Receipt, ReceiptError},
    session::{SelectionError, SessionError, place_order},
};
