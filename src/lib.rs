//! Takeout
//!
//! An interactive take-out restaurant ordering simulator: it shows a numbered
//! menu, takes selections and quantities on the console, and prints an
//! itemized receipt with the order total.

pub mod config;
pub mod format;
pub mod input;
pub mod logging;
pub mod menu;
pub mod order;
pub mod prelude;
pub mod receipt;
pub mod session;
