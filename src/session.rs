//! Session
//!
//! The interactive order loop. It shows the menu, then repeatedly asks for a
//! menu number, a quantity and whether to keep ordering, until the customer
//! answers "n" or input runs out.
//!
//! Malformed input is never an error here: it is answered with a message and
//! the loop carries on. Only console I/O failures end a session early.

use std::io::{self, BufRead, Write};

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    format::{render_menu_heading, render_menu_line},
    input::{InputError, parse_number, parse_quantity, strip_line_ending, wants_to_stop},
    menu::{IndexedMenuItem, MenuCatalog, MenuIndex},
    order::{LineItem, Order},
};

/// Prompt for a menu number.
pub const SELECTION_PROMPT: &str = "Type menu number: ";

/// Prompt asking whether to keep ordering.
pub const CONTINUE_PROMPT: &str = "Would you like to keep ordering? (N) to quit: ";

/// Printed once the customer stops ordering.
pub const THANK_YOU: &str = "Thank you for your order.";

/// Errors that end a session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading from or writing to the console failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Why a menu selection was not accepted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// The input is not a non-negative integer literal.
    #[error("Invalid selection. Please select a valid menu item number.")]
    InvalidFormat,

    /// The number has no item on the menu.
    #[error("{0} is not available on the menu. Please try again.")]
    OutOfRange(String),
}

/// Resolves raw selection input against the numbered menu.
///
/// # Errors
///
/// - [`SelectionError::InvalidFormat`]: the input is not made of digits.
/// - [`SelectionError::OutOfRange`]: no menu item has that number.
pub fn select<'m, 'a>(
    menu: &'m MenuIndex<'a>,
    input: &str,
) -> Result<&'m IndexedMenuItem<'a>, SelectionError> {
    match parse_number(input) {
        Ok(number) => menu
            .get(number)
            .ok_or_else(|| SelectionError::OutOfRange(number.to_string())),
        Err(InputError::TooLarge(digits)) => Err(SelectionError::OutOfRange(
            digits.trim_start_matches('0').to_string(),
        )),
        Err(InputError::Empty | InputError::NotANumber(_)) => Err(SelectionError::InvalidFormat),
    }
}

/// Where the loop is within one selection round.
#[derive(Debug, Clone, Copy)]
enum State<'a> {
    AwaitingSelection,
    AwaitingQuantity(IndexedMenuItem<'a>),
    AwaitingContinue,
    Done,
}

/// Line-oriented console over any reader and writer.
#[derive(Debug)]
struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Writes a line of output.
    fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Writes a prompt and reads the reply, or `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut bytes = Vec::new();

        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            // Keep the transcript tidy when input ends mid-prompt.
            writeln!(self.output)?;
            return Ok(None);
        }

        // Undecodable bytes become U+FFFD and are rejected like any other typo.
        let line = String::from_utf8_lossy(&bytes);

        Ok(Some(strip_line_ending(&line).to_string()))
    }
}

/// Writes the greeting, the heading and one line per menu item.
fn show_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    restaurant: &str,
    menu: &MenuIndex<'_>,
) -> io::Result<()> {
    console.say(&format!("Welcome to the {restaurant}."))?;
    console.say(&render_menu_heading())?;

    for item in menu {
        console.say(&render_menu_line(
            item.index(),
            item.category(),
            item.meal(),
            item.price(),
        ))?;
    }

    Ok(())
}

/// Runs the interactive order loop and returns the finalized order with its
/// total.
///
/// The catalog is flattened once; every line item's price is taken from it.
/// End of input at any prompt ends the session as if the customer had
/// answered "n", keeping the items already ordered.
///
/// # Errors
///
/// Returns a [`SessionError`] if reading input or writing output fails.
pub fn place_order(
    catalog: &MenuCatalog,
    input: impl BufRead,
    output: impl Write,
) -> Result<(Order, Decimal), SessionError> {
    let mut console = Console { input, output };
    let menu = catalog.flatten();
    let mut order = Order::new();

    debug!(items = menu.len(), "flattened menu");

    show_menu(&mut console, catalog.restaurant(), &menu)?;

    let mut state = State::AwaitingSelection;

    loop {
        state = match state {
            State::AwaitingSelection => match console.prompt(SELECTION_PROMPT)? {
                None => State::Done,
                Some(line) => match select(&menu, &line) {
                    Ok(item) => State::AwaitingQuantity(*item),
                    Err(rejection) => {
                        debug!(input = %line, %rejection, "rejected selection");
                        console.say(&rejection.to_string())?;

                        State::AwaitingContinue
                    }
                },
            },
            State::AwaitingQuantity(item) => {
                let question = format!("What quantity of {} would you like? ", item.name());

                match console.prompt(&question)? {
                    None => State::Done,
                    Some(line) => {
                        let line_item = LineItem::from_menu_item(&item, parse_quantity(&line));

                        info!(
                            item = line_item.name(),
                            quantity = line_item.quantity(),
                            "added line item"
                        );

                        order.push(line_item);

                        State::AwaitingContinue
                    }
                }
            }
            State::AwaitingContinue => match console.prompt(CONTINUE_PROMPT)? {
                Some(line) if !wants_to_stop(&line) => State::AwaitingSelection,
                _ => State::Done,
            },
            State::Done => break,
        };
    }

    console.say(THANK_YOU)?;

    let total = order.total();

    info!(lines = order.len(), %total, "order finalized");

    Ok((order, total))
}
