//! Line-oriented user-input source.
//!
//! The terminal storefront reads one command per line:
//!
//! ```text
//! category <id>     pick a category tab (all, electronics, fitness, home)
//! search [text]     replace the search query; no text clears it
//! add <product id>  add one unit of a product to the cart
//! help              show the command list
//! quit              leave the storefront
//! ```

use neural_commerce_core::ProductId;
use thiserror::Error;

use crate::store::StoreEvent;

/// Command summary shown by `help` and after an unrecognized command.
pub const HELP: &str = "\
Commands:
  category <id>     all | electronics | fitness | home
  search [text]     filter by name or description (empty clears)
  add <product id>  add a product to the cart
  help              show this list
  quit              leave the storefront";

/// Errors that can occur when parsing an input line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("{0} needs an argument")]
    MissingArgument(&'static str),
    #[error("not a product id: {0}")]
    InvalidProductId(String),
}

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputCommand {
    Event(StoreEvent),
    Help,
    Quit,
}

/// Parse one input line.
///
/// Blank lines parse as [`InputCommand::Help`]. The text after `search` is
/// kept exactly as typed after the single separator, so leading, trailing
/// and whitespace-only queries reach the reducer.
///
/// # Errors
///
/// Returns `InputError` for an unknown command, a missing argument or a
/// product id that is not a number.
pub fn parse_command(line: &str) -> Result<InputCommand, InputError> {
    let line = line.trim_start().trim_end_matches(['\r', '\n']);
    let (command, raw) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = raw.trim();

    match command.to_lowercase().as_str() {
        "" | "help" | "?" => Ok(InputCommand::Help),
        "quit" | "exit" | "q" => Ok(InputCommand::Quit),
        "category" | "cat" => {
            if rest.is_empty() {
                return Err(InputError::MissingArgument("category"));
            }
            Ok(InputCommand::Event(StoreEvent::SelectCategory(
                rest.to_owned(),
            )))
        }
        "search" | "s" => Ok(InputCommand::Event(StoreEvent::QueryChanged(
            raw.to_owned(),
        ))),
        "add" => {
            if rest.is_empty() {
                return Err(InputError::MissingArgument("add"));
            }
            let id = rest
                .parse::<ProductId>()
                .map_err(|_| InputError::InvalidProductId(rest.to_owned()))?;
            Ok(InputCommand::Event(StoreEvent::AddToCart(id)))
        }
        other => Err(InputError::UnknownCommand(other.to_owned())),
    }
}
