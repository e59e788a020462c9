//! Line-oriented shop session.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use storefront_core::{NotificationSink, ProductId, ToastDuration};
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::app::App;
use crate::Result;

/// Prompt printed before each command.
pub const PROMPT: &str = "> ";

/// One command typed in the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopCommand {
    /// Show the product list.
    Products,
    /// Show the cart.
    Cart,
    /// Add a product to the cart.
    Add(ProductId),
    /// Remove a product from the cart.
    Remove(ProductId),
    /// Raise a cart item's quantity.
    Increment(ProductId),
    /// Lower a cart item's quantity.
    Decrement(ProductId),
    /// Fetch the catalog again.
    Refresh,
    /// Go to the previous screen.
    Back,
    /// Show help.
    Help,
    /// End the session.
    Quit,
}

impl fmt::Display for ShopCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShopCommand::Products => write!(f, "products"),
            ShopCommand::Cart => write!(f, "cart"),
            ShopCommand::Add(id) => write!(f, "add {id}"),
            ShopCommand::Remove(id) => write!(f, "remove {id}"),
            ShopCommand::Increment(id) => write!(f, "inc {id}"),
            ShopCommand::Decrement(id) => write!(f, "dec {id}"),
            ShopCommand::Refresh => write!(f, "refresh"),
            ShopCommand::Back => write!(f, "back"),
            ShopCommand::Help => write!(f, "help"),
            ShopCommand::Quit => write!(f, "quit"),
        }
    }
}

/// Why a line could not be read as a [`ShopCommand`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCommandError {
    /// Blank line.
    #[error("empty command")]
    Empty,

    /// First word is not a command.
    #[error("unknown command '{0}' (type `help`)")]
    Unknown(String),

    /// Command needs a product id.
    #[error("`{0}` needs a product id")]
    MissingId(String),

    /// Product id is not a number.
    #[error("invalid product id '{0}'")]
    InvalidId(String),

    /// Extra words after the command.
    #[error("unexpected argument '{0}'")]
    Unexpected(String),
}

impl FromStr for ShopCommand {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Err(ParseCommandError::Empty);
        };
        let verb = word.to_ascii_lowercase();

        let command = match verb.as_str() {
            "products" | "p" => ShopCommand::Products,
            "cart" | "c" => ShopCommand::Cart,
            "refresh" | "r" => ShopCommand::Refresh,
            "back" | "b" => ShopCommand::Back,
            "help" | "h" | "?" => ShopCommand::Help,
            "quit" | "q" | "exit" => ShopCommand::Quit,
            "add" | "remove" | "rm" | "inc" | "+" | "dec" | "-" => {
                let raw = words
                    .next()
                    .ok_or_else(|| ParseCommandError::MissingId(verb.clone()))?;
                let id: ProductId = raw
                    .parse()
                    .map_err(|_| ParseCommandError::InvalidId(raw.to_string()))?;
                match verb.as_str() {
                    "add" => ShopCommand::Add(id),
                    "remove" | "rm" => ShopCommand::Remove(id),
                    "inc" | "+" => ShopCommand::Increment(id),
                    _ => ShopCommand::Decrement(id),
                }
            }
            _ => return Err(ParseCommandError::Unknown(word.to_string())),
        };

        match words.next() {
            Some(extra) => Err(ParseCommandError::Unexpected(extra.to_string())),
            None => Ok(command),
        }
    }
}

/// Sink that prints notifications to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl NotificationSink for ConsoleNotifier {
    fn notify(&self, message: &str, _duration: ToastDuration) {
        eprintln!("» {message}");
    }
}

/// Drive `app` from `input` until `quit` or end of input.
pub async fn run_repl<R, W>(app: &mut App, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    write!(out, "{}", app.start().await)?;
    write!(out, "{PROMPT}")?;
    out.flush()?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        match line.parse::<ShopCommand>() {
            Ok(command) => {
                let reply = app.execute(command).await;
                write!(out, "{}", reply.text)?;
                if reply.quit {
                    out.flush()?;
                    return Ok(());
                }
            }
            Err(ParseCommandError::Empty) => {}
            Err(e) => writeln!(out, "{e}")?,
        }
        write!(out, "{PROMPT}")?;
        out.flush()?;
    }

    log::debug!("Input closed, leaving the shop");
    writeln!(out)?;
    Ok(())
}
