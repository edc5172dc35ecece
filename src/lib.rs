//! A small interactive assistant that keeps a phone book in memory.
//!
//! Each input line is split into a verb and arguments, routed to a handler
//! that works on the [`ContactStore`], and answered with exactly one
//! response. [`Bot`] owns the store and the session state; it can be driven
//! from any reader with [`Bot::run`] or from a terminal with [`Bot::repl`].
//!
//! The crate also ships the companion file utilities used by the extra
//! binaries: a colored directory tree printer ([`tree`]) and parsers for
//! cat and salary record files ([`records`]).

mod bot;
pub mod error;
mod handler;
pub mod lexer;
pub mod logger;
pub mod records;
pub mod store;
pub mod tree;
pub mod verb;

pub use bot::{Bot, BotConfig, FAREWELL, SessionState, WELCOME};
pub use error::{BotError, DataError};
pub use store::ContactStore;
