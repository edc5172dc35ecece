use crate::error::BotError;
use std::str::FromStr;

/// Every command the bot understands.
///
/// Routing a verb to its handler is an exhaustive `match` over this enum,
/// see [`crate::Bot::handle_line`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Hello,
    Add,
    Change,
    Phone,
    All,
    /// `close`, `exit`, `quit` or `q`.
    Exit,
}

impl Verb {
    /// Spellings that terminate the session.
    pub const EXIT_WORDS: [&'static str; 4] = ["close", "exit", "quit", "q"];
}

impl FromStr for Verb {
    type Err = BotError;

    /// Case-insensitive; the tokenizer already lowercases, callers from
    /// elsewhere get the same behavior.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let verb = s.trim().to_lowercase();
        match verb.as_str() {
            "hello" => Ok(Verb::Hello),
            "add" => Ok(Verb::Add),
            "change" => Ok(Verb::Change),
            "phone" => Ok(Verb::Phone),
            "all" => Ok(Verb::All),
            v if Self::EXIT_WORDS.contains(&v) => Ok(Verb::Exit),
            _ => Err(BotError::UnknownCommand(verb)),
        }
    }
}
