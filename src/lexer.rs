//! Splits a raw input line into a command verb and its positional arguments.

use crate::error::BotError;

/// A tokenized input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    /// First token, trimmed and lowercased.
    pub verb: String,
    /// Remaining tokens, kept exactly as typed.
    pub args: Vec<String>,
}

impl ParsedInput {
    /// Borrowed view of the arguments, the shape handlers are parsed from.
    pub fn args_ref(&self) -> Vec<&str> {
        self.args.iter().map(String::as_str).collect()
    }
}

/// Tokenize `line` on whitespace.
///
/// Returns [`BotError::EmptyInput`] when the line holds no tokens at all.
pub fn parse_input(line: &str) -> Result<ParsedInput, BotError> {
    let mut tokens = line.split_whitespace();
    let verb = tokens.next().ok_or(BotError::EmptyInput)?;
    Ok(ParsedInput {
        verb: verb.trim().to_lowercase(),
        args: tokens.map(str::to_string).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verb_is_lowercased_args_untouched() {
        let parsed = parse_input("  ADD John 123456 ").unwrap();
        assert_eq!(parsed.verb, "add");
        assert_eq!(parsed.args, vec!["John", "123456"]);
    }

    #[test]
    fn test_args_keep_their_case() {
        let parsed = parse_input("Phone McDonald").unwrap();
        assert_eq!(parsed.verb, "phone");
        assert_eq!(parsed.args_ref(), vec!["McDonald"]);
    }

    #[test]
    fn test_tabs_and_repeated_spaces_split() {
        let parsed = parse_input("change\tBob    555").unwrap();
        assert_eq!(parsed.verb, "change");
        assert_eq!(parsed.args, vec!["Bob", "555"]);
    }

    #[test]
    fn test_verb_without_args() {
        let parsed = parse_input("all").unwrap();
        assert_eq!(parsed.verb, "all");
        assert!(parsed.args.is_empty());
    }

    #[test]
    fn test_empty_and_blank_lines_are_rejected() {
        assert!(matches!(parse_input(""), Err(BotError::EmptyInput)));
        assert!(matches!(parse_input("   \t "), Err(BotError::EmptyInput)));
    }
}
