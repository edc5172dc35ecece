use crate::error::BotError;
use crate::handler::{self, Add, All, Change, Hello, Phone};
use crate::lexer;
use crate::store::ContactStore;
use crate::verb::Verb;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const FAREWELL: &str = "Good bye!";

/// Settings of an interactive session.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Prompt shown by [`Bot::repl`] before each command.
    pub prompt: String,
    /// Print [`WELCOME`] once before the first command.
    pub banner: bool,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            prompt: "Enter a command: ".to_string(),
            banner: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// The contacts assistant: owns the phone book and routes each input line to
/// the matching handler.
///
/// Example
/// ```
/// use contacts_bot::Bot;
/// let mut bot = Bot::default();
/// assert_eq!(bot.handle_line("add John 123456"), "Contact added.");
/// assert_eq!(bot.handle_line("phone John"), "123456");
/// assert_eq!(bot.handle_line("close"), "Good bye!");
/// assert!(!bot.is_running());
/// ```
pub struct Bot {
    config: BotConfig,
    contacts: ContactStore,
    state: SessionState,
}

impl Bot {
    pub fn new(config: BotConfig) -> Self {
        Self {
            config,
            contacts: ContactStore::new(),
            state: SessionState::Running,
        }
    }

    pub fn contacts(&self) -> &ContactStore {
        &self.contacts
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    /// Run one full cycle for `line` and return the response to print.
    ///
    /// Never fails: errors are rendered as their user-facing message.
    pub fn handle_line(&mut self, line: &str) -> String {
        match self.dispatch(line) {
            Ok(response) => response,
            Err(err @ BotError::Handler(_)) => {
                warn!(error = ?err, input = line.trim_end(), "handler failed");
                err.to_string()
            }
            Err(err) => {
                debug!(error = %err, input = line.trim_end(), "rejected input");
                err.to_string()
            }
        }
    }

    fn dispatch(&mut self, line: &str) -> Result<String, BotError> {
        let input = lexer::parse_input(line)?;
        let verb: Verb = input.verb.parse()?;
        let args = input.args_ref();
        debug!(?verb, argc = args.len(), "dispatching");

        let contacts = &mut self.contacts;
        match verb {
            Verb::Hello => handler::invoke::<Hello>(&args, contacts),
            Verb::Add => handler::invoke::<Add>(&args, contacts),
            Verb::Change => handler::invoke::<Change>(&args, contacts),
            Verb::Phone => handler::invoke::<Phone>(&args, contacts),
            Verb::All => handler::invoke::<All>(&args, contacts),
            Verb::Exit => {
                self.state = SessionState::Terminated;
                Ok(FAREWELL.to_string())
            }
        }
    }

    /// Line-oriented loop over any reader.
    ///
    /// Stops after an exit command or at end of input. Nothing is read once
    /// the session has terminated.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> anyhow::Result<()> {
        if self.config.banner {
            writeln!(output, "{WELCOME}")?;
        }

        let mut buf = Vec::new();
        while self.is_running() {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                debug!("end of input");
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            writeln!(output, "{}", self.handle_line(&line))?;
            output.flush()?;
        }
        Ok(())
    }

    /// Interactive loop with line editing and history.
    pub fn repl(&mut self) -> anyhow::Result<()> {
        let mut rl = DefaultEditor::new()?;
        if self.config.banner {
            println!("{WELCOME}");
        }

        while self.is_running() {
            match rl.readline(&self.config.prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        rl.add_history_entry(line.as_str())?;
                    }
                    println!("{}", self.handle_line(&line));
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    println!("{FAREWELL}");
                    self.state = SessionState::Terminated;
                }
                Err(err) => return Err(err.into()),
            }
        }
        Ok(())
    }
}

impl Default for Bot {
    fn default() -> Self {
        Self::new(BotConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn quiet_bot() -> Bot {
        Bot::new(BotConfig {
            banner: false,
            ..BotConfig::default()
        })
    }

    #[test]
    fn test_unknown_verb_keeps_running() {
        let mut bot = quiet_bot();
        assert_eq!(bot.handle_line("foo"), "Invalid command.");
        assert!(bot.is_running());
    }

    #[test]
    fn test_empty_line_keeps_running() {
        let mut bot = quiet_bot();
        assert_eq!(bot.handle_line(""), "Please enter a command.");
        assert_eq!(bot.handle_line("   "), "Please enter a command.");
        assert!(bot.is_running());
    }

    #[test]
    fn test_verb_case_insensitive() {
        let mut bot = quiet_bot();
        assert_eq!(bot.handle_line("HELLO"), "How can I help you?");
        assert_eq!(bot.handle_line("Add Ann 1"), "Contact added.");
        assert_eq!(bot.handle_line("PHONE Ann"), "1");
    }

    #[test]
    fn test_usage_error_keeps_store_untouched() {
        let mut bot = quiet_bot();
        assert_eq!(
            bot.handle_line("add John"),
            "Wrong number of arguments for 'add'. Usage: add <name> <phone>"
        );
        assert_eq!(
            bot.handle_line("phone"),
            "Wrong number of arguments for 'phone'. Usage: phone <name>"
        );
        assert!(bot.contacts().is_empty());
        assert!(bot.is_running());
    }

    #[test]
    fn test_exit_words_terminate() {
        for word in ["close", "exit", "quit", "q", "EXIT"] {
            let mut bot = quiet_bot();
            assert_eq!(bot.handle_line(word), "Good bye!");
            assert_eq!(bot.state(), SessionState::Terminated);
        }
    }

    #[test]
    fn test_run_stops_reading_after_exit() {
        let mut bot = quiet_bot();
        let mut input = Cursor::new(b"hello\nclose\nhello\n".to_vec());
        let mut out = Vec::new();

        bot.run(&mut input, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "How can I help you?\nGood bye!\n");
        let mut rest = String::new();
        input.read_line(&mut rest).unwrap();
        assert_eq!(rest, "hello\n");
    }

    #[test]
    fn test_run_ends_gracefully_at_eof() {
        let mut bot = quiet_bot();
        let mut out = Vec::new();

        bot.run(Cursor::new(b"add A 1".to_vec()), &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Contact added.\n");
        assert!(bot.is_running());
        assert_eq!(bot.contacts().phone("A"), Some("1"));
    }

    #[test]
    fn test_run_answers_invalid_utf8_line() {
        let mut bot = quiet_bot();
        let mut out = Vec::new();

        bot.run(Cursor::new(b"\xff\xfe\nadd Ann 1\n".to_vec()), &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Invalid command.\nContact added.\n"
        );
        assert!(bot.is_running());
        assert_eq!(bot.contacts().phone("Ann"), Some("1"));
    }

    #[test]
    fn test_run_prints_banner_first() {
        let mut bot = Bot::default();
        let mut out = Vec::new();

        bot.run(Cursor::new(b"exit\n".to_vec()), &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Welcome to the assistant bot!\nGood bye!\n"
        );
    }
}
