use crate::error::BotError;
use crate::store::ContactStore;
use anyhow::Result;
use argh::{EarlyExit, FromArgs};
use tracing::{debug, info};

pub const GREETING: &str = "How can I help you?";
pub const CONTACT_ADDED: &str = "Contact added.";
pub const CONTACT_UPDATED: &str = "Contact updated.";
pub const CONTACT_NOT_FOUND: &str = "Contact not found.";
pub const NO_CONTACTS: &str = "No contacts saved.";

/// A command implemented against the [`ContactStore`].
///
/// Handlers are parsed from their positional arguments with [`argh`] and
/// return the response to print. The store is the only state they touch.
pub(crate) trait Handler: Sized + FromArgs {
    /// Verb that selects this handler, e.g. "add".
    fn name() -> &'static str;

    /// One-line synopsis shown on argument errors.
    fn usage() -> &'static str;

    fn execute(self, contacts: &mut ContactStore) -> Result<String>;
}

/// Parse `args` into `H` and run it.
///
/// Every argument is bound as a value, so names and phones may look like
/// flags (`help`, `-5551234`). Only a lone `--help` yields argh's help text
/// as the response. Any other parse failure becomes [`BotError::Usage`].
pub(crate) fn invoke<H: Handler>(
    args: &[&str],
    contacts: &mut ContactStore,
) -> std::result::Result<String, BotError> {
    let argv: Vec<&str> = if args == ["--help"] {
        args.to_vec()
    } else {
        std::iter::once("--").chain(args.iter().copied()).collect()
    };
    match H::from_args(&[H::name()], &argv) {
        Ok(handler) => Ok(handler.execute(contacts)?),
        Err(EarlyExit {
            output,
            status: Ok(()),
        }) => Ok(output.trim_end().to_string()),
        Err(EarlyExit {
            output,
            status: Err(()),
        }) => {
            debug!(command = H::name(), output = output.trim_end(), "rejected arguments");
            Err(BotError::Usage {
                command: H::name(),
                usage: H::usage(),
            })
        }
    }
}

#[derive(FromArgs)]
/// Greet the user.
pub struct Hello {
    #[argh(positional, greedy, arg_name = "ignored")]
    /// extra words, not used.
    _ignored: Vec<String>,
}

impl Handler for Hello {
    fn name() -> &'static str {
        "hello"
    }

    fn usage() -> &'static str {
        "hello"
    }

    fn execute(self, _contacts: &mut ContactStore) -> Result<String> {
        Ok(GREETING.to_string())
    }
}

#[derive(FromArgs)]
/// Save a contact. An existing contact with the same name is overwritten.
pub struct Add {
    #[argh(positional)]
    /// contact name, case-sensitive.
    pub name: String,

    #[argh(positional)]
    /// phone number, stored as typed.
    pub phone: String,
}

impl Handler for Add {
    fn name() -> &'static str {
        "add"
    }

    fn usage() -> &'static str {
        "add <name> <phone>"
    }

    fn execute(self, contacts: &mut ContactStore) -> Result<String> {
        let previous = contacts.upsert(self.name.as_str(), self.phone);
        info!(name = %self.name, overwritten = previous.is_some(), "contact added");
        Ok(CONTACT_ADDED.to_string())
    }
}

#[derive(FromArgs)]
/// Replace the phone number of an existing contact.
pub struct Change {
    #[argh(positional)]
    /// name of a saved contact.
    pub name: String,

    #[argh(positional)]
    /// new phone number.
    pub phone: String,
}

impl Handler for Change {
    fn name() -> &'static str {
        "change"
    }

    fn usage() -> &'static str {
        "change <name> <phone>"
    }

    fn execute(self, contacts: &mut ContactStore) -> Result<String> {
        if contacts.update(&self.name, self.phone) {
            info!(name = %self.name, "contact updated");
            Ok(CONTACT_UPDATED.to_string())
        } else {
            debug!(name = %self.name, "change on unknown contact");
            Ok(CONTACT_NOT_FOUND.to_string())
        }
    }
}

#[derive(FromArgs)]
/// Show the phone number of a contact.
pub struct Phone {
    #[argh(positional)]
    /// name of a saved contact.
    pub name: String,
}

impl Handler for Phone {
    fn name() -> &'static str {
        "phone"
    }

    fn usage() -> &'static str {
        "phone <name>"
    }

    fn execute(self, contacts: &mut ContactStore) -> Result<String> {
        Ok(contacts
            .phone(&self.name)
            .unwrap_or(CONTACT_NOT_FOUND)
            .to_string())
    }
}

#[derive(FromArgs)]
/// List every saved contact, one "name: phone" pair per line.
pub struct All {
    #[argh(positional, greedy, arg_name = "ignored")]
    /// extra words, not used.
    _ignored: Vec<String>,
}

impl Handler for All {
    fn name() -> &'static str {
        "all"
    }

    fn usage() -> &'static str {
        "all"
    }

    fn execute(self, contacts: &mut ContactStore) -> Result<String> {
        if contacts.is_empty() {
            return Ok(NO_CONTACTS.to_string());
        }
        Ok(contacts.to_string())
    }
}
