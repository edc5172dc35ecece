use std::path::PathBuf;
use thiserror::Error;

/// Failures of a single dispatch cycle.
///
/// The `Display` text of every variant is the response printed to the user,
/// so none of these ever has to leave the loop.
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Please enter a command.")]
    EmptyInput,

    #[error("Invalid command.")]
    UnknownCommand(String),

    #[error("Wrong number of arguments for '{command}'. Usage: {usage}")]
    Usage {
        command: &'static str,
        usage: &'static str,
    },

    #[error("Error: {0:#}")]
    Handler(anyhow::Error),
}

impl From<anyhow::Error> for BotError {
    fn from(err: anyhow::Error) -> Self {
        BotError::Handler(err)
    }
}

/// Errors raised by the file utilities (tree printer, record parsers).
#[derive(Error, Debug)]
pub enum DataError {
    #[error("{} does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DataError {
    /// Map an I/O error on `path`, turning `NotFound` into its own variant.
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            DataError::NotFound(path)
        } else {
            DataError::Io { path, source }
        }
    }
}
