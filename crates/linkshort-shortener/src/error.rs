use thiserror::Error;

/// Errors from parsing a line of the interactive session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Command requires a URL. Try again.")]
    MissingArgument,
    #[error("Unknown command. Use 'shorten', 'expand', or 'exit'.")]
    Unknown(String),
}
