use crate::error::CommandError;
use linkshort_core::{Shortener, ShortenerError};
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tracing::{debug, info};

pub const WELCOME: &str = "Welcome to Link Shortener!";
pub const USAGE: &str =
    "Commands: 'shorten <URL>' to shorten, 'expand <shortURL>' to expand, 'exit' to quit.";
pub const PROMPT: &str = "Enter command: ";
pub const GOODBYE: &str = "Goodbye!";

/// A single line of input, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Shorten(String),
    Expand(String),
    Exit,
}

impl FromStr for Command {
    type Err = CommandError;

    /// Splits a line once on the first space into a keyword and its argument.
    /// Keywords are case-insensitive. A keyword followed by a space always has
    /// an argument, possibly empty.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_end_matches(['\r', '\n']);
        let (keyword, argument) = match line.split_once(' ') {
            Some((keyword, argument)) => (keyword, Some(argument.trim())),
            None => (line, None),
        };

        if keyword.eq_ignore_ascii_case("exit") {
            return Ok(Command::Exit);
        }

        let Some(argument) = argument else {
            return Err(CommandError::MissingArgument);
        };

        match keyword.to_ascii_lowercase().as_str() {
            "shorten" => Ok(Command::Shorten(argument.to_owned())),
            "expand" => Ok(Command::Expand(argument.to_owned())),
            _ => Err(CommandError::Unknown(keyword.to_owned())),
        }
    }
}

/// What the session does after handling a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Print the message and wait for the next command.
    Reply(String),
    /// End the session.
    Exit,
}

/// An interactive command loop over a [`Shortener`].
pub struct Session<S> {
    shortener: S,
}

impl<S: Shortener> Session<S> {
    pub fn new(shortener: S) -> Self {
        Self { shortener }
    }

    pub fn shortener(&self) -> &S {
        &self.shortener
    }

    /// Handles one line of input. Errors are rendered into the reply.
    pub fn respond(&mut self, line: &str) -> Response {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                debug!(line, error = %e, "rejected command");
                return Response::Reply(format!("Error: {}", e));
            }
        };

        match command {
            Command::Shorten(url) => Response::Reply(match self.shortener.register(&url) {
                Ok(registration) if registration.created => {
                    format!("Shortened URL: {}", registration.code)
                }
                Ok(registration) => format!("Short URL already exists: {}", registration.code),
                Err(e) => render_error(&e, "URL"),
            }),
            Command::Expand(code) => Response::Reply(match self.shortener.expand(&code) {
                Ok(url) => format!("Expanded URL: {}", url),
                Err(e) => render_error(&e, "Short URL"),
            }),
            Command::Exit => Response::Exit,
        }
    }

    /// Runs the command loop until `exit` or end of input.
    ///
    /// Only I/O failures on `input` or `output` are returned as errors.
    pub fn run<I: BufRead, O: Write>(&mut self, mut input: I, mut output: O) -> io::Result<()> {
        info!("session started");
        writeln!(output, "{}", WELCOME)?;
        writeln!(output, "{}", USAGE)?;

        let mut line = String::new();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                debug!("end of input");
                // Keep the farewell on its own line after the dangling prompt.
                writeln!(output)?;
                break;
            }

            match self.respond(&line) {
                Response::Reply(message) => writeln!(output, "{}", message)?,
                Response::Exit => break,
            }
        }

        writeln!(output, "{}", GOODBYE)?;
        output.flush()?;
        info!(registered = self.shortener.len(), "session ended");
        Ok(())
    }
}

fn render_error(error: &ShortenerError, subject: &str) -> String {
    match error {
        ShortenerError::InvalidInput(_) => format!("Error: {} cannot be null or empty.", subject),
        ShortenerError::NotFound(_) => "Error: Short URL not found.".to_string(),
        ShortenerError::Storage(message) => format!("Error: {}", message),
    }
}
