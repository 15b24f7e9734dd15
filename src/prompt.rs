use std::io::{BufRead, Write};

use crate::error::{HookError, Result};

/// Shown after every question; the parenthesized answer is the default.
const CHOICES_HINT: &str = "(yes)/always/no/never: ";

/// A recognized answer to the yes/always/no/never question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    Yes,
    No,
    Always,
    Never,
}

impl Response {
    /// Case-insensitive, whitespace-trimmed. Empty input means yes.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "" | "y" | "yes" => Some(Response::Yes),
            "n" | "no" => Some(Response::No),
            "always" => Some(Response::Always),
            "never" => Some(Response::Never),
            _ => None,
        }
    }
}

/// Asks the user a question until a recognized answer arrives.
pub trait Prompter {
    fn ask(&mut self, message: &str) -> Result<Response>;
}

/// Line-oriented prompt over any reader/writer pair, normally stdin/stdout.
///
/// Re-prompts until a recognized answer arrives; there is no retry limit,
/// so this must only ever run in an interactive session.
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn write_prompt(&mut self, message: &str) -> Result<()> {
        write!(self.output, "\x1b[34m> {}\x1b[0;90m {}\x1b[m", message, CHOICES_HINT)
            .and_then(|_| self.output.flush())
            .map_err(|e| HookError::io("failed to write prompt", e))
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn ask(&mut self, message: &str) -> Result<Response> {
        loop {
            self.write_prompt(message)?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .map_err(|e| HookError::io("failed to read response", e))?;
            if read == 0 {
                return Err(HookError::PromptClosed);
            }

            if let Some(response) = Response::parse(&line) {
                return Ok(response);
            }
            writeln!(self.output, "\x1b[31mInvalid response.\x1b[m")
                .map_err(|e| HookError::io("failed to write prompt", e))?;
        }
    }
}
