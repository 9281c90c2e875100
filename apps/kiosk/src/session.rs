//! # Session Loop
//!
//! Prompt, read, dispatch, print; until `quit` or end of input.
//!
//! The session is the only writer of the order; the menu is borrowed
//! read-only for the whole run.

use std::io::{self, BufRead, Write};

use kiosk_core::interpreter::{execute, transcript};
use kiosk_core::{Command, Menu, Order, Outcome};
use tracing::debug;

use crate::config::KioskConfig;
use crate::input::LineReader;

/// Why the session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Quit,
    EndOfInput,
}

/// An interactive ordering session.
pub struct Session<'m, R, W> {
    menu: &'m Menu,
    order: Order<'m>,
    input: LineReader<R>,
    output: W,
    prompt: String,
}

impl<'m, R: BufRead, W: Write> Session<'m, R, W> {
    /// Creates a session with an empty order.
    pub fn new(menu: &'m Menu, input: R, output: W, config: &KioskConfig) -> Self {
        Session {
            menu,
            order: Order::new(),
            input: LineReader::new(input).with_max_chars(config.max_line_chars),
            output,
            prompt: config.prompt.clone(),
        }
    }

    /// Runs until `quit` or end of input.
    pub fn run(&mut self) -> io::Result<SessionEnd> {
        loop {
            if let Some(end) = self.step()? {
                self.output.flush()?;
                return Ok(end);
            }
        }
    }

    /// Handles one prompt. Returns `Some` when the session is over.
    pub fn step(&mut self) -> io::Result<Option<SessionEnd>> {
        self.output.write_all(self.prompt.as_bytes())?;
        self.output.flush()?;

        let line = match self.input.read_line()? {
            Some(line) if line.terminated => line,
            Some(fragment) => {
                debug!(fragment = %fragment.text, "Discarding unterminated input");
                return Ok(Some(SessionEnd::EndOfInput));
            }
            None => return Ok(Some(SessionEnd::EndOfInput)),
        };

        let command = Command::parse(&line.text);
        let outcome = execute(&command, self.menu, &mut self.order);
        match &outcome {
            Outcome::Rejected(reason) => {
                debug!(line = %line.text, %reason, "Command rejected");
            }
            _ => debug!(?command, "Command executed"),
        }

        self.output
            .write_all(transcript(&line.text, &outcome).as_bytes())?;

        Ok(outcome.is_quit().then_some(SessionEnd::Quit))
    }

    /// The current order.
    pub fn order(&self) -> &Order<'m> {
        &self.order
    }

    /// Consumes the session, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}
