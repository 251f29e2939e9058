//! The interactive prompt loop.
//!
//! Each pass through the loop shows the menu, collects a filing status and
//! an income, prints the computed tax and asks whether to go again.
//! Validation problems re-prompt; any other failure inside one pass is
//! reported and the loop carries on.

use std::io::{self, Write};

use tax_core::{TaxError, compute_tax};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::config::DisplayConfig;
use crate::console::{Console, Line};
use crate::display;
use crate::input::{self, InputError};

/// Failures inside one pass of the loop that are not input validation.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to read input: {0}")]
    Input(#[source] io::Error),

    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),

    #[error(transparent)]
    Tax(#[from] TaxError),
}

/// How a session came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user chose `Q` at the status prompt.
    Quit,
    /// The user declined to calculate another.
    Finished,
    /// Ctrl-C, or end of input.
    Interrupted,
    /// Writing to the output failed (closed pipe, full disk, hung-up tty).
    OutputClosed,
}

enum Step {
    Continue,
    End(SessionEnd),
}

pub struct Session<W> {
    console: Console,
    out: W,
    display: DisplayConfig,
}

impl<W: Write> Session<W> {
    pub fn new(
        console: Console,
        out: W,
        display: DisplayConfig,
    ) -> Self {
        Self {
            console,
            out,
            display,
        }
    }

    /// Runs the loop until the user quits, declines another calculation or
    /// interrupts.
    pub async fn run(mut self) -> SessionEnd {
        if self.display.banner {
            if let Err(error) = display::write_banner(&mut self.out) {
                warn!(%error, "failed to write banner");
            }
        }

        loop {
            match self.step().await {
                Ok(Step::Continue) => {}
                Ok(Step::End(end)) => {
                    info!(?end, "session ended");
                    return end;
                }
                Err(SessionError::Output(error)) => {
                    // Nothing more can be shown, and retrying would never
                    // reach a read that could notice Ctrl-C.
                    warn!(%error, "output unavailable");
                    return SessionEnd::OutputClosed;
                }
                Err(err) => {
                    error!(error = %err, "calculation pass failed");
                    if let Err(error) = writeln!(self.out, "An error occurred: {err}") {
                        warn!(%error, "failed to report error");
                    }
                }
            }
        }
    }

    async fn step(&mut self) -> Result<Step, SessionError> {
        display::write_menu(&mut self.out).map_err(SessionError::Output)?;

        let Some(selection) = self.prompt("\nSelect filing status (0-3 or Q): ").await? else {
            return self.interrupted();
        };

        if input::is_quit(&selection) {
            self.say("\nProgram terminated.")?;
            return Ok(Step::End(SessionEnd::Quit));
        }

        let code = match input::parse_status_code(&selection) {
            Ok(code) => code,
            Err(err) => return self.reject(err),
        };

        let Some(amount) = self.prompt("Enter taxable income ($): ").await? else {
            return self.interrupted();
        };

        let income = match input::parse_income(&amount) {
            Ok(income) => income,
            Err(err) => return self.reject(err),
        };

        let result = compute_tax(code, income)?;
        display::write_result(&mut self.out, &result).map_err(SessionError::Output)?;

        let Some(again) = self.prompt("\nCalculate another? (Y/N): ").await? else {
            return self.interrupted();
        };

        if input::is_yes(&again) {
            Ok(Step::Continue)
        } else {
            self.say("\nThank you for using the tax calculator.")?;
            Ok(Step::End(SessionEnd::Finished))
        }
    }

    /// Writes `prompt` and waits for a line. `None` means the session
    /// should stop (Ctrl-C or end of input).
    async fn prompt(
        &mut self,
        prompt: &str,
    ) -> Result<Option<String>, SessionError> {
        write!(self.out, "{prompt}")
            .and_then(|()| self.out.flush())
            .map_err(SessionError::Output)?;

        match self.console.next_line().await.map_err(SessionError::Input)? {
            Line::Text(text) => Ok(Some(text)),
            Line::Closed | Line::Interrupted => Ok(None),
        }
    }

    fn reject(
        &mut self,
        err: InputError,
    ) -> Result<Step, SessionError> {
        self.say(&err.to_string())?;
        Ok(Step::Continue)
    }

    fn interrupted(&mut self) -> Result<Step, SessionError> {
        self.say("\n\nProgram interrupted.")?;
        Ok(Step::End(SessionEnd::Interrupted))
    }

    fn say(
        &mut self,
        message: &str,
    ) -> Result<(), SessionError> {
        writeln!(self.out, "{message}").map_err(SessionError::Output)
    }
}
