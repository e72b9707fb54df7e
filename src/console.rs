//! Console I/O — the input collaborator for the game.
//!
//! Defines the `Console` trait over line-based prompts, the stdin/stdout
//! implementation, and the validated input-acquisition routines
//! (`prompt_choice` and `get_bet`). Malformed player input is always
//! recovered locally by re-prompting; only genuine stream failures
//! propagate to the caller.

use anyhow::{bail, Context, Result};
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::debug;

// ---------------------------------------------------------------------------
// Console trait
// ---------------------------------------------------------------------------

/// Abstraction over the interactive text console.
///
/// Implementors print lines and issue prompts that block until the player
/// answers. Tests drive the game through a scripted implementation with
/// no real terminal attached.
pub trait Console {
    /// Print a full line of output.
    fn print(&mut self, line: &str);

    /// Print `text` without a trailing newline, flush, and read one line
    /// of input. The returned string has its line terminator trimmed.
    fn prompt(&mut self, text: &str) -> Result<String>;
}

/// Production console backed by stdin/stdout.
pub struct StdConsole;

impl Console for StdConsole {
    fn print(&mut self, line: &str) {
        println!("{line}");
    }

    fn prompt(&mut self, text: &str) -> Result<String> {
        print!("{text}");
        io::stdout().flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        let bytes = io::stdin()
            .lock()
            .read_line(&mut line)
            .context("Failed to read player input")?;
        if bytes == 0 {
            bail!("Input stream closed");
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

// ---------------------------------------------------------------------------
// Choice prompts
// ---------------------------------------------------------------------------

/// Ask `prompt` until the player answers with one of `valid`.
///
/// Matching is case-sensitive and exact. An invalid answer prints
/// `Invalid option. Choose one of <valid>` followed by a blank line,
/// then asks again.
pub fn prompt_choice<C: Console + ?Sized>(
    console: &mut C,
    prompt: &str,
    valid: &[&str],
) -> Result<String> {
    loop {
        let response = console.prompt(prompt)?;
        if valid.contains(&response.as_str()) {
            return Ok(response);
        }
        console.print(&format!("Invalid option. Choose one of {valid:?}"));
        console.print("");
    }
}

// ---------------------------------------------------------------------------
// Bet acquisition
// ---------------------------------------------------------------------------

/// Why a bet was rejected. `Display` is the exact message shown to the player.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BetError {
    #[error("The bet must be an integer.")]
    NotAnInteger,
    #[error("The bet must be a positive integer.")]
    NotPositive,
    #[error("You do not have enough credits for that bet.")]
    InsufficientCredits,
}

/// Validate a raw bet string against the available credits.
pub fn parse_bet(raw: &str, credits: u64) -> Result<u64, BetError> {
    let value: i128 = raw.trim().parse().map_err(|_| BetError::NotAnInteger)?;
    if value <= 0 {
        return Err(BetError::NotPositive);
    }
    if value > credits as i128 {
        return Err(BetError::InsufficientCredits);
    }
    Ok(value as u64)
}

/// Ask for a bet until the player gives a valid one (1 ≤ bet ≤ credits).
///
/// Prompt is `Make a bet: `. Each rejection prints the matching
/// `BetError` message and asks again.
pub fn get_bet<C: Console + ?Sized>(console: &mut C, credits: u64) -> Result<u64> {
    loop {
        let raw = console.prompt("Make a bet: ")?;
        match parse_bet(&raw, credits) {
            Ok(bet) => {
                debug!(bet, credits, "Bet accepted");
                return Ok(bet);
            }
            Err(e) => console.print(&e.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Test doubles
// ---------------------------------------------------------------------------

#[cfg(test)]
pub(crate) mod testing {
    use super::Console;
    use anyhow::Result;
    use std::collections::VecDeque;

    /// Deterministic console for tests: feeds scripted responses and
    /// records everything printed or prompted.
    pub(crate) struct ScriptedConsole {
        responses: VecDeque<String>,
        pub output: Vec<String>,
        pub prompts: Vec<String>,
    }

    impl ScriptedConsole {
        pub fn new(responses: &[&str]) -> Self {
            Self {
                responses: responses.iter().map(|s| s.to_string()).collect(),
                output: Vec::new(),
                prompts: Vec::new(),
            }
        }
    }

    impl Console for ScriptedConsole {
        fn print(&mut self, line: &str) {
            self.output.push(line.to_string());
        }

        fn prompt(&mut self, text: &str) -> Result<String> {
            self.prompts.push(text.to_string());
            self.responses
                .pop_front()
                .ok_or_else(|| anyhow::anyhow!("Console script exhausted at: {text}"))
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
