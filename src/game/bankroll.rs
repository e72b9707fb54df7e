//! Bankroll loop — chains sessions until the player cashes out or is broke.
//!
//! Owns the credit balance for the lifetime of the game. The balance is a
//! plain local value threaded through the loop; nothing else may mutate it.

use anyhow::Result;
use tracing::{debug, info};

use crate::console::{get_bet, prompt_choice, Console};
use crate::game::session::run_session;
use crate::rng::DrawSource;

const CONTINUE_PROMPT: &str = "Do you want to (c)ontinue or (p)ayout? ";

/// Play Quasar until the player cashes out or goes broke.
///
/// Announces the balance up front and after every session. A balance of
/// zero ends the game with `You went broke.`, printed exactly once;
/// otherwise the player chooses to continue or cash out, and cashing out
/// prints `You leave with X credits.`
///
/// Returns the final balance (0 when the player went broke) so callers
/// and tests can assert on it; the binary ignores the value.
pub fn play<C, D>(console: &mut C, draws: &mut D, starting_credits: u64) -> Result<u64>
where
    C: Console + ?Sized,
    D: DrawSource + ?Sized,
{
    let mut credits = starting_credits;
    console.print(&format!("You have {credits} credits."));

    while credits > 0 {
        let bet = get_bet(console, credits)?;
        let pay = run_session(console, draws, bet)?;

        // Loss is capped at the bet and the bet at the balance, so the
        // sum cannot go negative.
        credits = (credits as i64 + pay) as u64;
        console.print(&format!("You have {credits} credits."));
        debug!(bet, pay, credits, "Balance updated");

        if credits == 0 {
            console.print("You went broke.");
            break;
        }

        let response = prompt_choice(console, CONTINUE_PROMPT, &["c", "p"])?;
        if response == "p" {
            break;
        }
    }

    if credits > 0 {
        console.print(&format!("You leave with {credits} credits."));
    }

    info!(starting_credits, credits, "Game over");
    Ok(credits)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
