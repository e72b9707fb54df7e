//! Session engine — one betting round from initial draw to termination.
//!
//! A session starts with a random score in [1,8] and loops: the player
//! draws from [4,7], draws from [1,8], or stops. Reaching a score of 20
//! or more ends the session immediately, even before the next prompt.
//! The terminal score is settled against the payout table.

use anyhow::Result;
use tracing::debug;

use crate::console::{prompt_choice, Console};
use crate::game::payout::payout;
use crate::rng::DrawSource;

/// Score at or above which a session terminates immediately.
const TARGET_SCORE: u32 = 20;

const CHOICE_PROMPT: &str = "Choose (a) 4-7, (b) 1-8, or (s)top: ";

/// Play one session of Quasar for `bet` credits and return the payout.
///
/// Announces the score after the initial draw and after every subsequent
/// draw. On termination prints `You busted.` above 20, `Quasar!` at
/// exactly 20, and nothing extra on a voluntary stop below 20. A zero
/// payout counts as a win; losses report the raw signed payout, so a
/// 50-credit loss reads `You lost -50 credits.`
///
/// The bet is taken as already validated — sizing against the player's
/// balance is the caller's job.
pub fn run_session<C, D>(console: &mut C, draws: &mut D, bet: u64) -> Result<i64>
where
    C: Console + ?Sized,
    D: DrawSource + ?Sized,
{
    let mut score = draws.draw(1, 8);
    console.print(&format!("Your score is {score}."));

    let mut halted = false;
    while !halted {
        let response = prompt_choice(console, CHOICE_PROMPT, &["a", "b", "s"])?;
        halted = response == "s";

        let range = match response.as_str() {
            "a" => Some((4, 7)),
            "b" => Some((1, 8)),
            _ => None,
        };
        if let Some((lo, hi)) = range {
            let roll = draws.draw(lo, hi);
            score += roll;
            console.print(&format!("Your score is {score}."));
            debug!(roll, score, "Draw applied");
        }

        // A draw that reaches the target ends the session before the
        // next prompt.
        if score >= TARGET_SCORE {
            halted = true;
        }
    }

    if score > TARGET_SCORE {
        console.print("You busted.");
    } else if score == TARGET_SCORE {
        console.print("Quasar!");
    }

    let pay = payout(bet, score);
    if pay >= 0 {
        console.print(&format!("You won {pay} credits."));
    } else {
        console.print(&format!("You lost {pay} credits."));
    }

    debug!(bet, score, pay, "Session settled");
    Ok(pay)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
