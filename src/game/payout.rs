//! Payout table — maps a terminal score to a signed credit adjustment.
//!
//! Pure arithmetic, no side effects. Fractional multipliers round
//! half-to-even, computed exactly over integers rather than through
//! floating point.

/// Winnings for a finished session.
///
/// | score        | payout          |
/// |--------------|-----------------|
/// | 20           | +bet            |
/// | 19           | +round(0.50·bet)|
/// | 18           | +round(0.25·bet)|
/// | 17           | 0               |
/// | 16           | −round(0.50·bet)|
/// | 15           | −round(0.75·bet)|
/// | ≤14 or ≥21   | −bet            |
///
/// The result is capped at −bet by construction, so a loss can never
/// exceed the wager.
pub fn payout(bet: u64, score: u32) -> i64 {
    match score {
        20 => bet as i64,
        19 => round_half_even(bet, 2) as i64,
        18 => round_half_even(bet, 4) as i64,
        17 => 0,
        16 => -(round_half_even(bet, 2) as i64),
        15 => -(round_half_even(3 * bet, 4) as i64),
        // Everything else is a total loss.
        _ => -(bet as i64),
    }
}

/// Round `num / den` to the nearest integer, ties to even.
fn round_half_even(num: u64, den: u64) -> u64 {
    let quot = num / den;
    let rem = num % den;
    match (2 * rem).cmp(&den) {
        std::cmp::Ordering::Less => quot,
        std::cmp::Ordering::Greater => quot + 1,
        std::cmp::Ordering::Equal => {
            if quot % 2 == 0 {
                quot
            } else {
                quot + 1
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
