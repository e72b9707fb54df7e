//! Core game — payout table, session state machine, bankroll loop.

pub mod bankroll;
pub mod payout;
pub mod session;
