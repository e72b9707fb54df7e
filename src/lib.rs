//! QUASAR — Text-Based Credit Betting Game
//!
//! Library crate exposing all modules for use by integration tests
//! and the binary entry point.

pub mod config;
pub mod console;
pub mod game;
pub mod rng;
