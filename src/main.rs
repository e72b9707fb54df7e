//! QUASAR — Text-Based Credit Betting Game
//!
//! Entry point. Loads configuration, initialises structured logging,
//! and runs the bankroll loop against the real console and an
//! entropy-seeded random source.

use anyhow::Result;
use tracing::info;

use quasar::config::AppConfig;
use quasar::console::StdConsole;
use quasar::game::bankroll;
use quasar::rng::EntropyDraws;

const BANNER: &str = r#"
  ___  _   _   _    ____    _    ____
 / _ \| | | | / \  / ___|  / \  |  _ \
| | | | | | |/ _ \ \___ \ / _ \ | |_) |
| |_| | |_| / ___ \ ___) / ___ \|  _ <
 \__\_\\___/_/   \_\____/_/   \_\_| \_\

  Text-Based Credit Betting Game
  v0.1.0
"#;

fn main() -> Result<()> {
    // Configuration is optional; defaults give the stock 1000-credit game.
    let cfg = AppConfig::load_or_default("quasar.toml")?;

    init_logging();

    println!("{BANNER}");
    info!(
        starting_credits = cfg.game.starting_credits,
        "Quasar starting up"
    );

    let mut console = StdConsole;
    let mut draws = EntropyDraws::new();

    let final_credits = bankroll::play(&mut console, &mut draws, cfg.game.starting_credits)?;

    info!(final_credits, "Quasar shut down cleanly.");
    Ok(())
}

/// Initialise the `tracing` subscriber.
///
/// The default filter stays at `warn` so log output never interleaves
/// with the game's prompts; set `RUST_LOG=quasar=debug` to watch draws
/// and balance changes.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quasar=warn"));

    let json_logging = std::env::var("QUASAR_LOG_JSON").is_ok();

    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .init();
    } else {
        fmt().with_env_filter(env_filter).with_target(true).init();
    }
}
