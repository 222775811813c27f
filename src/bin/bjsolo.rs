//! Plays one round of blackjack in the terminal.

use std::env;
use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use flexi_logger::LoggerHandle;
use log::info;

use bjsolo::console::{ConsoleRenderer, LineInput};
use bjsolo::{Game, GameOptions, InputExhausted};

const ON_EOF_ENV: &str = "BJSOLO_ON_EOF";

fn main() -> anyhow::Result<()> {
    let _logger = setup_logger()?;

    let seed = match env::args().nth(1) {
        Some(arg) => arg
            .parse::<u64>()
            .with_context(|| format!("seed must be an unsigned integer, got {arg:?}"))?,
        None => SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs(),
    };
    info!("starting round with seed {seed}");

    let mut renderer =
        ConsoleRenderer::new(io::stdout()).with_color(env::var_os("NO_COLOR").is_none());
    let mut input = LineInput::new(io::stdin().lock());

    renderer.welcome();

    let mut game = Game::new(options_from_env(), seed);
    let result = game.play(&mut input, &mut renderer);

    renderer.reset();

    let result = result.context("round aborted")?;
    info!(
        "player {} vs dealer {}: {:?}",
        result.player_value, result.dealer_value, result.outcome
    );
    Ok(())
}

fn options_from_env() -> GameOptions {
    let on_eof = match env::var(ON_EOF_ENV).as_deref() {
        Ok("stand") => InputExhausted::Stand,
        _ => InputExhausted::Abort,
    };
    GameOptions::default().with_input_exhausted(on_eof)
}

fn setup_logger() -> anyhow::Result<LoggerHandle> {
    let handle = flexi_logger::Logger::try_with_env_or_str("warn")?
        .format(flexi_logger::default_format)
        .start()?;
    Ok(handle)
}
