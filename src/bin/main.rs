use std::cell::Cell;

use embassy_executor::Spawner;
use embassy_time::{Instant, Timer};
use log::{LevelFilter, info, warn};
use storyline_core::{
    app::{PlayerConfig, StoryPlayer, TickResult},
    clock::FrameClock,
    content::static_source::default_portfolio_model,
    playback::DismissReason,
};

use stdin_input::StdinInput;
use terminal::TerminalRenderer;

#[path = "main/stdin_input.rs"]
mod stdin_input;
#[path = "main/terminal.rs"]
mod terminal;

const TICK_INTERVAL_ENV: &str = "STORYLINE_TICK_MS";
const LOOP_IDLE_MS: u64 = 1;

fn player_config() -> PlayerConfig {
    let mut config = PlayerConfig::default();
    if let Ok(raw) = std::env::var(TICK_INTERVAL_ENV) {
        match raw.trim().parse::<u16>() {
            Ok(interval_ms) if interval_ms > 0 => config.tick_interval_ms = interval_ms,
            _ => warn!(
                "{}={:?} is not a positive millisecond count; using {}ms",
                TICK_INTERVAL_ENV, raw, config.tick_interval_ms
            ),
        }
    }
    config
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let model = default_portfolio_model();
    let config = player_config();
    info!(
        "story screen: {} stories, tick every {}ms",
        model.story_count(),
        config.tick_interval_ms
    );
    info!("gestures: <enter>/f = forward, b = back, q = close");

    let dismissed = Cell::new(None);
    let mut player = StoryPlayer::new(
        model,
        FrameClock::new(),
        StdinInput::spawn(),
        |reason: DismissReason| dismissed.set(Some(reason)),
        config,
    );
    let mut renderer = TerminalRenderer::new(std::io::stdout());
    let mut render_fault_logged = false;

    let loop_start = Instant::now();
    player.start(0, 0, 0);

    loop {
        let now_ms = loop_start.elapsed().as_millis();
        if player.tick(now_ms) == TickResult::RenderRequested {
            player.with_screen(|screen| {
                if let Err(err) = renderer.render(screen) {
                    if !render_fault_logged {
                        warn!("terminal render failed: {}", err);
                        render_fault_logged = true;
                    }
                }
            });
        }

        if let Some(reason) = dismissed.get() {
            info!("story screen dismissed: {:?} after {}ms", reason, now_ms);
            break;
        }

        Timer::after_millis(LOOP_IDLE_MS).await;
    }

    drop(player);
    std::process::exit(0);
}
