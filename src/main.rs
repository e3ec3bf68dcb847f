//! Cavern entry point
//!
//! Runs the game headless: a scripted player drives the app through the
//! fixed-timestep loop and the result is logged. Usage:
//! `cavern [settings.json]`

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use cavern::audio::LogSink;
use cavern::app::{App, Screen};
use cavern::consts::*;
use cavern::input::RawKeys;
use cavern::sim::GameState;
use cavern::{ConfigError, Settings};

/// Plays the game well enough to exercise it
#[derive(Debug, Default)]
struct Autopilot {
    frame: u64,
}

impl Autopilot {
    fn keys(&mut self, screen: Screen, game: &GameState) -> RawKeys {
        self.frame += 1;
        // Presses need a release in between to register
        let tap = self.frame % 2 == 0;

        match screen {
            Screen::Menu | Screen::GameOver => RawKeys {
                fire: tap && self.frame % 120 == 0,
                ..Default::default()
            },
            Screen::Play { .. } => Self::play(game, tap),
        }
    }

    fn play(game: &GameState, tap: bool) -> RawKeys {
        let player = &game.player;
        let target = game
            .enemies
            .iter()
            .min_by(|a, b| {
                let da = (a.pos - player.pos).length_squared();
                let db = (b.pos - player.pos).length_squared();
                da.total_cmp(&db)
            })
            .map(|robot| robot.pos);

        let Some(target) = target else {
            return RawKeys::default();
        };

        let dx = target.x - player.pos.x;
        let level_with = (target.y - player.pos.y).abs() < 30.0;
        let facing_target = (dx < 0.0) == (player.direction_x < 0);

        RawKeys {
            left: dx < -60.0,
            right: dx > 60.0,
            up: tap && target.y < player.pos.y - 40.0,
            fire: tap && level_with && facing_target,
            pause: false,
        }
    }
}

const DEFAULT_SETTINGS: &str = "cavern.json";

/// Settings from the named file, or `cavern.json` (written out on first run)
fn load_settings() -> Result<Settings, ConfigError> {
    if let Some(path) = std::env::args().nth(1) {
        return Settings::load(&PathBuf::from(path));
    }

    let path = PathBuf::from(DEFAULT_SETTINGS);
    let first_run = !path.exists();
    let settings = Settings::load_or_default(&path)?;
    if first_run {
        if let Err(err) = settings.save(&path) {
            log::warn!("Could not write default settings: {err}");
        }
    }
    Ok(settings)
}

fn run(settings: &Settings) -> Result<(), ConfigError> {
    let mut app = App::new(settings, Box::new(LogSink))?;
    let mut autopilot = Autopilot::default();

    let frame_time = Duration::from_secs_f32(SIM_DT);
    let mut accumulator = 0.0f32;
    let mut last_time = Instant::now();
    let mut frames: u32 = 0;
    let mut deepest_level = 0;
    let mut best_score = 0;

    while frames < settings.demo_frames {
        let now = Instant::now();
        let dt = now.duration_since(last_time).as_secs_f32().min(0.1);
        last_time = now;
        accumulator += dt;

        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let keys = autopilot.keys(app.screen(), app.game());
            app.update(keys);
            accumulator -= SIM_DT;
            substeps += 1;
            frames += 1;

            if let Screen::Play { .. } = app.screen() {
                deepest_level = deepest_level.max(app.game().level);
                best_score = best_score.max(app.game().player.score);
            }
        }

        let draw_items = app.draw_list().len();
        log::trace!("frame {frames}: {draw_items} sprites");

        if let Some(rest) = frame_time.checked_sub(now.elapsed()) {
            std::thread::sleep(rest);
        }
    }

    log::info!(
        "Ran {} frames: {} games, {} lives lost, reached level {}, best score {}",
        frames,
        app.games_started(),
        app.deaths(),
        deepest_level + 1,
        best_score
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Cavern (headless) starting...");

    let settings = match load_settings() {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Could not load settings: {err}");
            return ExitCode::FAILURE;
        }
    };

    match run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
