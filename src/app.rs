//! Screen shell
//!
//! Owns the running game, the input tracker and audio, and moves between
//! the menu, play and game over screens. The platform layer feeds raw keys
//! in once per frame and asks for a draw list afterwards.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::audio::{AudioManager, AudioSink};
use crate::error::ConfigError;
use crate::input::{InputSnapshot, InputTracker, RawKeys};
use crate::render::{self, DrawItem};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameRng, GameState, LevelTable, SoundCue, Sprite, tick};

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Title over an idle level; fire starts a game
    Menu,
    Play { paused: bool },
    /// Final state frozen under the banner; fire returns to the menu
    GameOver,
}

pub struct App {
    screen: Screen,
    game: GameState,
    input: InputTracker,
    audio: AudioManager,
    levels: LevelTable,
    seeds: Pcg32,
    games_started: u32,
    deaths: u32,
}

impl App {
    /// Build the app from settings; fails only if a level file is bad
    pub fn new(settings: &Settings, sink: Box<dyn AudioSink>) -> Result<Self, ConfigError> {
        let levels = settings.level_table()?;
        let mut seeds = match settings.seed {
            Some(seed) => Pcg32::seed_from_u64(seed),
            None => Pcg32::from_os_rng(),
        };
        let audio = AudioManager::from_settings(sink, seeds.random(), settings);
        let game = GameState::with_levels(GameRng::new(seeds.random()), levels.clone());
        log::info!("App ready with {} levels", levels.len());

        Ok(Self {
            screen: Screen::Menu,
            game,
            input: InputTracker::new(),
            audio,
            levels,
            seeds,
            games_started: 0,
            deaths: 0,
        })
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn games_started(&self) -> u32 {
        self.games_started
    }

    /// Lives lost across every game so far
    pub fn deaths(&self) -> u32 {
        self.deaths
    }

    /// Advance one frame
    pub fn update(&mut self, keys: RawKeys) {
        let input = self.input.capture(keys);

        match self.screen {
            Screen::Menu => {
                if input.fire_pressed {
                    self.start_game();
                } else {
                    // The menu backdrop only animates
                    self.game.timer += 1;
                }
            }
            Screen::Play { paused } => {
                if input.pause_pressed {
                    log::info!("{}", if paused { "Resumed" } else { "Paused" });
                    self.screen = Screen::Play { paused: !paused };
                }
                if let Screen::Play { paused: false } = self.screen {
                    self.play_frame(&input);
                }
            }
            Screen::GameOver => {
                if input.fire_pressed {
                    self.show_menu();
                }
            }
        }
    }

    fn play_frame(&mut self, input: &InputSnapshot) {
        tick(&mut self.game, input);
        let mut events = self.game.take_events();

        for event in &events {
            match event {
                GameEvent::LevelAdvanced { level } => {
                    log::info!("Entering level {}", level + 1);
                }
                GameEvent::PlayerDied { lives_left } => {
                    self.deaths += 1;
                    log::debug!("Death {} ({} lives left)", self.deaths, lives_left);
                }
                GameEvent::GameOver => log::debug!("Out of lives after {} deaths", self.deaths),
                GameEvent::Sound(_) => {}
            }
        }

        if self.game.is_game_over() {
            log::info!(
                "Game over on level {} with score {}",
                self.game.level + 1,
                self.game.player.score
            );
            events.push(GameEvent::Sound(SoundCue::Over));
            self.screen = Screen::GameOver;
        }

        self.audio.dispatch(&events);
    }

    fn new_game_state(&mut self) -> GameState {
        GameState::with_levels(GameRng::new(self.seeds.random()), self.levels.clone())
    }

    fn start_game(&mut self) {
        self.game = self.new_game_state();
        self.games_started += 1;
        self.screen = Screen::Play { paused: false };
        log::info!(
            "Game {} started (seed {})",
            self.games_started,
            self.game.seed()
        );
    }

    fn show_menu(&mut self) {
        self.game = self.new_game_state();
        self.screen = Screen::Menu;
        log::info!("Back to menu");
    }

    /// What to draw this frame, in paint order
    pub fn draw_list(&self) -> Vec<DrawItem> {
        match self.screen {
            Screen::Menu => {
                let mut items = render::level_draw_list(&self.game);
                items.push(render::overlay(Sprite::Title));
                let frame = (((self.game.timer + 40) % 160) / 4).min(9);
                items.push(render::overlay(Sprite::Prompt { frame }));
                items
            }
            Screen::Play { .. } => render::draw_list(&self.game),
            Screen::GameOver => {
                let mut items = render::draw_list(&self.game);
                items.push(render::overlay(Sprite::GameOver));
                items
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::NullSink;

    fn app() -> App {
        let settings = Settings {
            seed: Some(21),
            ..Default::default()
        };
        App::new(&settings, Box::new(NullSink)).unwrap()
    }

    fn press_fire(app: &mut App) {
        app.update(RawKeys {
            fire: true,
            ..Default::default()
        });
        app.update(RawKeys::default());
    }

    #[test]
    fn test_menu_only_animates() {
        let mut app = app();
        let pending = app.game().pending_enemies.len();
        for _ in 0..200 {
            app.update(RawKeys::default());
        }
        assert_eq!(app.screen(), Screen::Menu);
        assert_eq!(app.game().timer, 200);
        assert!(app.game().enemies.is_empty());
        assert_eq!(app.game().pending_enemies.len(), pending);
    }

    #[test]
    fn test_fire_starts_game() {
        let mut app = app();
        press_fire(&mut app);
        assert_eq!(app.screen(), Screen::Play { paused: false });
        assert_eq!(app.games_started(), 1);
        // The release frame already ticked once
        assert_eq!(app.game().timer, 1);
    }

    #[test]
    fn test_holding_fire_from_menu_does_not_blow_an_orb() {
        let mut app = app();
        let held = RawKeys {
            fire: true,
            ..Default::default()
        };
        app.update(held);
        app.update(held);
        assert!(app.game().orbs.is_empty());
    }

    #[test]
    fn test_pause_toggles_and_freezes() {
        let mut app = app();
        press_fire(&mut app);
        let pause = RawKeys {
            pause: true,
            ..Default::default()
        };

        app.update(pause);
        assert_eq!(app.screen(), Screen::Play { paused: true });
        let timer = app.game().timer;
        for _ in 0..10 {
            app.update(RawKeys::default());
        }
        assert_eq!(app.game().timer, timer);

        app.update(pause);
        assert_eq!(app.screen(), Screen::Play { paused: false });
        assert_eq!(app.game().timer, timer + 1);
    }

    #[test]
    fn test_game_over_and_back_to_menu() {
        let mut app = app();
        press_fire(&mut app);

        app.game.player.lives = 0;
        app.game.player.health = 0;
        app.game.player.pos.y = 800.0;
        app.update(RawKeys::default());
        assert_eq!(app.screen(), Screen::GameOver);
        assert_eq!(app.deaths(), 1);

        // Frozen until fire
        let timer = app.game().timer;
        app.update(RawKeys::default());
        assert_eq!(app.game().timer, timer);

        press_fire(&mut app);
        assert_eq!(app.screen(), Screen::Menu);
    }

    #[test]
    fn test_lost_life_is_counted_and_play_continues() {
        let mut app = app();
        press_fire(&mut app);
        let lives = app.game().player.lives;

        app.game.player.health = 0;
        app.game.player.pos.y = 800.0;
        app.update(RawKeys::default());

        assert_eq!(app.deaths(), 1);
        assert_eq!(app.game().player.lives, lives - 1);
        assert_eq!(app.screen(), Screen::Play { paused: false });
    }

    #[test]
    fn test_draw_lists_per_screen() {
        let mut app = app();
        let menu = app.draw_list();
        assert!(matches!(menu[menu.len() - 2].sprite, Sprite::Title));
        assert!(matches!(
            menu.last().map(|i| i.sprite),
            Some(Sprite::Prompt { frame: 9 })
        ));
        assert!(!menu.iter().any(|i| matches!(i.sprite, Sprite::Player(_))));

        press_fire(&mut app);
        let play = app.draw_list();
        assert!(matches!(
            play.last().map(|i| i.sprite),
            Some(Sprite::Player(_))
        ));
    }

    #[test]
    fn test_fixed_seed_repeats_games() {
        let mut a = app();
        let mut b = app();
        press_fire(&mut a);
        press_fire(&mut b);
        assert_eq!(a.game().seed(), b.game().seed());
        assert_eq!(a.game().pending_enemies, b.game().pending_enemies);
    }
}
