//! Game state and core simulation types
//!
//! Everything the simulation touches between frames lives in `GameState`.
//! Entities never hold references to each other; the player tracks the orb
//! it is blowing by entity id.

use glam::Vec2;

use super::bolt::Bolt;
use super::difficulty;
use super::events::{GameEvent, SoundCue};
use super::fruit::Fruit;
use super::grid::Grid;
use super::levels::LevelTable;
use super::orb::Orb;
use super::player::Player;
use super::pop::Pop;
use super::rng::GameRng;
use super::robot::Robot;
use super::sprite::RobotKind;

/// Shared per-frame context handed to entity updates
pub struct Frame<'a> {
    pub grid: &'a Grid,
    pub rng: &'a mut GameRng,
    pub events: &'a mut Vec<GameEvent>,
    pub level: u32,
}

impl Frame<'_> {
    pub fn emit(&mut self, cue: SoundCue) {
        self.events.push(GameEvent::Sound(cue));
    }
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Current level index (0-based)
    pub level: u32,
    /// Palette index for background and blocks
    pub level_colour: u32,
    /// Frames since the level started
    pub timer: u32,
    pub grid: Grid,
    pub player: Player,
    /// Active robots (captured robots are owned by their orb)
    pub enemies: Vec<Robot>,
    pub orbs: Vec<Orb>,
    pub bolts: Vec<Bolt>,
    pub fruits: Vec<Fruit>,
    pub pops: Vec<Pop>,
    /// Robots still to spawn this level; spawned from the back
    pub pending_enemies: Vec<RobotKind>,
    pub rng: GameRng,
    levels: LevelTable,
    events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// New game on the built-in levels
    pub fn new(seed: u64) -> Self {
        Self::with_levels(GameRng::new(seed), LevelTable::builtin())
    }

    /// New game with an injected random source and level table
    pub fn with_levels(rng: GameRng, levels: LevelTable) -> Self {
        let grid = levels.grid_for(0).clone();
        let mut state = Self {
            level: 0,
            level_colour: 0,
            timer: 0,
            grid,
            player: Player::new(),
            enemies: Vec::new(),
            orbs: Vec::new(),
            bolts: Vec::new(),
            fruits: Vec::new(),
            pops: Vec::new(),
            pending_enemies: Vec::new(),
            rng,
            levels,
            events: Vec::new(),
            next_id: 1,
        };
        state.setup_level();
        state
    }

    /// Seed the random source was created with
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Load the current level's grid and queue its robots
    pub fn setup_level(&mut self) {
        self.grid = self.levels.grid_for(self.level).clone();
        self.level_colour = self.level % 4;
        self.timer = 0;

        self.enemies.clear();
        self.orbs.clear();
        self.bolts.clear();
        self.fruits.clear();
        self.pops.clear();
        self.pending_enemies = difficulty::pending_enemies(self.level, &mut self.rng);

        log::info!(
            "Level {} ready: {} robots queued",
            self.level + 1,
            self.pending_enemies.len()
        );
    }

    /// Advance to the next level and put the player back at the start
    pub fn next_level(&mut self) {
        self.level += 1;
        self.player.reset();
        self.setup_level();
        self.events.push(GameEvent::Sound(SoundCue::Level));
        self.events.push(GameEvent::LevelAdvanced { level: self.level });
    }

    /// Nothing left to fight or collect
    pub fn level_cleared(&self) -> bool {
        self.pending_enemies.is_empty()
            && self.enemies.is_empty()
            && self.fruits.is_empty()
            && self.pops.is_empty()
            && !self.orbs.iter().any(Orb::is_holding)
    }

    pub fn is_game_over(&self) -> bool {
        self.player.lives < 0
    }

    /// Allocate a new entity id
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Drain events produced since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Spawn a robot at `pos` with a random walking speed
    pub fn spawn_robot(&mut self, pos: Vec2, kind: RobotKind) {
        let speed = self.rng.range(1, 3);
        log::debug!("Spawning {:?} robot at {}", kind, pos);
        self.enemies.push(Robot::new(pos, kind, speed));
    }

    fn frame_parts(&mut self) -> (Frame<'_>, FrameLists<'_>) {
        let Self {
            level,
            grid,
            player,
            enemies,
            orbs,
            bolts,
            fruits,
            pops,
            rng,
            events,
            next_id,
            ..
        } = self;
        let frame = Frame {
            grid,
            rng,
            events,
            level: *level,
        };
        let lists = FrameLists {
            player,
            enemies,
            orbs,
            bolts,
            fruits,
            pops,
            next_id,
        };
        (frame, lists)
    }

    /// Borrows needed by the player update
    pub fn player_frame(&mut self) -> (&mut Player, Frame<'_>, &mut Vec<Orb>, &mut u32) {
        let (frame, lists) = self.frame_parts();
        (lists.player, frame, lists.orbs, lists.next_id)
    }

    /// Borrows needed by robot updates
    #[allow(clippy::type_complexity)]
    pub fn enemy_frame(
        &mut self,
    ) -> (&mut Vec<Robot>, Frame<'_>, &Player, &mut Vec<Orb>, &mut Vec<Bolt>) {
        let (frame, lists) = self.frame_parts();
        (lists.enemies, frame, &*lists.player, lists.orbs, lists.bolts)
    }

    /// Borrows needed by orb updates
    pub fn orb_frame(&mut self) -> (&mut Vec<Orb>, Frame<'_>, &mut Vec<Pop>, &mut Vec<Fruit>) {
        let (frame, lists) = self.frame_parts();
        (lists.orbs, frame, lists.pops, lists.fruits)
    }

    /// Borrows needed by bolt updates
    pub fn bolt_frame(&mut self) -> (&mut Vec<Bolt>, Frame<'_>, &mut Vec<Orb>, &mut Player) {
        let (frame, lists) = self.frame_parts();
        (lists.bolts, frame, lists.orbs, lists.player)
    }

    /// Borrows needed by fruit updates
    pub fn fruit_frame(&mut self) -> (&mut Vec<Fruit>, Frame<'_>, &mut Player, &mut Vec<Pop>) {
        let (frame, lists) = self.frame_parts();
        (lists.fruits, frame, lists.player, lists.pops)
    }
}

/// Entity collections split out alongside a `Frame`
struct FrameLists<'a> {
    player: &'a mut Player,
    enemies: &'a mut Vec<Robot>,
    orbs: &'a mut Vec<Orb>,
    bolts: &'a mut Vec<Bolt>,
    fruits: &'a mut Vec<Fruit>,
    pops: &'a mut Vec<Pop>,
    next_id: &'a mut u32,
}
