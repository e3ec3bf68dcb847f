//! Draw lists for an external renderer
//!
//! Drawing is a pure read of the game state. The renderer receives sprites
//! in paint order and only turns them into asset keys at the boundary.

use glam::Vec2;

use crate::consts::*;
use crate::sim::GameState;
use crate::sim::sprite::{PlayerSprite, Sprite};

/// Which point of the image `pos` refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    Centre,
    CentreBottom,
}

/// One sprite to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawItem {
    pub sprite: Sprite,
    pub pos: Vec2,
    pub anchor: Anchor,
}

impl DrawItem {
    fn top_left(sprite: Sprite, pos: Vec2) -> Self {
        Self {
            sprite,
            pos,
            anchor: Anchor::TopLeft,
        }
    }

    fn centred(sprite: Sprite, pos: Vec2) -> Self {
        Self {
            sprite,
            pos,
            anchor: Anchor::Centre,
        }
    }

    fn centre_bottom(sprite: Sprite, pos: Vec2) -> Self {
        Self {
            sprite,
            pos,
            anchor: Anchor::CentreBottom,
        }
    }
}

/// Background, blocks and every entity except the player
pub fn level_draw_list(state: &GameState) -> Vec<DrawItem> {
    let timer = state.timer;
    let mut items = Vec::with_capacity(
        1 + state.fruits.len()
            + state.bolts.len()
            + state.enemies.len()
            + state.pops.len()
            + state.orbs.len(),
    );

    items.push(DrawItem::top_left(
        Sprite::Background {
            colour: state.level_colour,
        },
        Vec2::ZERO,
    ));

    let block = Sprite::Block {
        colour: state.level % 4,
    };
    items.extend(state.grid.solid_tiles().map(|(row, col)| {
        let x = LEVEL_X_OFFSET + col as i32 * TILE_SIZE;
        let y = row as i32 * TILE_SIZE;
        DrawItem::top_left(block, Vec2::new(x as f32, y as f32))
    }));

    items.extend(
        state
            .fruits
            .iter()
            .map(|f| DrawItem::centre_bottom(f.sprite(timer), f.pos)),
    );
    items.extend(
        state
            .bolts
            .iter()
            .map(|b| DrawItem::centred(b.sprite(timer), b.pos)),
    );
    items.extend(
        state
            .enemies
            .iter()
            .map(|r| DrawItem::centre_bottom(r.sprite(timer), r.pos)),
    );
    items.extend(
        state
            .pops
            .iter()
            .map(|p| DrawItem::centred(p.sprite(), p.pos)),
    );
    items.extend(
        state
            .orbs
            .iter()
            .map(|o| DrawItem::centred(o.sprite(), o.pos)),
    );
    items
}

/// Everything in paint order, player last
pub fn draw_list(state: &GameState) -> Vec<DrawItem> {
    let mut items = level_draw_list(state);
    items.push(DrawItem::centre_bottom(
        state.player.sprite(state.timer),
        state.player.pos,
    ));
    items
}

/// Full-screen overlay drawn above the level
pub fn overlay(sprite: Sprite) -> DrawItem {
    let pos = match sprite {
        Sprite::Prompt { .. } => Vec2::new(130.0, 280.0),
        _ => Vec2::ZERO,
    };
    DrawItem::top_left(sprite, pos)
}

/// Asset key for a sprite
pub fn asset_name(sprite: &Sprite) -> String {
    match *sprite {
        Sprite::Background { colour } => format!("bg{colour}"),
        Sprite::Block { colour } => format!("block{colour}"),
        Sprite::Player(player) => match player {
            PlayerSprite::Hidden => "blank".to_string(),
            PlayerSprite::Still => "still".to_string(),
            PlayerSprite::Run { facing, frame } => format!("run{}{}", facing.index(), frame),
            PlayerSprite::Blow { facing } => format!("blow{}", facing.index()),
            PlayerSprite::Recoil { facing } => format!("recoil{}", facing.index()),
            PlayerSprite::Fall { frame } => format!("fall{frame}"),
        },
        Sprite::Robot {
            kind,
            facing,
            frame,
        } => format!("robot{}{}{}", kind.index(), facing.index(), frame),
        Sprite::Orb { frame } => format!("orb{frame}"),
        Sprite::Trap { kind, frame } => format!("trap{}{}", kind.index(), frame),
        Sprite::Bolt { facing, frame } => format!("bolt{}{}", facing.index(), frame),
        Sprite::Fruit { kind, frame } => format!("fruit{}{}", kind.index(), frame),
        Sprite::Pop { kind, frame } => format!("pop{}{}", kind.index(), frame),
        Sprite::Title => "title".to_string(),
        Sprite::Prompt { frame } => format!("space{frame}"),
        Sprite::GameOver => "over".to_string(),
    }
}
