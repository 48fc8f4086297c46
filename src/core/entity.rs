//! Entity model: the player and its projectiles.
//!
//! Both entity kinds share a `Sprite` (position + glyph) by composition;
//! there is no dispatch across them, so plain distinct structs suffice.

use crate::types::{Vec2, GRID_H, GRID_W, PLAYER_GLYPH, PROJECTILE_GLYPH};

/// A positioned display glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    pub pos: Vec2,
    pub glyph: char,
}

/// The single player entity. Spawns at grid center and, in the current
/// scope, never moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub sprite: Sprite,
}

impl Player {
    pub fn new() -> Self {
        Self {
            sprite: Sprite {
                pos: Vec2::new(GRID_W / 2, GRID_H / 2),
                glyph: PLAYER_GLYPH,
            },
        }
    }

    pub fn pos(&self) -> Vec2 {
        self.sprite.pos
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// A projectile: a sprite plus a per-tick velocity.
///
/// Liveness is membership in the world's collection; a projectile that
/// leaves the grid is dropped by `World::update` in the same tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projectile {
    pub sprite: Sprite,
    pub vel: Vec2,
}

impl Projectile {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            sprite: Sprite {
                pos,
                glyph: PROJECTILE_GLYPH,
            },
            vel,
        }
    }

    /// Advance one tick: position += velocity.
    pub fn advance(&mut self) {
        self.sprite.pos += self.vel;
    }

    /// Whether the projectile is inside `[0, GRID_W) x [0, GRID_H)`.
    pub fn in_bounds(&self) -> bool {
        let Vec2 { x, y } = self.sprite.pos;
        (0..GRID_W).contains(&x) && (0..GRID_H).contains(&y)
    }

    pub fn pos(&self) -> Vec2 {
        self.sprite.pos
    }
}
