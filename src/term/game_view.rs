//! GameView: maps `core::World` into a character frame.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::World;
use crate::term::frame::Frame;

/// Projects world state onto a grid-sized frame each tick.
#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    /// Render the world into a fresh frame.
    ///
    /// Draw order: player first, then projectiles in collection order, so a
    /// projectile sharing the player's cell overwrites the player glyph.
    /// Projectiles outside the grid are skipped by `Frame::set`; after
    /// `World::update` none should remain.
    pub fn render(&self, world: &World) -> Frame {
        let mut frame = Frame::grid_sized();

        let player = world.player.sprite;
        frame.set(player.pos.x, player.pos.y, player.glyph);

        for p in world.projectiles() {
            frame.set(p.sprite.pos.x, p.sprite.pos.y, p.sprite.glyph);
        }

        frame
    }
}
