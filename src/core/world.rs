//! World state: owns the player and the live projectile collection.

use crate::core::entity::{Player, Projectile};
use crate::types::PROJECTILE_VEL;

/// The whole simulation state.
///
/// Invariant: after `update` returns, every projectile in the collection is
/// in bounds. Positions may only leave the grid transiently inside `update`.
#[derive(Debug, Clone)]
pub struct World {
    pub player: Player,
    projectiles: Vec<Projectile>,
}

impl World {
    pub fn new() -> Self {
        Self {
            player: Player::new(),
            projectiles: Vec::new(),
        }
    }

    /// Fire a projectile from the player's current position.
    ///
    /// The collection is allowed to grow without limit; with the fixed
    /// rightward velocity every projectile leaves the grid within
    /// `GRID_W` ticks, so growth is bounded in practice.
    pub fn spawn_projectile(&mut self) {
        self.projectiles
            .push(Projectile::new(self.player.pos(), PROJECTILE_VEL));
    }

    /// Advance one tick: move every projectile, then drop the ones that
    /// left the grid. Survivors keep their relative order.
    pub fn update(&mut self) {
        for p in &mut self.projectiles {
            p.advance();
        }
        self.projectiles.retain(|p| p.in_bounds());
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Vec2;

    #[test]
    fn update_on_empty_world_is_a_noop() {
        let mut world = World::new();
        let player_before = world.player;
        world.update();
        assert_eq!(world.player, player_before);
        assert!(world.projectiles().is_empty());
    }

    #[test]
    fn spawned_projectile_starts_at_player() {
        let mut world = World::new();
        world.spawn_projectile();
        assert_eq!(world.projectiles().len(), 1);
        assert_eq!(world.projectiles()[0].pos(), world.player.pos());
        assert_eq!(world.projectiles()[0].vel, Vec2::new(1, 0));
    }
}
