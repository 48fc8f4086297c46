//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Grid dimensions (terminal cells)
pub const GRID_W: i32 = 80;
pub const GRID_H: i32 = 24;

/// Game timing constants (in milliseconds)
pub const TICK_MS: u32 = 50;

/// Spawn trigger: fire when `rng.next_range(SPAWN_ROLL_SIDES) < SPAWN_ROLL_HITS`
pub const SPAWN_ROLL_SIDES: u32 = 10;
pub const SPAWN_ROLL_HITS: u32 = 1;

/// Display glyphs
pub const PLAYER_GLYPH: char = '@';
pub const PROJECTILE_GLYPH: char = '*';

/// Projectile velocity on spawn (cells per tick)
pub const PROJECTILE_VEL: Vec2 = Vec2 { x: 1, y: 0 };

/// Integer pair in grid coordinates.
///
/// Used for both positions and velocities. Positions may transiently
/// leave the grid before the world prunes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

impl Vec2 {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}
