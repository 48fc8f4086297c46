//! A plain character framebuffer.
//!
//! One frame is rebuilt from world state every tick; it carries no styling
//! and no persistent identity.

use crate::types::{GRID_H, GRID_W};

/// 2D buffer of display characters, blank on creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: i32,
    height: i32,
    cells: Vec<char>,
}

impl Frame {
    pub fn new(width: i32, height: i32) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![' '; len],
        }
    }

    /// A frame sized to the game grid.
    pub fn grid_sized() -> Self {
        Self::new(GRID_W, GRID_H)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: i32, y: i32) -> Option<char> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Write a glyph; out-of-bounds coordinates are silently skipped.
    pub fn set(&mut self, x: i32, y: i32, ch: char) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = ch;
        }
    }

    /// Iterate rows top to bottom, each as a `&[char]` of length `width`.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.width as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_frame_is_blank() {
        let frame = Frame::new(4, 3);
        assert!(frame.rows().all(|row| row.iter().all(|&c| c == ' ')));
        assert_eq!(frame.rows().count(), 3);
    }

    #[test]
    fn set_then_get_roundtrips() {
        let mut frame = Frame::new(4, 3);
        frame.set(2, 1, 'x');
        assert_eq!(frame.get(2, 1), Some('x'));
        assert_eq!(frame.get(0, 0), Some(' '));
    }

    #[test]
    fn out_of_bounds_set_is_a_silent_noop() {
        let mut frame = Frame::new(4, 3);
        frame.set(-1, 0, 'x');
        frame.set(4, 0, 'x');
        frame.set(0, 3, 'x');
        assert!(frame.rows().all(|row| row.iter().all(|&c| c == ' ')));
        assert_eq!(frame.get(4, 0), None);
    }
}
