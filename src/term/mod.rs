//! Terminal rendering module.
//!
//! Renders the world into a plain character frame and flushes it to the
//! terminal through crossterm. The frame/view side is pure and unit-testable;
//! only `TerminalRenderer` touches I/O.

pub mod frame;
pub mod game_view;
pub mod renderer;

pub use frame::Frame;
pub use game_view::GameView;
pub use renderer::TerminalRenderer;
