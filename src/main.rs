//! Terminal shooter runner (default binary).
//!
//! Runs the fixed-rate game loop: roll the spawn trigger, advance the world,
//! redraw, sleep out the rest of the tick. There is no in-loop exit
//! condition; the process runs until externally terminated.

use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;

use tui_blaster::core::{SimpleRng, World};
use tui_blaster::term::{GameView, TerminalRenderer};
use tui_blaster::types::{SPAWN_ROLL_HITS, SPAWN_ROLL_SIDES, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);
    let mut rng = SimpleRng::new(seed);

    let mut world = World::new();
    let view = GameView;

    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Wall-clock delta is tracked only to pace the tick; movement is
        // frame-based, not time-scaled.
        let tick_start = Instant::now();

        if rng.next_range(SPAWN_ROLL_SIDES) < SPAWN_ROLL_HITS {
            world.spawn_projectile();
        }

        world.update();

        let frame = view.render(&world);
        term.draw(&frame)?;

        let sleep = tick_duration
            .checked_sub(tick_start.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));
        thread::sleep(sleep);
    }
}
