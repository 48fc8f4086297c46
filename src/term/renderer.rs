//! TerminalRenderer: flushes a frame to a real terminal.
//!
//! Full redraw every tick: cursor home, then one line per grid row. The
//! grid is small enough that diffing would buy nothing.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{cursor, terminal, QueueableCommand};

use crate::term::frame::Frame;

pub struct TerminalRenderer {
    stdout: io::Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Flush one frame: cursor to top-left, then every row in order.
    pub fn draw(&mut self, frame: &Frame) -> Result<()> {
        self.stdout.queue(cursor::MoveTo(0, 0))?;

        let mut line = String::with_capacity(frame.width() as usize + 2);
        let height = frame.height();
        for (y, row) in frame.rows().enumerate() {
            line.clear();
            line.extend(row.iter());
            if (y as i32) + 1 < height {
                // Raw mode needs an explicit carriage return.
                line.push_str("\r\n");
            }
            self.stdout.write_all(line.as_bytes())?;
        }

        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}
