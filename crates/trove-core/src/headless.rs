//! A terminal-free [`Driver`] that replays scripted input and records the
//! frames it is asked to flush.
//!
//! Used to exercise models through the real [`App`](crate::app::App) loop in
//! tests and in non-interactive runs.

use std::collections::VecDeque;
use std::error::Error;
use std::sync::mpsc::Sender;

use crate::app::Driver;
use crate::glyph::Glyph;
use crate::grid::{Frame, Grid};
use crate::messages::Msg;

/// Replays one scripted message per poll, then sends [`Msg::Quit`] once the
/// script runs out.
#[derive(Debug, Default)]
pub struct ScriptedDriver {
    script: VecDeque<Msg>,
    frames: Vec<Frame>,
    initialized: bool,
    closed: bool,
}

impl ScriptedDriver {
    pub fn new(script: impl IntoIterator<Item = Msg>) -> Self {
        Self {
            script: script.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Every frame flushed so far, oldest first.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Replay all recorded frames onto a blank canvas, giving what a real
    /// screen would show now.
    pub fn screen(&self) -> Grid<Glyph> {
        let bounds = self.frames.last().map(|f| f.bounds).unwrap_or_default();
        let mut screen = Grid::filled(bounds.rows, bounds.cols, Glyph::default());
        for fc in self.frames.iter().flat_map(|f| f.cells.iter()) {
            screen.set(fc.pos, fc.glyph);
        }
        screen
    }

    /// The screen as plain text, one line per row with trailing spaces
    /// trimmed.
    pub fn screen_text(&self) -> String {
        let screen = self.screen();
        let mut out = String::new();
        for row in 0..screen.rows() {
            let line: String = (0..screen.cols())
                .filter_map(|col| screen.get((row, col).into()).map(|g| g.ch))
                .collect();
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}

impl Driver for ScriptedDriver {
    fn init(&mut self) -> Result<(), Box<dyn Error>> {
        self.initialized = true;
        Ok(())
    }

    fn poll_msgs(&mut self, tx: &Sender<Msg>) -> Result<(), Box<dyn Error>> {
        let msg = self.script.pop_front().unwrap_or(Msg::Quit);
        tx.send(msg)?;
        Ok(())
    }

    fn flush(&mut self, frame: Frame) -> Result<(), Box<dyn Error>> {
        if !self.initialized {
            return Err("flush before init".into());
        }
        self.frames.push(frame);
        Ok(())
    }

    fn close(&mut self) {
        self.closed = true;
    }
}
