//! Scroll position state machine.
//!
//! Two states, Paused (initial) and Running, toggled by a single user
//! action. While Running, each periodic tick advances the offset by the
//! configured speed. Offsets are measured in fine-grained scroll units and
//! mapped to terminal rows with [`UNITS_PER_ROW`]; at the default speed of
//! 30 that works out to about 6 rows per second.
//!
//! The controller owns the current offset: manual scrolling mutates the
//! same value the tick advances, so programmatic movement always continues
//! from wherever the reader actually is.

use tracing::debug;

/// Scroll units per terminal row.
pub const UNITS_PER_ROW: u64 = 50;

#[derive(Debug)]
pub struct ScrollController {
    running: bool,
    offset: u64,
    speed: u16,
}

impl ScrollController {
    /// A new controller starts Paused at offset zero.
    pub fn new(speed: u16) -> Self {
        Self {
            running: false,
            offset: 0,
            speed,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn speed(&self) -> u16 {
        self.speed
    }

    /// Flip between Paused and Running. Returns the new running state.
    pub fn toggle(&mut self) -> bool {
        self.running = !self.running;
        debug!(running = self.running, offset = self.offset, "scroll toggled");
        self.running
    }

    /// Force the Paused state (used when the prompter screen is torn down).
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// One periodic tick: advance by `speed` units. Ignored while Paused,
    /// so a tick already queued when the user pauses cannot move the text.
    /// Returns whether the offset changed.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.offset = self.offset.saturating_add(self.speed as u64);
        true
    }

    /// Accept an observed offset, e.g. after the view clamps or the user
    /// drags; later ticks continue from this position.
    pub fn observe(&mut self, offset: u64) {
        self.offset = offset;
    }

    /// Manual scroll by whole rows (negative scrolls up). The offset never
    /// goes below zero; there is no upper bound, scrolling past the end of
    /// the content is a visual no-op.
    pub fn scroll_rows(&mut self, rows: i64) {
        let delta = rows.unsigned_abs().saturating_mul(UNITS_PER_ROW);
        let next = if rows < 0 {
            self.offset.saturating_sub(delta)
        } else {
            self.offset.saturating_add(delta)
        };
        self.observe(next);
    }

    /// Jump back to the top of the script.
    pub fn rewind(&mut self) {
        self.observe(0);
    }

    /// The offset expressed in whole terminal rows.
    pub fn row_offset(&self) -> u64 {
        self.offset / UNITS_PER_ROW
    }
}
