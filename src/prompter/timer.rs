//! The periodic scroll tick, as an owned timer handle.
//!
//! Entering Running arms exactly one tokio interval task that sends
//! [`AppEvent::ScrollTick`] every [`TICK_PERIOD`]; leaving Running aborts
//! it. `Drop` also aborts, so the tick stops on every exit path, including
//! abrupt teardown of the prompter screen. This is the only recurring timer
//! in the application.

use crate::app::event::AppEvent;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Fixed tick period: the offset advances by the scrolling speed once per
/// period.
pub const TICK_PERIOD: Duration = Duration::from_millis(100);

#[derive(Debug, Default)]
pub struct ScrollTimer {
    handle: Option<JoinHandle<()>>,
}

impl ScrollTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }

    /// Spawn the tick task. A second `arm` while armed is a no-op: at most
    /// one timer runs per controller instance.
    pub fn arm(&mut self, tx: UnboundedSender<AppEvent>) {
        if self.handle.is_some() {
            return;
        }
        self.handle = Some(tokio::spawn(async move {
            // The first tick fires one full period after arming, not
            // immediately.
            let start = tokio::time::Instant::now() + TICK_PERIOD;
            let mut interval = tokio::time::interval_at(start, TICK_PERIOD);
            loop {
                interval.tick().await;
                if tx.send(AppEvent::ScrollTick).is_err() {
                    break;
                }
            }
        }));
    }

    /// Abort the tick task. Safe to call while disarmed.
    pub fn disarm(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for ScrollTimer {
    fn drop(&mut self) {
        self.disarm();
    }
}
