//! Gravity timer driven by elapsed milliseconds.
//!
//! There is at most one pending tick at a time. The front end calls [`TickScheduler::sync`]
//! after every engine change and [`TickScheduler::advance`] with the time that has passed.

#[derive(Debug, Clone, Default)]
pub struct TickScheduler {
    /// Milliseconds until the pending tick fires.
    pending_ms: Option<u32>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bring the timer in line with the engine.
    ///
    /// - `running=false`: drop the pending tick, if any.
    /// - `running=true` with nothing pending: arm a full `interval_ms`.
    /// - `running=true` with a tick pending: keep it; an interval change applies to the next one.
    pub fn sync(&mut self, running: bool, interval_ms: u32) {
        if !running {
            self.pending_ms = None;
            return;
        }
        if self.pending_ms.is_none() {
            self.pending_ms = Some(interval_ms);
        }
    }

    /// Let `elapsed_ms` pass. Returns `true` when the pending tick fires.
    ///
    /// Fires at most once per call; leftover time is dropped.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        let Some(remaining) = self.pending_ms else {
            return false;
        };
        if elapsed_ms >= remaining {
            self.pending_ms = None;
            return true;
        }
        self.pending_ms = Some(remaining - elapsed_ms);
        false
    }

    pub fn remaining_ms(&self) -> Option<u32> {
        self.pending_ms
    }

    pub fn is_armed(&self) -> bool {
        self.pending_ms.is_some()
    }

    pub fn cancel(&mut self) {
        self.pending_ms = None;
    }
}
