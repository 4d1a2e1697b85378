//! Guided walkthrough over a fixed sequence of steps.
//!
//! An [Explorer] tracks the current position in an ordered sequence of
//! topics. Position moves by direct selection, by clamped next/previous
//! navigation, or by a timed auto-play that advances one step every
//! [ADVANCE_INTERVAL]. Auto-play owns at most one pending advance at a
//! time, armed as a deadline the event loop races against.

use std::time::{Duration, SystemTime};

/// Interval between automatic advances while playing.
pub const ADVANCE_INTERVAL: Duration = Duration::from_secs(3);

/// Position in a fixed sequence of steps, advanced by hand or on a timer.
///
/// Navigation clamps to `[0, len)` and never wraps. While playing, the
/// explorer advances one step per interval until a tick fires on the last
/// step, at which point auto-play stops and the position rewinds to the
/// first step.
pub struct Explorer {
    len: usize,
    index: usize,
    deadline: Option<SystemTime>,
}

impl Explorer {
    /// Create an explorer over `len` steps, positioned at the first.
    ///
    /// `len` must be non-zero.
    pub fn new(len: usize) -> Self {
        assert!(len > 0, "explorer requires at least one step");
        Self {
            len,
            index: 0,
            deadline: None,
        }
    }

    /// Current position.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of steps.
    pub fn steps(&self) -> usize {
        self.len
    }

    /// Whether auto-play is active.
    pub fn playing(&self) -> bool {
        self.deadline.is_some()
    }

    /// When the next automatic advance is due, if playing.
    pub fn deadline(&self) -> Option<SystemTime> {
        self.deadline
    }

    /// Jump directly to `index`. Out-of-range selections are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    /// Step forward, holding at the last step.
    pub fn next(&mut self) {
        if self.index + 1 < self.len {
            self.index += 1;
        }
    }

    /// Step back, holding at the first step.
    pub fn previous(&mut self) {
        if self.index > 0 {
            self.index -= 1;
        }
    }

    /// Start or stop auto-play.
    ///
    /// Enabling while already playing leaves the pending advance untouched
    /// (a second timer is never armed). Disabling cancels the pending
    /// advance.
    pub fn set_playing(&mut self, playing: bool, now: SystemTime) {
        match (playing, self.deadline.is_some()) {
            (true, false) => self.deadline = Some(now + ADVANCE_INTERVAL),
            (false, true) => self.deadline = None,
            _ => {}
        }
    }

    /// Apply an automatic advance if one is due at `now`.
    ///
    /// A tick on the last step stops auto-play and rewinds to the first
    /// step, so re-enabling walks the sequence from the start.
    pub fn tick(&mut self, now: SystemTime) {
        let Some(deadline) = self.deadline else {
            return;
        };
        if now < deadline {
            return;
        }
        if self.index + 1 >= self.len {
            self.index = 0;
            self.deadline = None;
        } else {
            self.index += 1;
            self.deadline = Some(now + ADVANCE_INTERVAL);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use commonware_macros::test_traced;
    use commonware_runtime::{deterministic, Clock, Runner};

    #[test]
    fn test_navigation_clamps() {
        let mut explorer = Explorer::new(3);
        assert_eq!(explorer.index(), 0);

        // Previous at the first step is a no-op.
        explorer.previous();
        assert_eq!(explorer.index(), 0);

        explorer.next();
        explorer.next();
        assert_eq!(explorer.index(), 2);

        // Next at the last step is a no-op.
        explorer.next();
        assert_eq!(explorer.index(), 2);

        explorer.previous();
        assert_eq!(explorer.index(), 1);
    }

    #[test]
    fn test_select_in_range() {
        let mut explorer = Explorer::new(4);
        explorer.select(3);
        assert_eq!(explorer.index(), 3);
        explorer.select(1);
        assert_eq!(explorer.index(), 1);

        // Out-of-range selections are ignored.
        explorer.select(4);
        assert_eq!(explorer.index(), 1);
    }

    #[test_traced]
    fn test_auto_play_walks_and_stops() {
        let executor = deterministic::Runner::default();
        executor.start(|context| async move {
            let mut explorer = Explorer::new(4);
            explorer.set_playing(true, context.current());
            assert!(explorer.playing());

            // N-1 advances land on the last step, still playing.
            for expected in 1..4 {
                let deadline = explorer.deadline().expect("advance should be armed");
                context.sleep_until(deadline).await;
                explorer.tick(context.current());
                assert_eq!(explorer.index(), expected);
            }
            assert!(explorer.playing());

            // The next tick stops auto-play and rewinds to the start.
            let deadline = explorer.deadline().expect("advance should be armed");
            context.sleep_until(deadline).await;
            explorer.tick(context.current());
            assert_eq!(explorer.index(), 0);
            assert!(!explorer.playing());

            // Re-enabling walks from the first step again.
            explorer.set_playing(true, context.current());
            let deadline = explorer.deadline().expect("advance should be armed");
            context.sleep_until(deadline).await;
            explorer.tick(context.current());
            assert_eq!(explorer.index(), 1);
            assert!(explorer.playing());
        });
    }

    #[test_traced]
    fn test_enable_while_playing_keeps_deadline() {
        let executor = deterministic::Runner::default();
        executor.start(|context| async move {
            let mut explorer = Explorer::new(3);
            let start = context.current();
            explorer.set_playing(true, start);
            let armed = explorer.deadline();

            // Enabling again later must not re-arm the pending advance.
            context.sleep(Duration::from_secs(1)).await;
            explorer.set_playing(true, context.current());
            assert_eq!(explorer.deadline(), armed);
        });
    }

    #[test_traced]
    fn test_disable_cancels_pending_advance() {
        let executor = deterministic::Runner::default();
        executor.start(|context| async move {
            let mut explorer = Explorer::new(3);
            explorer.set_playing(true, context.current());
            let deadline = explorer.deadline().expect("advance should be armed");
            explorer.set_playing(false, context.current());
            assert!(!explorer.playing());

            // A tick after the canceled deadline no longer advances.
            context.sleep_until(deadline).await;
            explorer.tick(context.current());
            assert_eq!(explorer.index(), 0);
        });
    }

    #[test_traced]
    fn test_tick_before_deadline_is_noop() {
        let executor = deterministic::Runner::default();
        executor.start(|context| async move {
            let mut explorer = Explorer::new(3);
            explorer.set_playing(true, context.current());
            context.sleep(Duration::from_secs(1)).await;
            explorer.tick(context.current());
            assert_eq!(explorer.index(), 0);
            assert!(explorer.playing());
        });
    }

    #[test]
    fn test_manual_navigation_keeps_playing() {
        let now = std::time::UNIX_EPOCH;
        let mut explorer = Explorer::new(4);
        explorer.set_playing(true, now);
        let armed = explorer.deadline();

        // Jumping around does not disturb the pending advance.
        explorer.select(2);
        explorer.previous();
        explorer.next();
        assert_eq!(explorer.deadline(), armed);
        assert_eq!(explorer.index(), 2);
    }
}
