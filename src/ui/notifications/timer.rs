// SPDX-License-Identifier: MPL-2.0
//! Owned deadline timers.
//!
//! A toast holds at most one [`Timer`]. Arming replaces the previous one and
//! cancelling drops it, so a cancelled or unmounted toast can never observe
//! a late firing.

use std::time::{Duration, Instant};

/// What happens when the timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// End of the visible countdown; starts the exit transition.
    Countdown,
    /// End of the exit transition; the toast is unmounted.
    Removal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    kind: TimerKind,
    deadline: Instant,
}

impl Timer {
    /// Arms a timer firing `after` the given instant.
    #[must_use]
    pub fn arm(kind: TimerKind, now: Instant, after: Duration) -> Self {
        Self {
            kind,
            deadline: now + after,
        }
    }

    #[must_use]
    pub fn kind(&self) -> TimerKind {
        self.kind
    }

    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    /// Time left until the deadline, zero once due.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_is_due_exactly_at_deadline() {
        let base = Instant::now();
        let timer = Timer::arm(TimerKind::Countdown, base, Duration::from_millis(300));

        assert!(!timer.is_due(base + Duration::from_millis(299)));
        assert!(timer.is_due(base + Duration::from_millis(300)));
        assert_eq!(timer.kind(), TimerKind::Countdown);
    }

    #[test]
    fn remaining_saturates_at_zero() {
        let base = Instant::now();
        let timer = Timer::arm(TimerKind::Removal, base, Duration::from_millis(500));

        assert_eq!(
            timer.remaining(base + Duration::from_millis(200)),
            Duration::from_millis(300)
        );
        assert_eq!(timer.remaining(base + Duration::from_secs(2)), Duration::ZERO);
    }
}
