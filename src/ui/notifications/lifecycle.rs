// SPDX-License-Identifier: MPL-2.0
//! Per-toast lifecycle state machine.
//!
//! ```text
//!            pointer enters             pointer leaves
//!   Active ------------------> Paused ------------------> Active
//!     |                          |
//!     | countdown due / close    | close
//!     v                          v
//!   Closing --(500 ms)--> Removed
//! ```
//!
//! [`Countdown`] holds the timing state and transitions as a pure function
//! of (state, event, now). [`Toast`] pairs it with the caller's
//! [`ToastConfig`] and an identity. Neither reads a clock: every call takes
//! the current instant, which keeps the machine deterministic under test.

use super::notification::{ToastConfig, ToastId};
use super::timer::{Timer, TimerKind};
use crate::config::CLOSE_TRANSITION;
use std::time::{Duration, Instant};

/// Lifecycle phase of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Visible, countdown running.
    Active,
    /// Visible, countdown suspended while the pointer is over the toast.
    Paused,
    /// Exit transition in progress.
    Closing,
    /// Terminal. Produces no further output.
    Removed,
}

/// Inputs to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The armed timer of this kind reached its deadline.
    TimerElapsed(TimerKind),
    /// The close button was pressed or the owner asked the toast to close.
    CloseRequested,
    PointerEntered,
    PointerLeft,
    /// The toast was torn down from outside.
    Unmounted,
}

/// What a transition did, for the owner to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Unchanged,
    Paused,
    Resumed,
    Closing,
    Removed,
}

/// Timing state of one toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    duration: Duration,
    phase: Phase,
    /// Countdown left at `started_at`.
    remaining: Duration,
    /// Start of the current running segment.
    started_at: Instant,
    closing_since: Option<Instant>,
    timer: Option<Timer>,
}

impl Countdown {
    /// Starts a running countdown of `duration`.
    #[must_use]
    pub fn start(duration: Duration, now: Instant) -> Self {
        Self {
            duration,
            phase: Phase::Active,
            remaining: duration,
            started_at: now,
            closing_since: None,
            timer: Some(Timer::arm(TimerKind::Countdown, now, duration)),
        }
    }

    /// Applies one event.
    ///
    /// `TimerElapsed` is only honoured when a timer of that kind is armed and
    /// due at `now`; anything else leaves the state untouched.
    #[must_use]
    pub fn next(self, event: Event, now: Instant) -> (Self, Outcome) {
        match (self.phase, event) {
            (Phase::Removed, _) => (self, Outcome::Unchanged),
            (_, Event::Unmounted) => (self.removed(), Outcome::Removed),
            (_, Event::TimerElapsed(kind)) if !self.timer_due(kind, now) => {
                (self, Outcome::Unchanged)
            }
            (Phase::Active, Event::TimerElapsed(TimerKind::Countdown))
            | (Phase::Active | Phase::Paused, Event::CloseRequested) => {
                (self.begin_closing(now), Outcome::Closing)
            }
            (Phase::Closing, Event::TimerElapsed(TimerKind::Removal)) => {
                (self.removed(), Outcome::Removed)
            }
            (Phase::Active, Event::PointerEntered) => {
                let paused = Self {
                    phase: Phase::Paused,
                    remaining: self.remaining_at(now),
                    timer: None,
                    ..self
                };
                (paused, Outcome::Paused)
            }
            (Phase::Paused, Event::PointerLeft) => {
                let resumed = Self {
                    phase: Phase::Active,
                    started_at: now,
                    timer: Some(Timer::arm(TimerKind::Countdown, now, self.remaining)),
                    ..self
                };
                (resumed, Outcome::Resumed)
            }
            _ => (self, Outcome::Unchanged),
        }
    }

    /// Fires every timer due at `now`, each at its own deadline.
    ///
    /// A late poll still closes at the countdown deadline and removes exactly
    /// one exit transition later. Returns the last transition taken.
    #[must_use]
    pub fn poll(self, now: Instant) -> (Self, Outcome) {
        let mut state = self;
        let mut outcome = Outcome::Unchanged;
        while let Some(timer) = state.timer.filter(|t| t.is_due(now)) {
            let (next, step) = state.next(Event::TimerElapsed(timer.kind()), timer.deadline());
            if step == Outcome::Unchanged {
                break;
            }
            state = next;
            outcome = step;
        }
        (state, outcome)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// The armed timer, if any.
    #[must_use]
    pub fn timer(&self) -> Option<Timer> {
        self.timer
    }

    /// Instant the exit transition started.
    #[must_use]
    pub fn closing_since(&self) -> Option<Instant> {
        self.closing_since
    }

    /// Countdown left at `now`. Frozen while paused and once closing.
    #[must_use]
    pub fn remaining_at(&self, now: Instant) -> Duration {
        match self.phase {
            Phase::Active => self
                .remaining
                .saturating_sub(now.saturating_duration_since(self.started_at)),
            Phase::Paused | Phase::Closing => self.remaining,
            Phase::Removed => Duration::ZERO,
        }
    }

    /// Fraction of the countdown still left, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 0.0;
        }
        (self.remaining_at(now).as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Opacity for the exit transition: 1 until closing, then linear to 0.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        match (self.phase, self.closing_since) {
            (Phase::Active | Phase::Paused, _) => 1.0,
            (Phase::Closing, Some(since)) => {
                let elapsed = now.saturating_duration_since(since).as_secs_f32();
                (1.0 - elapsed / CLOSE_TRANSITION.as_secs_f32()).clamp(0.0, 1.0)
            }
            _ => 0.0,
        }
    }

    fn timer_due(&self, kind: TimerKind, now: Instant) -> bool {
        self.timer
            .is_some_and(|timer| timer.kind() == kind && timer.is_due(now))
    }

    fn begin_closing(self, now: Instant) -> Self {
        Self {
            phase: Phase::Closing,
            remaining: self.remaining_at(now),
            started_at: now,
            closing_since: Some(now),
            timer: Some(Timer::arm(TimerKind::Removal, now, CLOSE_TRANSITION)),
            ..self
        }
    }

    fn removed(self) -> Self {
        Self {
            phase: Phase::Removed,
            remaining: Duration::ZERO,
            timer: None,
            ..self
        }
    }
}

/// A mounted toast: identity, caller configuration and countdown.
#[derive(Debug, Clone)]
pub struct Toast {
    id: ToastId,
    config: ToastConfig,
    countdown: Countdown,
}

impl Toast {
    /// Mounts a toast and arms its countdown for the configured duration.
    pub fn mount(config: ToastConfig, now: Instant) -> Self {
        let id = ToastId::new();
        tracing::debug!(
            %id,
            variant = %config.variant(),
            position = %config.position(),
            duration_ms = config.duration().as_millis() as u64,
            "toast mounted"
        );
        Self {
            id,
            countdown: Countdown::start(config.duration(), now),
            config,
        }
    }

    /// Delivers an event after firing any timer already due at `now`.
    pub fn handle(&mut self, event: Event, now: Instant) -> Outcome {
        let fired = self.poll(now);
        let (next, outcome) = self.countdown.next(event, now);
        self.countdown = next;
        self.trace(outcome);
        if outcome == Outcome::Unchanged {
            fired
        } else {
            outcome
        }
    }

    /// Fires any timer due at `now`.
    pub fn poll(&mut self, now: Instant) -> Outcome {
        let (next, outcome) = self.countdown.poll(now);
        self.countdown = next;
        self.trace(outcome);
        outcome
    }

    /// Requests the exit transition, cancelling any pending countdown.
    pub fn close(&mut self, now: Instant) -> Outcome {
        self.handle(Event::CloseRequested, now)
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn config(&self) -> &ToastConfig {
        &self.config
    }

    #[must_use]
    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.countdown.phase()
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.phase() == Phase::Paused
    }

    #[must_use]
    pub fn is_closing(&self) -> bool {
        self.phase() == Phase::Closing
    }

    #[must_use]
    pub fn is_removed(&self) -> bool {
        self.phase() == Phase::Removed
    }

    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.countdown.remaining_at(now)
    }

    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        self.countdown.progress(now)
    }

    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        self.countdown.opacity(now)
    }

    fn trace(&self, outcome: Outcome) {
        match outcome {
            Outcome::Unchanged => {}
            Outcome::Paused | Outcome::Resumed => {
                tracing::trace!(id = %self.id, ?outcome, "toast countdown");
            }
            Outcome::Closing | Outcome::Removed => {
                tracing::debug!(id = %self.id, ?outcome, "toast lifecycle");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn start_arms_countdown_for_full_duration() {
        let base = Instant::now();
        let countdown = Countdown::start(ms(3000), base);

        assert_eq!(countdown.phase(), Phase::Active);
        let timer = countdown.timer().expect("countdown must be armed");
        assert_eq!(timer.kind(), TimerKind::Countdown);
        assert_eq!(timer.deadline(), base + ms(3000));
    }

    #[test]
    fn premature_timer_event_is_ignored() {
        let base = Instant::now();
        let countdown = Countdown::start(ms(3000), base);

        let (next, outcome) = countdown.next(Event::TimerElapsed(TimerKind::Countdown), base + ms(10));
        assert_eq!(outcome, Outcome::Unchanged);
        assert_eq!(next, countdown);
    }

    #[test]
    fn wrong_timer_kind_is_ignored() {
        let base = Instant::now();
        let countdown = Countdown::start(ms(100), base);

        let (_, outcome) = countdown.next(Event::TimerElapsed(TimerKind::Removal), base + ms(600));
        assert_eq!(outcome, Outcome::Unchanged);
    }

    #[test]
    fn pointer_enter_subtracts_elapsed_time() {
        let base = Instant::now();
        let (paused, outcome) = Countdown::start(ms(5000), base).next(Event::PointerEntered, base + ms(1000));

        assert_eq!(outcome, Outcome::Paused);
        assert_eq!(paused.phase(), Phase::Paused);
        assert!(paused.timer().is_none());
        assert_eq!(paused.remaining_at(base + ms(4000)), ms(4000));
    }

    #[test]
    fn pointer_leave_rearms_for_remaining_time() {
        let base = Instant::now();
        let (paused, _) = Countdown::start(ms(5000), base).next(Event::PointerEntered, base + ms(1000));
        let (resumed, outcome) = paused.next(Event::PointerLeft, base + ms(3000));

        assert_eq!(outcome, Outcome::Resumed);
        let timer = resumed.timer().expect("countdown must be re-armed");
        assert_eq!(timer.deadline(), base + ms(7000));
    }

    #[test]
    fn pointer_leave_without_enter_is_ignored() {
        let base = Instant::now();
        let (_, outcome) = Countdown::start(ms(5000), base).next(Event::PointerLeft, base + ms(10));
        assert_eq!(outcome, Outcome::Unchanged);
    }

    #[test]
    fn close_while_paused_goes_to_closing() {
        let base = Instant::now();
        let (paused, _) = Countdown::start(ms(5000), base).next(Event::PointerEntered, base);
        let (closing, outcome) = paused.next(Event::CloseRequested, base + ms(20));

        assert_eq!(outcome, Outcome::Closing);
        let timer = closing.timer().expect("removal must be armed");
        assert_eq!(timer.kind(), TimerKind::Removal);
        assert_eq!(timer.deadline(), base + ms(520));
    }

    #[test]
    fn pointer_events_during_closing_do_not_rearm() {
        let base = Instant::now();
        let (closing, _) = Countdown::start(ms(5000), base).next(Event::CloseRequested, base);

        let (after_enter, outcome) = closing.next(Event::PointerEntered, base + ms(100));
        assert_eq!(outcome, Outcome::Unchanged);
        let (after_leave, outcome) = after_enter.next(Event::PointerLeft, base + ms(200));
        assert_eq!(outcome, Outcome::Unchanged);
        assert_eq!(after_leave.timer().map(|t| t.kind()), Some(TimerKind::Removal));
    }

    #[test]
    fn removed_is_terminal() {
        let base = Instant::now();
        let (removed, _) = Countdown::start(ms(5000), base).next(Event::Unmounted, base);

        for event in [
            Event::CloseRequested,
            Event::PointerEntered,
            Event::PointerLeft,
            Event::Unmounted,
            Event::TimerElapsed(TimerKind::Removal),
        ] {
            let (next, outcome) = removed.next(event, base + ms(10_000));
            assert_eq!(outcome, Outcome::Unchanged);
            assert_eq!(next, removed);
        }
        assert!(removed.timer().is_none());
    }

    #[test]
    fn late_poll_uses_timer_deadlines() {
        let base = Instant::now();
        let countdown = Countdown::start(ms(1000), base);

        let (closing, outcome) = countdown.poll(base + ms(1200));
        assert_eq!(outcome, Outcome::Closing);
        assert_eq!(closing.closing_since(), Some(base + ms(1000)));

        let (_, outcome) = closing.poll(base + ms(1499));
        assert_eq!(outcome, Outcome::Unchanged);
        let (removed, outcome) = closing.poll(base + ms(1500));
        assert_eq!(outcome, Outcome::Removed);
        assert_eq!(removed.phase(), Phase::Removed);
    }

    #[test]
    fn very_late_poll_goes_straight_to_removed() {
        let base = Instant::now();
        let (removed, outcome) = Countdown::start(ms(1000), base).poll(base + ms(5000));
        assert_eq!(outcome, Outcome::Removed);
        assert_eq!(removed.phase(), Phase::Removed);
    }

    #[test]
    fn paused_past_deadline_clamps_remaining_to_zero() {
        let base = Instant::now();
        let countdown = Countdown::start(ms(100), base);
        let (paused, _) = countdown.next(Event::PointerEntered, base + ms(250));
        assert_eq!(paused.remaining_at(base + ms(300)), Duration::ZERO);

        let (resumed, _) = paused.next(Event::PointerLeft, base + ms(400));
        let (_, outcome) = resumed.poll(base + ms(400));
        assert_eq!(outcome, Outcome::Closing);
    }

    #[test]
    fn zero_duration_has_zero_progress() {
        let base = Instant::now();
        assert_eq!(Countdown::start(Duration::ZERO, base).progress(base), 0.0);
    }

    #[test]
    fn toast_handle_fires_due_timer_before_event() {
        let base = Instant::now();
        let mut toast = Toast::mount(ToastConfig::new("hi").with_duration(ms(1000)), base);

        // Hovering after the deadline must not resurrect the countdown.
        let outcome = toast.handle(Event::PointerEntered, base + ms(1100));
        assert_eq!(outcome, Outcome::Closing);
        assert!(toast.is_closing());
    }

    #[test]
    fn toast_close_reports_closing_once() {
        let base = Instant::now();
        let mut toast = Toast::mount(ToastConfig::new("hi"), base);

        assert_eq!(toast.close(base + ms(10)), Outcome::Closing);
        assert_eq!(toast.close(base + ms(20)), Outcome::Unchanged);
    }
}
