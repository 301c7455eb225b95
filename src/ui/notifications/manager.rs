// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `Manager` owns the host registry and every live toast. It routes UI
//! messages to the addressed instance, fires countdown deadlines on ticks,
//! and unmounts toasts once their exit transition finishes.

use super::lifecycle::{Event, Outcome, Toast};
use super::notification::{ToastConfig, ToastId};
use super::position::Position;
use super::registry::{Host, HostMetrics, HostRegistry};
use std::collections::HashMap;
use std::time::Instant;

/// Messages for toast state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The pointer moved over a toast.
    PointerEntered(ToastId),
    /// The pointer left a toast.
    PointerLeft(ToastId),
    /// The close button of a toast was pressed.
    Close(ToastId),
    /// Periodic tick driving deadlines and the exit fade.
    Tick(Instant),
}

/// Owns every mounted toast and the hosts they render into.
#[derive(Debug, Default)]
pub struct Manager {
    registry: HostRegistry,
    toasts: HashMap<ToastId, Toast>,
}

impl Manager {
    /// Creates a manager with default host metrics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a manager whose hosts use the given metrics.
    #[must_use]
    pub fn with_metrics(metrics: HostMetrics) -> Self {
        Self {
            registry: HostRegistry::new(metrics),
            toasts: HashMap::new(),
        }
    }

    /// Mounts a toast into the host for its position and starts its countdown.
    pub fn push(&mut self, config: ToastConfig, now: Instant) -> ToastId {
        let toast = Toast::mount(config, now);
        let id = toast.id();
        self.registry
            .get_or_create(toast.config().position())
            .mount(id);
        self.toasts.insert(id, toast);
        id
    }

    /// Handles a toast message.
    ///
    /// `now` is used for pointer and close messages; ticks carry their own
    /// instant.
    pub fn handle_message(&mut self, message: &Message, now: Instant) {
        match *message {
            Message::PointerEntered(id) => {
                self.deliver(id, Event::PointerEntered, now);
            }
            Message::PointerLeft(id) => {
                self.deliver(id, Event::PointerLeft, now);
            }
            Message::Close(id) => {
                self.close(id, now);
            }
            Message::Tick(instant) => self.tick(instant),
        }
    }

    /// Fires due timers on every toast and unmounts the removed ones.
    pub fn tick(&mut self, now: Instant) {
        let removed: Vec<ToastId> = self
            .toasts
            .values_mut()
            .filter_map(|toast| (toast.poll(now) == Outcome::Removed).then(|| toast.id()))
            .collect();

        for id in removed {
            self.detach(id);
        }
    }

    /// Starts the exit transition of a toast.
    ///
    /// Returns `true` if the toast entered `Closing` because of this call.
    pub fn close(&mut self, id: ToastId, now: Instant) -> bool {
        self.deliver(id, Event::CloseRequested, now) == Outcome::Closing
    }

    /// Starts the exit transition of every live toast.
    pub fn close_all(&mut self, now: Instant) {
        let ids: Vec<ToastId> = self.toasts.keys().copied().collect();
        for id in ids {
            self.deliver(id, Event::CloseRequested, now);
        }
    }

    /// Tears a toast down immediately, cancelling its timers.
    ///
    /// Returns `true` if the toast was mounted.
    pub fn unmount(&mut self, id: ToastId, now: Instant) -> bool {
        match self.toasts.get_mut(&id) {
            Some(toast) => {
                toast.handle(Event::Unmounted, now);
                self.detach(id);
                true
            }
            None => false,
        }
    }

    /// Returns a mounted toast.
    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.get(&id)
    }

    /// Toasts mounted at `position`, in mount order.
    pub fn toasts_at(&self, position: Position) -> impl Iterator<Item = &Toast> {
        self.registry
            .get(position)
            .into_iter()
            .flat_map(Host::toasts)
            .filter_map(|id| self.toasts.get(id))
    }

    /// Hosts created so far, including empty ones.
    pub fn hosts(&self) -> impl Iterator<Item = &Host> {
        self.registry.hosts()
    }

    #[must_use]
    pub fn registry(&self) -> &HostRegistry {
        &self.registry
    }

    /// Number of mounted toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Whether ticks are needed: any toast is still mounted.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.toasts.is_empty()
    }

    fn deliver(&mut self, id: ToastId, event: Event, now: Instant) -> Outcome {
        let Some(toast) = self.toasts.get_mut(&id) else {
            tracing::trace!(%id, ?event, "event for unmounted toast dropped");
            return Outcome::Unchanged;
        };
        let outcome = toast.handle(event, now);
        if outcome == Outcome::Removed {
            self.detach(id);
        }
        outcome
    }

    fn detach(&mut self, id: ToastId) {
        self.toasts.remove(&id);
        self.registry.unmount(id);
        tracing::debug!(%id, "toast unmounted");
    }
}
