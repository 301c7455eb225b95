// SPDX-License-Identifier: MPL-2.0
//! Overlay hosts keyed by screen position.
//!
//! The registry is an owned service: whoever renders toasts holds one and
//! passes it around explicitly. Hosts are created lazily on first request
//! and are never removed, so at most nine exist.

use super::notification::ToastId;
use super::position::{Placement, Position};
use crate::config::{DEFAULT_EDGE_OFFSET, DEFAULT_GAP, HOST_Z_INDEX};
use std::collections::BTreeMap;

/// Layout metrics shared by every host of a registry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostMetrics {
    /// Distance from the window edge for anchored axes.
    pub edge_offset: f32,
    /// Spacing between stacked toasts.
    pub gap: f32,
    /// Stacking order requested above application content.
    ///
    /// Informational only: iced has no z-index, so the overlay is drawn
    /// above content by being the last layer of the caller's `Stack`.
    pub z_index: u32,
}

impl Default for HostMetrics {
    fn default() -> Self {
        Self {
            edge_offset: DEFAULT_EDGE_OFFSET,
            gap: DEFAULT_GAP,
            z_index: HOST_Z_INDEX,
        }
    }
}

/// One overlay host: a vertical stack of toasts at a fixed anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct Host {
    position: Position,
    placement: Placement,
    gap: f32,
    z_index: u32,
    /// Mounted toasts, oldest first.
    toasts: Vec<ToastId>,
}

impl Host {
    fn new(position: Position, metrics: HostMetrics) -> Self {
        Self {
            position,
            placement: position.placement(metrics.edge_offset),
            gap: metrics.gap,
            z_index: metrics.z_index,
            toasts: Vec::new(),
        }
    }

    /// Stable element identifier, e.g. `toast-root-tR`.
    #[must_use]
    pub fn element_id(&self) -> String {
        format!("toast-root-{}", self.position.code())
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn placement(&self) -> Placement {
        self.placement
    }

    #[must_use]
    pub fn gap(&self) -> f32 {
        self.gap
    }

    /// Requested stacking order; see [`HostMetrics::z_index`].
    #[must_use]
    pub fn z_index(&self) -> u32 {
        self.z_index
    }

    /// Mounted toasts in mount order.
    #[must_use]
    pub fn toasts(&self) -> &[ToastId] {
        &self.toasts
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Appends a toast below the ones already mounted.
    pub fn mount(&mut self, id: ToastId) {
        if !self.toasts.contains(&id) {
            self.toasts.push(id);
        }
    }

    /// Detaches a toast. Returns `true` if it was mounted here.
    pub fn unmount(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|mounted| *mounted != id);
        self.toasts.len() < before
    }
}

/// Position → host mapping with lazy creation.
#[derive(Debug, Clone, Default)]
pub struct HostRegistry {
    metrics: HostMetrics,
    hosts: BTreeMap<Position, Host>,
}

impl HostRegistry {
    #[must_use]
    pub fn new(metrics: HostMetrics) -> Self {
        Self {
            metrics,
            hosts: BTreeMap::new(),
        }
    }

    /// Returns the host for `position`, creating it on first use.
    ///
    /// Repeated calls with the same position return the same host.
    pub fn get_or_create(&mut self, position: Position) -> &mut Host {
        let metrics = self.metrics;
        self.hosts.entry(position).or_insert_with(|| {
            tracing::debug!(%position, "creating toast host");
            Host::new(position, metrics)
        })
    }

    /// Returns the host for `position` if it was created.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<&Host> {
        self.hosts.get(&position)
    }

    /// Created hosts, ordered by position.
    pub fn hosts(&self) -> impl Iterator<Item = &Host> {
        self.hosts.values()
    }

    /// Detaches `id` from whichever host holds it.
    pub fn unmount(&mut self, id: ToastId) -> bool {
        self.hosts.values_mut().any(|host| host.unmount(id))
    }

    /// Number of hosts created so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    #[must_use]
    pub fn metrics(&self) -> HostMetrics {
        self.metrics
    }
}
