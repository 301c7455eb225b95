// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Countdown**: Toast display duration and exit transition
//! - **Overlay**: Host placement and stacking metrics
//! - **Animation**: Redraw cadence while toasts are alive

use std::time::Duration;

// ==========================================================================
// Countdown Defaults
// ==========================================================================

/// Default time a toast stays on screen before closing (milliseconds).
pub const DEFAULT_DURATION_MS: u64 = 3000;

/// Length of the exit transition between `Closing` and `Removed`.
pub const CLOSE_TRANSITION: Duration = Duration::from_millis(500);

// ==========================================================================
// Overlay Defaults
// ==========================================================================

/// Distance between an anchored host and the window edge (logical pixels).
pub const DEFAULT_EDGE_OFFSET: f32 = 20.0;

/// Vertical spacing between toasts stacked in the same host.
pub const DEFAULT_GAP: f32 = 10.0;

/// Stacking order of overlay hosts relative to application content.
pub const HOST_Z_INDEX: u32 = 1000;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Interval of the tick subscription that drives deadlines and redraws.
pub const TICK_INTERVAL: Duration = Duration::from_millis(16);
