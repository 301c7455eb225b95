// SPDX-License-Identifier: MPL-2.0
//! Toast notification system.
//!
//! Toasts are transient messages that render into a positioned overlay
//! host, close on their own after a countdown, and pause that countdown
//! while hovered.
//!
//! # Components
//!
//! - [`notification`] - `ToastConfig` builder, `Variant` and `ToastId`
//! - [`position`] - The nine screen anchors and their placement
//! - [`lifecycle`] - Per-toast state machine (`Active` → `Closing` → `Removed`)
//! - [`timer`] - Owned deadline timers
//! - [`registry`] - Position-keyed overlay hosts
//! - [`icon`] - Variant → default icon resolution
//! - [`style`] - Variant colors and caller overrides
//! - [`manager`] - `Manager` owning hosts and toasts
//! - [`toast`] - Iced widgets for toasts and hosts
//!
//! # Usage
//!
//! ```ignore
//! use iced_toast::ui::notifications::{Manager, ToastConfig, ToastView};
//! use std::time::Instant;
//!
//! let mut manager = Manager::new();
//! manager.push(ToastConfig::success("Operation successful!"), Instant::now());
//!
//! // In your view function, stack the overlay above your content
//! let overlay = ToastView::view_overlay(&manager, Instant::now()).map(Message::Toast);
//! ```

pub mod icon;
pub mod lifecycle;
mod manager;
mod notification;
mod position;
pub mod registry;
pub mod style;
pub mod timer;
mod toast;

pub use icon::{default_icon, IconShape};
pub use lifecycle::{Countdown, Event, Outcome, Phase, Toast};
pub use manager::{Manager, Message as ToastMessage};
pub use notification::{CustomIcon, ToastConfig, ToastId, Variant};
pub use position::{Anchor, Placement, Position};
pub use registry::{Host, HostMetrics, HostRegistry};
pub use style::{parse_color, ToastColors};
pub use timer::{Timer, TimerKind};
pub use toast::{ToastView, CLOSE_LABEL};
