// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.

use super::Message;
use crate::config::TICK_INTERVAL;
use crate::ui::notifications::ToastMessage;
use iced::{time, Subscription};

/// Creates the periodic tick driving toast deadlines and the exit fade.
///
/// Only active while at least one toast is mounted.
pub fn create_tick_subscription(has_toasts: bool) -> Subscription<Message> {
    if has_toasts {
        time::every(TICK_INTERVAL).map(tick)
    } else {
        Subscription::none()
    }
}

fn tick(instant: time::Instant) -> Message {
    Message::Toast(ToastMessage::Tick(instant))
}
