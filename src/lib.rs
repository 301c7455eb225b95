// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` is a toast notification widget for the Iced GUI framework.
//!
//! Toasts are short-lived messages stacked at one of nine screen anchors.
//! Each one closes itself after a countdown, pauses while hovered, and fades
//! out before it is unmounted. A small demo application is included.

#![doc(html_root_url = "https://docs.rs/iced_toast/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod ui;
