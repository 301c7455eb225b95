// SPDX-License-Identifier: MPL-2.0
//! Variant icons.
//!
//! Default icons are 24×24 stroke SVGs drawn in `currentColor`, so the
//! renderer tints them with the toast's text color.

use super::notification::{CustomIcon, ToastConfig, Variant};
use iced::widget::svg;
use std::sync::OnceLock;

const CHECK_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" fill="none" viewBox="0 0 24 24" stroke="currentColor"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5 13l4 4L19 7"/></svg>"#;

const CROSS_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" fill="none" viewBox="0 0 24 24" stroke="currentColor"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/></svg>"#;

const TRIANGLE_EXCLAMATION_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" fill="none" viewBox="0 0 24 24" stroke="currentColor"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 9v2m0 4h.01M10.29 3.86L1.82 18a2 2 0 001.71 3h16.94a2 2 0 001.71-3L13.71 3.86a2 2 0 00-3.42 0z"/></svg>"#;

const CIRCLE_INFO_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" fill="none" viewBox="0 0 24 24" stroke="currentColor"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M13 16h-1v-4h-1m1-4h.01M12 2a10 10 0 100 20 10 10 0 000-20z"/></svg>"#;

/// The four built-in icon shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconShape {
    Check,
    Cross,
    TriangleExclamation,
    CircleInfo,
}

impl IconShape {
    /// SVG markup of the shape.
    #[must_use]
    pub fn svg_markup(self) -> &'static str {
        match self {
            IconShape::Check => CHECK_SVG,
            IconShape::Cross => CROSS_SVG,
            IconShape::TriangleExclamation => TRIANGLE_EXCLAMATION_SVG,
            IconShape::CircleInfo => CIRCLE_INFO_SVG,
        }
    }

    /// Cached SVG handle for the shape.
    #[must_use]
    pub fn handle(self) -> svg::Handle {
        static HANDLES: OnceLock<[svg::Handle; 4]> = OnceLock::new();
        let handles = HANDLES.get_or_init(|| {
            [
                IconShape::Check,
                IconShape::Cross,
                IconShape::TriangleExclamation,
                IconShape::CircleInfo,
            ]
            .map(|shape| svg::Handle::from_memory(shape.svg_markup().as_bytes()))
        });
        handles[self as usize].clone()
    }
}

/// Returns the default icon for a variant.
#[must_use]
pub fn default_icon(variant: Variant) -> IconShape {
    match variant {
        Variant::Success => IconShape::Check,
        Variant::Error => IconShape::Cross,
        Variant::Warning => IconShape::TriangleExclamation,
        Variant::Info => IconShape::CircleInfo,
    }
}

/// Icon actually displayed by a toast.
#[derive(Debug, Clone, Copy)]
pub enum ResolvedIcon<'a> {
    Default(IconShape),
    Custom(&'a CustomIcon),
}

/// Picks the caller's icon when present, the variant default otherwise.
#[must_use]
pub fn resolve(config: &ToastConfig) -> ResolvedIcon<'_> {
    match config.custom_icon() {
        Some(custom) => ResolvedIcon::Custom(custom),
        None => ResolvedIcon::Default(default_icon(config.variant())),
    }
}
