// SPDX-License-Identifier: MPL-2.0
//! Toast color resolution.
//!
//! Each variant has a theme of background, text and progress colors. Caller
//! overrides from [`ToastConfig`] replace individual entries.

use super::notification::{ToastConfig, Variant};
use crate::error::{Error, Result};
use crate::ui::design_tokens::{opacity, palette};
use iced::Color;

/// Colors used to draw one toast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastColors {
    pub background: Color,
    pub text: Color,
    pub progress: Color,
}

impl ToastColors {
    /// Theme defaults for a variant.
    #[must_use]
    pub fn for_variant(variant: Variant) -> Self {
        let background = match variant {
            Variant::Success => palette::SUCCESS_500,
            Variant::Error => palette::ERROR_500,
            Variant::Warning => palette::WARNING_500,
            Variant::Info => palette::INFO_500,
        };
        let text = match variant {
            Variant::Warning => palette::GRAY_900,
            Variant::Success | Variant::Error | Variant::Info => palette::WHITE,
        };
        Self {
            background,
            text,
            progress: Color {
                a: opacity::OVERLAY_STRONG,
                ..text
            },
        }
    }

    /// Variant theme with the caller's overrides applied.
    #[must_use]
    pub fn resolve(config: &ToastConfig) -> Self {
        let theme = Self::for_variant(config.variant());
        Self {
            background: config.background().unwrap_or(theme.background),
            text: config.text_color().unwrap_or(theme.text),
            progress: config.progress_color().unwrap_or(theme.progress),
        }
    }

    /// Scales every alpha channel by `alpha` (exit transition fade).
    #[must_use]
    pub fn faded(self, alpha: f32) -> Self {
        let fade = |color: Color| Color {
            a: color.a * alpha.clamp(0.0, 1.0),
            ..color
        };
        Self {
            background: fade(self.background),
            text: fade(self.text),
            progress: fade(self.progress),
        }
    }
}

/// Parses `#rgb`, `#rrggbb` or `#rrggbbaa` into a color.
pub fn parse_color(input: &str) -> Result<Color> {
    let invalid = || Error::InvalidColor(input.to_string());
    let hex = input.trim().strip_prefix('#').ok_or_else(invalid)?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |range: std::ops::Range<usize>| -> Result<u8> {
        u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
    };

    let (r, g, b, a) = match hex.len() {
        3 => {
            // #abc expands to #aabbcc
            let short = |i: usize| channel(i..i + 1).map(|v| v * 17);
            (short(0)?, short(1)?, short(2)?, 255)
        }
        6 => (channel(0..2)?, channel(2..4)?, channel(4..6)?, 255),
        8 => (channel(0..2)?, channel(2..4)?, channel(4..6)?, channel(6..8)?),
        _ => return Err(invalid()),
    };

    Ok(Color::from_rgba8(r, g, b, f32::from(a) / 255.0))
}
