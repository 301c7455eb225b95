// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the caller-supplied [`ToastConfig`], the [`Variant`]
//! severity levels and the identifier used to address a mounted toast.

use super::position::Position;
use crate::config::DEFAULT_DURATION_MS;
use crate::error::Error;
use iced::widget::svg;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Unique identifier for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Severity level; selects the color theme and the default icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::Success,
        Variant::Error,
        Variant::Warning,
        Variant::Info,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Variant::Success => "success",
            Variant::Error => "error",
            Variant::Warning => "warning",
            Variant::Info => "info",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "success" => Ok(Variant::Success),
            "error" => Ok(Variant::Error),
            "warning" => Ok(Variant::Warning),
            "info" => Ok(Variant::Info),
            _ => Err(Error::InvalidVariant(s.to_string())),
        }
    }
}

/// Caller-supplied icon that replaces the variant's default icon entirely.
#[derive(Debug, Clone)]
pub enum CustomIcon {
    /// SVG document rendered at icon size.
    Svg(svg::Handle),
    /// A short text glyph such as an emoji.
    Glyph(String),
}

impl CustomIcon {
    pub fn svg(bytes: impl Into<Cow<'static, [u8]>>) -> Self {
        CustomIcon::Svg(svg::Handle::from_memory(bytes))
    }

    pub fn glyph(glyph: impl Into<String>) -> Self {
        CustomIcon::Glyph(glyph.into())
    }
}

/// Immutable description of a toast, fixed for the instance's lifetime.
#[derive(Debug, Clone)]
pub struct ToastConfig {
    message: String,
    duration: Duration,
    variant: Variant,
    position: Position,
    background: Option<Color>,
    text_color: Option<Color>,
    progress_color: Option<Color>,
    custom_icon: Option<CustomIcon>,
}

impl ToastConfig {
    /// Creates an info toast at the top-right anchor with the default duration.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            duration: Duration::from_millis(DEFAULT_DURATION_MS),
            variant: Variant::default(),
            position: Position::default(),
            background: None,
            text_color: None,
            progress_color: None,
            custom_icon: None,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message).with_variant(Variant::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message).with_variant(Variant::Error)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message).with_variant(Variant::Warning)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message).with_variant(Variant::Info)
    }

    /// Sets the countdown length.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Overrides the variant's background color.
    #[must_use]
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Overrides the variant's text (and default icon) color.
    #[must_use]
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    /// Overrides the progress bar fill.
    #[must_use]
    pub fn with_progress_color(mut self, color: Color) -> Self {
        self.progress_color = Some(color);
        self
    }

    /// Replaces the variant's default icon.
    #[must_use]
    pub fn with_icon(mut self, icon: CustomIcon) -> Self {
        self.custom_icon = Some(icon);
        self
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn background(&self) -> Option<Color> {
        self.background
    }

    #[must_use]
    pub fn text_color(&self) -> Option<Color> {
        self.text_color
    }

    #[must_use]
    pub fn progress_color(&self) -> Option<Color> {
        self.progress_color
    }

    #[must_use]
    pub fn custom_icon(&self) -> Option<&CustomIcon> {
        self.custom_icon.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_ids_are_unique() {
        assert_ne!(ToastId::new(), ToastId::new());
    }

    #[test]
    fn new_uses_documented_defaults() {
        let toast = ToastConfig::new("hello");

        assert_eq!(toast.message(), "hello");
        assert_eq!(toast.duration(), Duration::from_millis(3000));
        assert_eq!(toast.variant(), Variant::Info);
        assert_eq!(toast.position(), Position::TopRight);
        assert!(toast.background().is_none());
        assert!(toast.text_color().is_none());
        assert!(toast.progress_color().is_none());
        assert!(toast.custom_icon().is_none());
    }

    #[test]
    fn constructors_set_correct_variant() {
        assert_eq!(ToastConfig::success("").variant(), Variant::Success);
        assert_eq!(ToastConfig::error("").variant(), Variant::Error);
        assert_eq!(ToastConfig::warning("").variant(), Variant::Warning);
        assert_eq!(ToastConfig::info("").variant(), Variant::Info);
    }

    #[test]
    fn builder_pattern_sets_overrides() {
        let toast = ToastConfig::error("boom")
            .with_duration(Duration::from_millis(5000))
            .with_position(Position::BottomLeft)
            .with_background(Color::BLACK)
            .with_text_color(Color::WHITE)
            .with_progress_color(Color::WHITE)
            .with_icon(CustomIcon::glyph("!"));

        assert_eq!(toast.duration(), Duration::from_millis(5000));
        assert_eq!(toast.position(), Position::BottomLeft);
        assert_eq!(toast.background(), Some(Color::BLACK));
        assert_eq!(toast.text_color(), Some(Color::WHITE));
        assert_eq!(toast.progress_color(), Some(Color::WHITE));
        assert!(matches!(toast.custom_icon(), Some(CustomIcon::Glyph(g)) if g == "!"));
    }

    #[test]
    fn variant_parses_case_insensitively() {
        assert_eq!("Success".parse::<Variant>(), Ok(Variant::Success));
        assert_eq!(" warning ".parse::<Variant>(), Ok(Variant::Warning));
    }

    #[test]
    fn unknown_variant_fails_loudly() {
        assert_eq!(
            "fatal".parse::<Variant>(),
            Err(Error::InvalidVariant("fatal".to_string()))
        );
    }
}
