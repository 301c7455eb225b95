// SPDX-License-Identifier: MPL-2.0
//! Screen anchors for overlay hosts.
//!
//! A [`Position`] is one cell of a 3×3 grid. Each axis is either pinned to
//! an edge (with the host's edge offset) or centered on the window, which
//! is where the host compensates for its own size.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where a toast's host sits on screen.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    #[serde(alias = "tL")]
    TopLeft,
    #[serde(alias = "tC")]
    TopCenter,
    #[default]
    #[serde(alias = "tR")]
    TopRight,
    #[serde(alias = "cL")]
    CenterLeft,
    #[serde(alias = "cC")]
    Center,
    #[serde(alias = "cR")]
    CenterRight,
    #[serde(alias = "bL")]
    BottomLeft,
    #[serde(alias = "bC")]
    BottomCenter,
    #[serde(alias = "bR")]
    BottomRight,
}

/// Placement of a host along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Pinned to the top or left edge.
    Start,
    /// Centered on the window.
    Center,
    /// Pinned to the bottom or right edge.
    End,
}

impl Anchor {
    /// Inset from the leading and trailing edge for this anchor.
    fn insets(self, offset: f32) -> (f32, f32) {
        match self {
            Anchor::Start => (offset, 0.0),
            Anchor::Center => (0.0, 0.0),
            Anchor::End => (0.0, offset),
        }
    }
}

/// Resolved layout of a host: anchor per axis plus edge insets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub horizontal: Anchor,
    pub vertical: Anchor,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Position {
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::CenterLeft,
        Position::Center,
        Position::CenterRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Two-letter anchor code, row first (`tR` = top right).
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Position::TopLeft => "tL",
            Position::TopCenter => "tC",
            Position::TopRight => "tR",
            Position::CenterLeft => "cL",
            Position::Center => "cC",
            Position::CenterRight => "cR",
            Position::BottomLeft => "bL",
            Position::BottomCenter => "bC",
            Position::BottomRight => "bR",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopCenter => "top-center",
            Position::TopRight => "top-right",
            Position::CenterLeft => "center-left",
            Position::Center => "center",
            Position::CenterRight => "center-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomCenter => "bottom-center",
            Position::BottomRight => "bottom-right",
        }
    }

    #[must_use]
    pub fn horizontal(self) -> Anchor {
        match self {
            Position::TopLeft | Position::CenterLeft | Position::BottomLeft => Anchor::Start,
            Position::TopCenter | Position::Center | Position::BottomCenter => Anchor::Center,
            Position::TopRight | Position::CenterRight | Position::BottomRight => Anchor::End,
        }
    }

    #[must_use]
    pub fn vertical(self) -> Anchor {
        match self {
            Position::TopLeft | Position::TopCenter | Position::TopRight => Anchor::Start,
            Position::CenterLeft | Position::Center | Position::CenterRight => Anchor::Center,
            Position::BottomLeft | Position::BottomCenter | Position::BottomRight => Anchor::End,
        }
    }

    /// Computes the host placement for a given edge offset.
    #[must_use]
    pub fn placement(self, edge_offset: f32) -> Placement {
        let (left, right) = self.horizontal().insets(edge_offset);
        let (top, bottom) = self.vertical().insets(edge_offset);
        Placement {
            horizontal: self.horizontal(),
            vertical: self.vertical(),
            top,
            right,
            bottom,
            left,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Position {
    type Err = Error;

    /// Accepts either the kebab-case name or the two-letter code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Position::ALL
            .into_iter()
            .find(|p| p.code() == trimmed || p.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| Error::InvalidPosition(s.to_string()))
    }
}
