// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering mounted toasts.
//!
//! Toasts are drawn as fixed-width cards: icon, message and close button on
//! one row, with the countdown progress bar along the bottom edge. Each
//! anchor becomes one full-window layer aligned per its host placement.

use super::icon::{self, ResolvedIcon};
use super::lifecycle::Toast;
use super::manager::{Manager, Message};
use super::notification::CustomIcon;
use super::position::{Anchor, Placement, Position};
use super::style::ToastColors;
use crate::ui::design_tokens::{opacity, radius, shadow, sizing, spacing, typography};
use iced::widget::svg::{self, Svg};
use iced::widget::{
    button, container, keyed_column, mouse_area, tooltip, Column, Container, Row, Space, Stack,
    Text,
};
use iced::{alignment, Background, Border, Color, Element, Length, Padding, Shadow, Theme};
use std::time::Instant;

/// Label shown for the close button.
pub const CLOSE_LABEL: &str = "Close";

/// Resolution of the progress bar, in fill portions.
const PROGRESS_STEPS: u16 = 1000;

/// Toast widget rendering.
pub struct ToastView;

impl ToastView {
    /// Renders a single toast as it looks at `now`.
    pub fn view(toast: &Toast, now: Instant) -> Element<'_, Message> {
        let id = toast.id();
        let alpha = toast.opacity(now);
        let colors = ToastColors::resolve(toast.config()).faded(alpha);

        let message_widget = Text::new(toast.config().message())
            .size(typography::BODY)
            .color(colors.text);

        let close_button = button(Text::new("✕").size(typography::GLYPH).color(colors.text))
            .on_press(Message::Close(id))
            .padding(spacing::XXS)
            .style(move |_theme: &Theme, status| close_button_style(status, colors.text));
        let close_button = tooltip(
            close_button,
            Text::new(CLOSE_LABEL).size(typography::CAPTION),
            tooltip::Position::Bottom,
        )
        .gap(4)
        .style(container::rounded_box);

        // Layout: [icon] [message] [close]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Self::icon(toast, colors, alpha))
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(close_button);

        let card = Column::new()
            .push(Container::new(content).padding(spacing::SM))
            .push(Self::progress_bar(toast.progress(now), colors.progress));

        let card = Container::new(card)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .clip(true)
            .style(move |_theme: &Theme| toast_container_style(colors.background, alpha));

        mouse_area(card)
            .on_enter(Message::PointerEntered(id))
            .on_exit(Message::PointerLeft(id))
            .into()
    }

    /// Renders the overlay: one full-window layer per anchor.
    ///
    /// Every anchor always gets a layer, in [`Position::ALL`] order, and each
    /// host stacks its toasts in a column keyed by [`ToastId`](super::ToastId).
    /// Widget state (notably the hover state behind `PointerLeft`) therefore
    /// stays with its toast when hosts appear or earlier toasts unmount.
    pub fn view_overlay(manager: &Manager, now: Instant) -> Element<'_, Message> {
        let children = layers(manager).map(|layer| Self::view_layer(layer, now));

        Stack::with_children(children)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn view_layer(layer: Layer<'_>, now: Instant) -> Element<'_, Message> {
        let placement = layer.placement;
        let column = keyed_column(
            layer
                .toasts
                .into_iter()
                .map(|toast| (toast.id(), Self::view(toast, now))),
        )
        .spacing(layer.gap);

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(Padding {
                top: placement.top,
                right: placement.right,
                bottom: placement.bottom,
                left: placement.left,
            })
            .align_x(horizontal(placement.horizontal))
            .align_y(vertical(placement.vertical))
            .into()
    }

    fn icon(toast: &Toast, colors: ToastColors, alpha: f32) -> Element<'_, Message> {
        match icon::resolve(toast.config()) {
            ResolvedIcon::Default(shape) => Svg::new(shape.handle())
                .width(Length::Fixed(sizing::ICON))
                .height(Length::Fixed(sizing::ICON))
                .style(move |_theme: &Theme, _status: svg::Status| svg::Style {
                    color: Some(colors.text),
                })
                .into(),
            ResolvedIcon::Custom(CustomIcon::Svg(handle)) => Svg::new(handle.clone())
                .width(Length::Fixed(sizing::ICON))
                .height(Length::Fixed(sizing::ICON))
                .opacity(alpha)
                .into(),
            ResolvedIcon::Custom(CustomIcon::Glyph(glyph)) => Text::new(glyph.as_str())
                .size(typography::GLYPH)
                .color(colors.text)
                .into(),
        }
    }

    fn progress_bar<'a>(progress: f32, color: Color) -> Element<'a, Message> {
        let filled = (progress.clamp(0.0, 1.0) * f32::from(PROGRESS_STEPS)).round() as u16;
        let mut bar = Row::new().height(Length::Fixed(sizing::PROGRESS_HEIGHT));

        // FillPortion(0) would resolve to the full width, so empty parts are skipped.
        if filled > 0 {
            bar = bar.push(
                Container::new(Space::new())
                    .width(Length::FillPortion(filled))
                    .height(Length::Fill)
                    .style(move |_theme: &Theme| container::Style {
                        background: Some(Background::Color(color)),
                        ..Default::default()
                    }),
            );
        }
        if filled < PROGRESS_STEPS {
            bar = bar.push(
                Space::new()
                    .width(Length::FillPortion(PROGRESS_STEPS - filled))
                    .height(Length::Fill),
            );
        }
        bar.into()
    }
}

/// One overlay layer: an anchor and the toasts stacked there, oldest first.
struct Layer<'a> {
    placement: Placement,
    gap: f32,
    toasts: Vec<&'a Toast>,
}

/// Layers for every anchor, created or not, in [`Position::ALL`] order.
fn layers(manager: &Manager) -> impl Iterator<Item = Layer<'_>> {
    let metrics = manager.registry().metrics();
    Position::ALL.into_iter().map(move |position| {
        let (placement, gap) = match manager.registry().get(position) {
            Some(host) => (host.placement(), host.gap()),
            None => (position.placement(metrics.edge_offset), metrics.gap),
        };
        Layer {
            placement,
            gap,
            toasts: manager.toasts_at(position).collect(),
        }
    })
}

fn horizontal(anchor: Anchor) -> alignment::Horizontal {
    match anchor {
        Anchor::Start => alignment::Horizontal::Left,
        Anchor::Center => alignment::Horizontal::Center,
        Anchor::End => alignment::Horizontal::Right,
    }
}

fn vertical(anchor: Anchor) -> alignment::Vertical {
    match anchor {
        Anchor::Start => alignment::Vertical::Top,
        Anchor::Center => alignment::Vertical::Center,
        Anchor::End => alignment::Vertical::Bottom,
    }
}

/// Style function for the toast card.
fn toast_container_style(background: Color, alpha: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: Color {
                a: shadow::MD.color.a * alpha,
                ..shadow::MD.color
            },
            ..shadow::MD
        },
        ..Default::default()
    }
}

/// Style function for the close button.
fn close_button_style(status: button::Status, text_color: Color) -> button::Style {
    let highlight = |a: f32| {
        Some(Background::Color(Color {
            a: a * text_color.a,
            ..text_color
        }))
    };

    let background = match status {
        button::Status::Active | button::Status::Disabled => None,
        button::Status::Hovered => highlight(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => highlight(opacity::OVERLAY_MEDIUM),
    };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::{ToastConfig, ToastId, Variant};
    use std::time::Duration;

    #[test]
    fn toast_container_style_uses_background_color() {
        let background = ToastColors::for_variant(Variant::Success).background;
        let style = toast_container_style(background, 1.0);

        assert_eq!(style.background, Some(Background::Color(background)));
    }

    #[test]
    fn faded_card_fades_shadow() {
        let style = toast_container_style(Color::BLACK, 0.0);
        assert_eq!(style.shadow.color.a, 0.0);
    }

    #[test]
    fn close_button_highlights_on_hover_only() {
        let idle = close_button_style(button::Status::Active, Color::WHITE);
        let hovered = close_button_style(button::Status::Hovered, Color::WHITE);

        assert!(idle.background.is_none());
        assert!(hovered.background.is_some());
        assert_eq!(hovered.text_color, Color::WHITE);
    }

    #[test]
    fn anchors_map_to_alignment() {
        assert_eq!(horizontal(Anchor::End), alignment::Horizontal::Right);
        assert_eq!(vertical(Anchor::Center), alignment::Vertical::Center);
    }

    #[test]
    fn views_build_for_every_variant_and_phase() {
        let base = Instant::now();
        let mut manager = Manager::new();
        for (i, variant) in Variant::ALL.into_iter().enumerate() {
            manager.push(
                ToastConfig::new(variant.name())
                    .with_variant(variant)
                    .with_position(Position::ALL[i]),
                base,
            );
        }
        manager.push(
            ToastConfig::info("glyph").with_icon(CustomIcon::glyph("*")),
            base,
        );

        let _ = ToastView::view_overlay(&manager, base);
        manager.close_all(base + Duration::from_millis(10));
        let _ = ToastView::view_overlay(&manager, base + Duration::from_millis(260));
    }

    fn layer_ids(manager: &Manager) -> Vec<Vec<ToastId>> {
        layers(manager)
            .map(|layer| layer.toasts.iter().map(|toast| toast.id()).collect())
            .collect()
    }

    #[test]
    fn overlay_has_a_layer_for_every_anchor() {
        let base = Instant::now();
        let mut manager = Manager::new();
        assert_eq!(layers(&manager).count(), Position::ALL.len());

        let id = manager.push(
            ToastConfig::info("x").with_position(Position::BottomLeft),
            base,
        );
        let ids = layer_ids(&manager);
        assert_eq!(ids.len(), Position::ALL.len());
        for (position, layer) in Position::ALL.into_iter().zip(&ids) {
            if position == Position::BottomLeft {
                assert_eq!(layer, &vec![id]);
            } else {
                assert!(layer.is_empty());
            }
        }
    }

    #[test]
    fn missing_host_layer_uses_registry_metrics() {
        let manager = Manager::new();
        let layer = layers(&manager).next().expect("first anchor");
        assert_eq!(layer.placement, Position::TopLeft.placement(20.0));
        assert_eq!(layer.gap, 10.0);
    }

    #[test]
    fn hovered_toast_keeps_its_key_when_the_toast_above_unmounts() {
        let base = Instant::now();
        let ms = Duration::from_millis;
        let mut manager = Manager::new();
        let first = manager.push(ToastConfig::info("first").with_duration(ms(5000)), base);
        let hovered = manager.push(ToastConfig::info("second").with_duration(ms(5000)), base);
        let index = Position::ALL
            .iter()
            .position(|p| *p == Position::TopRight)
            .expect("anchor listed");

        manager.handle_message(&Message::PointerEntered(hovered), base + ms(1000));
        manager.handle_message(&Message::Close(first), base + ms(1000));
        manager.tick(base + ms(1500));

        // The hovered toast is now first in its host, still under its own key
        // and at the same layer index, so its hover state follows it.
        let ids = layer_ids(&manager);
        assert_eq!(ids[index], vec![hovered]);
        assert!(manager.get(hovered).is_some_and(|t| t.is_paused()));

        manager.handle_message(&Message::PointerLeft(hovered), base + ms(2000));
        manager.tick(base + ms(5999));
        assert!(manager.get(hovered).is_some_and(|t| !t.is_paused() && !t.is_closing()));
        manager.tick(base + ms(6000));
        assert!(manager.get(hovered).is_some_and(|t| t.is_closing()));
    }

    #[test]
    fn new_host_does_not_shift_existing_layers() {
        let base = Instant::now();
        let mut manager = Manager::new();
        let right = manager.push(ToastConfig::info("r").with_position(Position::TopRight), base);
        let before = layer_ids(&manager);

        manager.push(ToastConfig::info("l").with_position(Position::TopLeft), base);
        let after = layer_ids(&manager);

        let index = Position::ALL
            .iter()
            .position(|p| *p == Position::TopRight)
            .expect("anchor listed");
        assert_eq!(before[index], vec![right]);
        assert_eq!(after[index], vec![right]);
    }

    #[test]
    fn empty_overlay_builds() {
        let _ = ToastView::view_overlay(&Manager::new(), Instant::now());
    }
}
