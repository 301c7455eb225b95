// SPDX-License-Identifier: MPL-2.0
//! Demo application showing toasts over ordinary content.
//!
//! On startup it mounts the showcase toasts (one per variant plus a custom
//! styled one) and offers buttons to spawn more at any of the nine anchors.

mod message;
mod subscription;

pub use message::{Flags, Message};

use crate::config::{self, paths, Config};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::{
    CustomIcon, Manager, Position, ToastConfig, ToastView, Variant,
};
use iced::widget::{button, pick_list, Column, Container, Row, Stack, Text};
use iced::{alignment, window, Color, Element, Length, Subscription, Task, Theme};
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_WIDTH: f32 = 900.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 640.0;

/// Countdown of the showcase toasts mounted at startup.
const SHOWCASE_DURATION: Duration = Duration::from_millis(5000);

static POSITIONS: [Position; 9] = Position::ALL;

const SPINNER_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100" width="30" height="30"><path stroke="none" fill="#ffffff" d="M10 50A40 40 0 0 0 90 50A40 42 0 0 1 10 50"/></svg>"##;

/// Root application state.
#[derive(Debug)]
pub struct App {
    config: Config,
    toasts: Manager,
    /// Anchor used by the spawn buttons.
    position: Position,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a `Fn` boot closure; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// The toasts mounted at startup, mirroring one of each kind.
pub fn showcase(config: &Config) -> Vec<ToastConfig> {
    let toast = |message: &str, variant: Variant| {
        config
            .toast(message)
            .with_variant(variant)
            .with_duration(SHOWCASE_DURATION)
    };
    let accent = Color::from_rgb8(0x61, 0xda, 0xfb);

    vec![
        toast("Operation successful!", Variant::Success),
        toast("Error occurred!", Variant::Error),
        toast("Warning: Check your input!", Variant::Warning),
        toast("Custom Info Notification!", Variant::Info)
            .with_background(Color::from_rgb8(0x28, 0x2c, 0x34))
            .with_text_color(accent)
            .with_progress_color(accent)
            .with_icon(CustomIcon::svg(SPINNER_SVG.as_bytes())),
    ]
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir.clone());
        let (mut config, warning) = config::load();

        if let Some(position) = flags.position {
            config.toast.position = Some(position);
        }
        if let Some(ms) = flags.duration_ms {
            config.toast.duration_ms = Some(ms);
        }

        let now = Instant::now();
        let mut toasts = Manager::with_metrics(config.host_metrics());
        for toast in showcase(&config) {
            toasts.push(toast, now);
        }
        if let Some(warning) = warning {
            toasts.push(
                ToastConfig::warning(format!("Settings could not be loaded: {warning}")),
                now,
            );
        }

        let app = App {
            position: config.toast.position.unwrap_or_default(),
            config,
            toasts,
        };
        tracing::info!(toasts = app.toasts.len(), "demo started");
        (app, Task::none())
    }

    fn title(&self) -> String {
        "Iced Toast".to_string()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.toasts.is_animating())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let now = Instant::now();
        match message {
            Message::Toast(toast_message) => {
                self.toasts.handle_message(&toast_message, now);
            }
            Message::Spawn(variant) => {
                let toast = self
                    .config
                    .toast(format!("{variant} toast at {}", self.position))
                    .with_variant(variant)
                    .with_position(self.position);
                self.toasts.push(toast, now);
            }
            Message::PositionSelected(position) => {
                self.position = position;
            }
            Message::DismissAll => {
                self.toasts.close_all(now);
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let spawn_buttons = Variant::ALL.into_iter().fold(
            Row::new().spacing(spacing::XS),
            |row, variant| {
                row.push(
                    button(Text::new(variant.name()))
                        .on_press(Message::Spawn(variant))
                        .padding(spacing::XS),
                )
            },
        );

        let controls = Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(Text::new("Toast playground").size(typography::GLYPH * 1.5))
            .push(spawn_buttons)
            .push(
                Row::new()
                    .spacing(spacing::XS)
                    .align_y(alignment::Vertical::Center)
                    .push(Text::new("Position"))
                    .push(pick_list(
                        &POSITIONS[..],
                        Some(self.position),
                        Message::PositionSelected,
                    )),
            )
            .push(
                button(Text::new("Dismiss all"))
                    .on_press(Message::DismissAll)
                    .style(button::secondary),
            );

        let content = Container::new(controls)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center);

        let overlay = ToastView::view_overlay(&self.toasts, Instant::now()).map(Message::Toast);

        Stack::new()
            .push(content)
            .push(overlay)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
