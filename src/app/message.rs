// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::ui::notifications::{Position, ToastMessage, Variant};

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Forwarded toast message (hover, close, tick).
    Toast(ToastMessage),
    /// Spawn a toast of the given variant at the selected position.
    Spawn(Variant),
    PositionSelected(Position),
    /// Start the exit transition of every visible toast.
    DismissAll,
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_TOAST_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Position for spawned toasts; overrides the configured default.
    pub position: Option<Position>,
    /// Countdown for spawned toasts in milliseconds; overrides the configured default.
    pub duration_ms: Option<u64>,
}

impl Flags {
    /// Parses `--config-dir`, `--position` and `--duration` from CLI arguments.
    pub fn parse(mut args: pico_args::Arguments) -> Result<Self, pico_args::Error> {
        let flags = Flags {
            config_dir: args.opt_value_from_str("--config-dir")?,
            position: args.opt_value_from_str("--position")?,
            duration_ms: args.opt_value_from_str("--duration")?,
        };

        let rest = args.finish();
        if let Some(arg) = rest.first() {
            return Err(pico_args::Error::ArgumentParsingFailed {
                cause: format!("unexpected argument {}", arg.to_string_lossy()),
            });
        }
        Ok(flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn args(values: &[&str]) -> pico_args::Arguments {
        pico_args::Arguments::from_vec(values.iter().map(OsString::from).collect())
    }

    #[test]
    fn parse_reads_all_flags() {
        let flags = Flags::parse(args(&[
            "--position",
            "bL",
            "--duration",
            "5000",
            "--config-dir",
            "/tmp/toast",
        ]))
        .expect("valid flags");

        assert_eq!(flags.position, Some(Position::BottomLeft));
        assert_eq!(flags.duration_ms, Some(5000));
        assert_eq!(flags.config_dir.as_deref(), Some("/tmp/toast"));
    }

    #[test]
    fn parse_without_flags_is_default() {
        assert_eq!(Flags::parse(args(&[])).expect("valid flags"), Flags::default());
    }

    #[test]
    fn parse_rejects_unknown_position() {
        assert!(Flags::parse(args(&["--position", "middle"])).is_err());
    }

    #[test]
    fn parse_rejects_stray_arguments() {
        assert!(Flags::parse(args(&["extra"])).is_err());
    }
}
