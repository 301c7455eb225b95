// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Io(String),
    Config(String),
    /// A variant name outside `success`, `error`, `warning`, `info`.
    InvalidVariant(String),
    /// A position that is not one of the nine anchors.
    InvalidPosition(String),
    /// A color string that is not `#rgb`, `#rrggbb` or `#rrggbbaa`.
    InvalidColor(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::InvalidVariant(v) => write!(
                f,
                "Invalid toast variant '{}' (expected success, error, warning or info)",
                v
            ),
            Error::InvalidPosition(p) => write!(f, "Invalid toast position '{}'", p),
            Error::InvalidColor(c) => write!(f, "Invalid color '{}'", c),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn invalid_variant_names_the_offending_input() {
        let err = Error::InvalidVariant("fatal".to_string());
        assert!(err.to_string().contains("'fatal'"));
    }

    #[test]
    fn from_toml_error_produces_config_variant() {
        let err: Error = toml::from_str::<toml::Table>("= broken")
            .expect_err("invalid toml must fail")
            .into();
        assert!(matches!(err, Error::Config(_)));
    }
}
