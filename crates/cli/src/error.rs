//! Command failures and the exit codes they map to.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  argument parse error, raised by clap before `run`
//! - 10: palette operation error (empty palette, bad region, failed operation)
//! - 11: I/O error (image read/write, settings file, unsupported format)
//! - 12: input error (bad colour, unknown mode name, threshold out of range)
//! - 13: JSON output could not be written

use std::fmt;
use swatch_core::SwatchError;

/// Failure of one `swatch` command.
#[derive(Debug)]
pub enum CliError {
    /// A palette-level error raised by the core or ops crates.
    Palette(SwatchError),
    /// A background operation reported failure.
    Operation(String),
    /// An I/O error (image files, settings file).
    Io(String),
    /// A user input error (bad colour, unknown name, bad threshold).
    Input(String),
    /// JSON output failed.
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Palette(_) | CliError::Operation(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Palette(e) => write!(f, "{e}"),
            CliError::Operation(msg) => write!(f, "{msg}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<SwatchError> for CliError {
    fn from(e: SwatchError) -> Self {
        match e {
            SwatchError::Io(_) | SwatchError::UnsupportedFormat(_) => CliError::Io(e.to_string()),
            SwatchError::InvalidColor(_)
            | SwatchError::InvalidThreshold(_)
            | SwatchError::UnknownName { .. }
            | SwatchError::OutOfBounds { .. }
            | SwatchError::Settings(_) => CliError::Input(e.to_string()),
            other => CliError::Palette(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_error_exit_code_is_10() {
        assert_eq!(CliError::Palette(SwatchError::EmptyPalette).exit_code(), 10);
        assert_eq!(CliError::Operation("sort failed".into()).exit_code(), 10);
    }

    #[test]
    fn io_exits_11() {
        let err = CliError::Io("cannot open palette.png".into());
        assert_eq!(err.exit_code(), 11);
    }

    #[test]
    fn input_exits_12() {
        let err = CliError::Input("bad colour".into());
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn serialization_exits_13() {
        let err = CliError::Serialization("key must be a string".into());
        assert_eq!(err.exit_code(), 13);
    }

    #[test]
    fn io_and_format_errors_route_to_cli_io() {
        let cli_err = CliError::from(SwatchError::Io("disk full".into()));
        assert_eq!(cli_err.exit_code(), 11);
        assert!(cli_err.to_string().contains("disk full"));
        let cli_err = CliError::from(SwatchError::UnsupportedFormat("a.webp".into()));
        assert_eq!(cli_err.exit_code(), 11);
    }

    #[test]
    fn user_mistakes_route_to_input() {
        let cases = [
            SwatchError::InvalidColor("#12".into()),
            SwatchError::InvalidThreshold(1.5),
            SwatchError::UnknownName { kind: "sort order", name: "up".into() },
            SwatchError::OutOfBounds { x: 9, y: 9, width: 2, height: 2 },
        ];
        for e in cases {
            assert_eq!(CliError::from(e).exit_code(), 12);
        }
    }

    #[test]
    fn empty_palette_routes_to_palette() {
        let cli_err = CliError::from(SwatchError::EmptyPalette);
        assert_eq!(cli_err.exit_code(), 10);
        assert!(cli_err.to_string().contains("empty"));
    }

    #[test]
    fn from_serde_json_error_routes_to_serialization() {
        let parsed = serde_json::from_str::<serde_json::Value>("[1, 2");
        let cli_err = CliError::from(parsed.unwrap_err());
        assert_eq!(cli_err.exit_code(), 13);
    }
}
