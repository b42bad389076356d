use themesmith_theme::ColorParseError;
use thiserror::Error;

/// Failure modes shared by the three converters and the import dispatcher.
/// Malformed input is a hard stop before any state mutation; unresolvable
/// identifiers and missing optional fields never surface here, they are
/// skipped or defaulted inside the converters.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("malformed JSON theme: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed tmTheme: {0}")]
    Plist(&'static str),
    #[error("invalid color {value}: {reason}")]
    InvalidColor {
        value: String,
        reason: ColorParseError,
    },
    #[error("unrecognized theme format for '{0}'")]
    UnrecognizedFormat(String),
}
