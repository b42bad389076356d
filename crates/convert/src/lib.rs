mod bundle;
mod error;
mod highlight_style;
mod tmtheme;
mod vscode;

use themesmith_theme::{ThemePatch, ThemeState};

pub use bundle::{
    detect_format, export_bundle, import_file, import_str, select_preferred, ExportFile,
    ThemeFormat,
};
pub use error::ConvertError;
pub use highlight_style::HighlightStyleConverter;
pub use tmtheme::TmThemeConverter;
pub use vscode::VscodeConverter;

/// Common two-operation contract every format converter implements.
/// `deserialize` never mutates anything: it produces a patch the caller
/// applies, so a malformed file leaves the current theme untouched.
pub trait FormatConverter {
    fn serialize(&self, state: &ThemeState) -> Result<String, ConvertError>;
    fn deserialize(&self, text: &str) -> Result<ThemePatch, ConvertError>;
}
