mod color;
mod naming;
mod state;

pub use color::{Color, ColorParseError, ThemeKind};
pub use naming::{color_name, NamedColor, PaletteGroup, REFERENCE_PALETTE};
pub use state::{CategoryStyle, Emphasis, ThemePatch, ThemeState};
