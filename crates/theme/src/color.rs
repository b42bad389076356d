use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn from_hex(input: &str) -> Result<Self, ColorParseError> {
        let trimmed = input.trim();
        let hex = trimmed
            .strip_prefix('#')
            .ok_or(ColorParseError::MissingHashPrefix)?;
        if hex.len() != 6 && hex.len() != 8 {
            return Err(ColorParseError::InvalidLength);
        }
        let mut rgba = [0u8; 4];
        for i in 0..(hex.len() / 2) {
            let slice = &hex[i * 2..i * 2 + 2];
            rgba[i] = u8::from_str_radix(slice, 16).map_err(|_| ColorParseError::InvalidHex)?;
        }
        if hex.len() == 6 {
            rgba[3] = 255;
        }
        Ok(Color {
            r: rgba[0],
            g: rgba[1],
            b: rgba[2],
            a: rgba[3],
        })
    }

    /// Perceived luminance over 0..=1, the linear weighted blend the export
    /// formats classify against (not the WCAG gamma-corrected variant).
    pub fn luminance(&self) -> f32 {
        let weighted =
            0.299 * f32::from(self.r) + 0.587 * f32::from(self.g) + 0.114 * f32::from(self.b);
        weighted / 255.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("missing leading '#'")]
    MissingHashPrefix,
    #[error("expected 6 or 8 hexadecimal digits")]
    InvalidLength,
    #[error("contains non-hexadecimal digits")]
    InvalidHex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeKind {
    Dark,
    Light,
}

impl ThemeKind {
    /// Classifies a background color. Exactly mid luminance is dark; the
    /// light side starts strictly above 0.5, which puts `#808080`
    /// (luminance ~0.502) on the light side.
    pub fn classify(background: &str) -> Result<Self, ColorParseError> {
        let color = Color::from_hex(background)?;
        Ok(if color.luminance() > 0.5 {
            ThemeKind::Light
        } else {
            ThemeKind::Dark
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "dark",
            ThemeKind::Light => "light",
        }
    }
}
