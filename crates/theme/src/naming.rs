//! Human-readable naming for picker swatches, backed by the fixed reference
//! palette. Lookup is an exact, case-insensitive match on the `#RRGGBB`
//! value; anything outside the palette falls back to its own lowercase hex.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteGroup {
    Primary,
    Neutral,
    Shade,
    Background,
}

#[derive(Debug, Clone, Copy)]
pub struct NamedColor {
    pub name: &'static str,
    pub hex: &'static str,
    pub group: PaletteGroup,
}

const fn named(name: &'static str, hex: &'static str, group: PaletteGroup) -> NamedColor {
    NamedColor { name, hex, group }
}

pub const REFERENCE_PALETTE: [NamedColor; 42] = [
    named("aegean", "#5088C5", PaletteGroup::Primary),
    named("amber", "#F28360", PaletteGroup::Primary),
    named("aster", "#7A77AB", PaletteGroup::Primary),
    named("canary", "#F7B846", PaletteGroup::Primary),
    named("lime", "#97CD78", PaletteGroup::Primary),
    named("rose", "#F898AE", PaletteGroup::Primary),
    named("seaweed", "#3B9886", PaletteGroup::Primary),
    named("tangerine", "#FFB984", PaletteGroup::Primary),
    named("vital", "#73B5E3", PaletteGroup::Primary),
    named("sky", "#C6E7F4", PaletteGroup::Neutral),
    named("dress", "#F8C5C1", PaletteGroup::Neutral),
    named("taupe", "#DBD1C3", PaletteGroup::Neutral),
    named("denim", "#B6C8D4", PaletteGroup::Neutral),
    named("sage", "#B5BEA4", PaletteGroup::Neutral),
    named("marine", "#8A99AD", PaletteGroup::Neutral),
    named("mars", "#DA9085", PaletteGroup::Neutral),
    named("shell", "#EDE0D6", PaletteGroup::Neutral),
    named("oat", "#F5E4BE", PaletteGroup::Neutral),
    named("crow", "#292928", PaletteGroup::Shade),
    named("pitch", "#09090A", PaletteGroup::Shade),
    named("forest", "#596F74", PaletteGroup::Shade),
    named("slate", "#43413F", PaletteGroup::Shade),
    named("charcoal", "#484B50", PaletteGroup::Shade),
    named("bark", "#8F8885", PaletteGroup::Shade),
    named("umber", "#715E4D", PaletteGroup::Shade),
    named("grape", "#5A4E8C", PaletteGroup::Shade),
    named("cinnabar", "#9E3C3C", PaletteGroup::Shade),
    named("depths", "#09473E", PaletteGroup::Shade),
    named("redwood", "#52180A", PaletteGroup::Shade),
    named("mud", "#635C5A", PaletteGroup::Shade),
    named("parchment", "#FDF8F2", PaletteGroup::Background),
    named("zephyr", "#F4FBFF", PaletteGroup::Background),
    named("lichen", "#F7FBEF", PaletteGroup::Background),
    named("dawn", "#F8F4F1", PaletteGroup::Background),
    named("orchid", "#FFF3F9", PaletteGroup::Background),
    named("linen", "#FFFCF7", PaletteGroup::Background),
    named("mist", "#EEF2F6", PaletteGroup::Background),
    named("fog", "#FAF9F7", PaletteGroup::Background),
    named("blossom", "#FFF8F8", PaletteGroup::Background),
    named("sand", "#FBF6EC", PaletteGroup::Background),
    named("glacier", "#F0F7F7", PaletteGroup::Background),
    named("paper", "#FCFCFC", PaletteGroup::Background),
];

/// Resolves a color value to its palette name, or echoes the lowercase hex
/// back when the value is not in the palette. Never fails.
pub fn color_name(hex: &str) -> String {
    let trimmed = hex.trim();
    for entry in &REFERENCE_PALETTE {
        if entry.hex.eq_ignore_ascii_case(trimmed) {
            return entry.name.to_string();
        }
    }
    trimmed.to_ascii_lowercase()
}
