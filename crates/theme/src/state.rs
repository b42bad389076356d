use std::collections::BTreeMap;

use themesmith_registry::{GlobalSetting, TokenCategory};

/// Independent bold/italic flag pair attached to a category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Emphasis {
    pub bold: bool,
    pub italic: bool,
}

impl Emphasis {
    pub const NONE: Emphasis = Emphasis {
        bold: false,
        italic: false,
    };

    pub fn is_set(&self) -> bool {
        self.bold || self.italic
    }

    /// Combined style string for formats that encode emphasis as one field:
    /// `bold`, `italic`, or `bold italic` (bold always first). `None` when
    /// neither flag is set, so callers can omit the field entirely.
    pub fn style_string(&self) -> Option<&'static str> {
        match (self.bold, self.italic) {
            (true, true) => Some("bold italic"),
            (true, false) => Some("bold"),
            (false, true) => Some("italic"),
            (false, false) => None,
        }
    }

    /// Recovers flags from a style string by substring containment. This
    /// accepts reordered or combined spellings (`italic bold`) without a
    /// fixed grammar; a future value embedding `bold` inside an unrelated
    /// word would also match, which is accepted behavior.
    pub fn from_style_string(style: &str) -> Self {
        Emphasis {
            bold: style.contains("bold"),
            italic: style.contains("italic"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryStyle {
    pub color: String,
    pub emphasis: Emphasis,
}

impl CategoryStyle {
    pub fn new(color: impl Into<String>, emphasis: Emphasis) -> Self {
        Self {
            color: color.into(),
            emphasis,
        }
    }

    pub fn plain(color: impl Into<String>) -> Self {
        Self::new(color, Emphasis::NONE)
    }
}

/// The canonical theme model, the sole unit of truth for one session.
/// Explicitly owned by the caller; every category and both globals hold a
/// defined color from construction on. Color strings pass through without
/// shape validation, stored exactly as last written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeState {
    name: String,
    background: String,
    foreground: String,
    categories: BTreeMap<TokenCategory, CategoryStyle>,
}

impl ThemeState {
    /// The built-in default every session starts from.
    pub fn default_theme() -> Self {
        let mut categories = BTreeMap::new();
        let entries: [(TokenCategory, &str, Emphasis); 12] = [
            (
                TokenCategory::Keyword,
                "#5088C5",
                Emphasis {
                    bold: true,
                    italic: false,
                },
            ),
            (TokenCategory::String, "#97CD78", Emphasis::NONE),
            (
                TokenCategory::Comment,
                "#596F74",
                Emphasis {
                    bold: false,
                    italic: true,
                },
            ),
            (TokenCategory::Number, "#FFB984", Emphasis::NONE),
            (TokenCategory::Function, "#F7B846", Emphasis::NONE),
            (TokenCategory::Type, "#3B9886", Emphasis::NONE),
            (TokenCategory::Variable, "#EDE0D6", Emphasis::NONE),
            (TokenCategory::Constant, "#F898AE", Emphasis::NONE),
            (TokenCategory::Operator, "#F28360", Emphasis::NONE),
            (TokenCategory::Builtin, "#73B5E3", Emphasis::NONE),
            (TokenCategory::Preprocessor, "#F8C5C1", Emphasis::NONE),
            (TokenCategory::Punctuation, "#8A99AD", Emphasis::NONE),
        ];
        for (category, color, emphasis) in entries {
            categories.insert(category, CategoryStyle::new(color, emphasis));
        }
        Self {
            name: "Aegean Night".into(),
            background: "#292928".into(),
            foreground: "#FDF8F2".into(),
            categories,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn get(&self, category: TokenCategory) -> &CategoryStyle {
        // Every category is seeded at construction and never removed.
        self.categories
            .get(&category)
            .expect("theme state must hold every category")
    }

    /// Updates a category's color, leaving its emphasis untouched.
    pub fn set_color(&mut self, category: TokenCategory, color: impl Into<String>) {
        if let Some(style) = self.categories.get_mut(&category) {
            style.color = color.into();
        }
    }

    pub fn toggle_bold(&mut self, category: TokenCategory) {
        if let Some(style) = self.categories.get_mut(&category) {
            style.emphasis.bold = !style.emphasis.bold;
        }
    }

    pub fn toggle_italic(&mut self, category: TokenCategory) {
        if let Some(style) = self.categories.get_mut(&category) {
            style.emphasis.italic = !style.emphasis.italic;
        }
    }

    pub fn global(&self, setting: GlobalSetting) -> &str {
        match setting {
            GlobalSetting::Background => &self.background,
            GlobalSetting::Foreground => &self.foreground,
        }
    }

    pub fn set_global(&mut self, setting: GlobalSetting, color: impl Into<String>) {
        match setting {
            GlobalSetting::Background => self.background = color.into(),
            GlobalSetting::Foreground => self.foreground = color.into(),
        }
    }

    /// Applies a deserialized patch: exactly the fields the patch carries are
    /// replaced, everything else keeps its prior value.
    pub fn apply(&mut self, patch: ThemePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(background) = patch.background {
            self.background = background;
        }
        if let Some(foreground) = patch.foreground {
            self.foreground = foreground;
        }
        for (category, style) in patch.categories {
            self.categories.insert(category, style);
        }
    }
}

/// Partial update produced by a converter's deserialize. Per-category
/// entries are claimed first-wins: once a file entry resolves a category,
/// later entries for the same category are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemePatch {
    pub name: Option<String>,
    pub background: Option<String>,
    pub foreground: Option<String>,
    pub categories: BTreeMap<TokenCategory, CategoryStyle>,
}

impl ThemePatch {
    /// Records a style for a category unless an earlier entry already
    /// claimed it. Returns whether the entry was taken.
    pub fn claim(&mut self, category: TokenCategory, style: CategoryStyle) -> bool {
        use std::collections::btree_map::Entry;
        match self.categories.entry(category) {
            Entry::Vacant(slot) => {
                slot.insert(style);
                true
            }
            Entry::Occupied(_) => false,
        }
    }
}
