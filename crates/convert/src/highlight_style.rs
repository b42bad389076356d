//! Document-rendering highlight-style JSON (`<name>.theme`). The style
//! table covers the full highlight-token superset, suffixed spellings on
//! disk (`KeywordTok`), including tokens no category owns.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use themesmith_registry::{
    category_for_highlight_token, GlobalSetting, HIGHLIGHT_TOKEN_SUPERSET, TOKEN_SUFFIX,
};
use themesmith_theme::{CategoryStyle, Emphasis, ThemePatch, ThemeState};

use crate::error::ConvertError;
use crate::FormatConverter;

const AUTHOR: &str = "Themesmith";
const REVISION: u32 = 1;

pub struct HighlightStyleConverter;

impl FormatConverter for HighlightStyleConverter {
    fn serialize(&self, state: &ThemeState) -> Result<String, ConvertError> {
        let mut text_styles = Map::new();
        for token in HIGHLIGHT_TOKEN_SUPERSET {
            let entry = match category_for_highlight_token(token) {
                Some(category) => {
                    let style = state.get(category);
                    StyleEntry {
                        text_color: Some(style.color.clone()),
                        background_color: None,
                        bold: style.emphasis.bold,
                        italic: style.emphasis.italic,
                        underline: false,
                    }
                }
                None => StyleEntry::default(),
            };
            text_styles.insert(format!("{token}{TOKEN_SUFFIX}"), serde_json::to_value(entry)?);
        }

        let foreground = state.global(GlobalSetting::Foreground);
        let file = ThemeFileOut {
            metadata: MetadataOut {
                name: state.name(),
                author: AUTHOR,
                license: "",
                revision: REVISION,
            },
            text_color: foreground,
            background_color: state.global(GlobalSetting::Background),
            line_number_color: foreground,
            line_number_background_color: None,
            text_styles,
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    fn deserialize(&self, text: &str) -> Result<ThemePatch, ConvertError> {
        let file: ThemeFileIn = serde_json::from_str(text)?;
        let mut patch = ThemePatch {
            name: file.metadata.and_then(|metadata| metadata.name),
            background: file.background_color,
            foreground: file.text_color,
            ..ThemePatch::default()
        };

        // Table entries are walked in file order; the first entry that
        // resolves a category and carries a non-null text color claims it.
        for (token, value) in file.text_styles.unwrap_or_default() {
            let Some(category) = category_for_highlight_token(&token) else {
                continue;
            };
            let Ok(entry) = serde_json::from_value::<StyleEntry>(value) else {
                continue;
            };
            let Some(color) = entry.text_color else {
                continue;
            };
            patch.claim(
                category,
                CategoryStyle::new(
                    color,
                    Emphasis {
                        bold: entry.bold,
                        italic: entry.italic,
                    },
                ),
            );
        }
        Ok(patch)
    }
}

#[derive(Serialize)]
struct ThemeFileOut<'a> {
    metadata: MetadataOut<'a>,
    #[serde(rename = "text-color")]
    text_color: &'a str,
    #[serde(rename = "background-color")]
    background_color: &'a str,
    #[serde(rename = "line-number-color")]
    line_number_color: &'a str,
    #[serde(rename = "line-number-background-color")]
    line_number_background_color: Option<&'a str>,
    #[serde(rename = "text-styles")]
    text_styles: Map<String, Value>,
}

#[derive(Serialize)]
struct MetadataOut<'a> {
    name: &'a str,
    author: &'a str,
    license: &'a str,
    revision: u32,
}

#[derive(Serialize, Deserialize, Default)]
struct StyleEntry {
    #[serde(rename = "text-color")]
    text_color: Option<String>,
    #[serde(rename = "background-color")]
    background_color: Option<String>,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    italic: bool,
    #[serde(default)]
    underline: bool,
}

#[derive(Deserialize)]
struct ThemeFileIn {
    metadata: Option<MetadataIn>,
    #[serde(rename = "text-color")]
    text_color: Option<String>,
    #[serde(rename = "background-color")]
    background_color: Option<String>,
    #[serde(rename = "text-styles")]
    text_styles: Option<Map<String, Value>>,
}

#[derive(Deserialize)]
struct MetadataIn {
    name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use themesmith_registry::TokenCategory;

    #[test]
    fn style_table_covers_full_superset_with_suffix() {
        let state = ThemeState::default_theme();
        let text = HighlightStyleConverter.serialize(&state).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let styles = value["text-styles"].as_object().unwrap();
        assert_eq!(styles.len(), HIGHLIGHT_TOKEN_SUPERSET.len());
        assert!(styles.contains_key("KeywordTok"));
        assert_eq!(styles["NormalTok"]["text-color"], serde_json::Value::Null);
        assert_eq!(styles["KeywordTok"]["bold"], true);
        assert_eq!(styles["KeywordTok"]["underline"], false);
    }

    #[test]
    fn line_number_color_doubles_foreground() {
        let state = ThemeState::default_theme();
        let text = HighlightStyleConverter.serialize(&state).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["line-number-color"], value["text-color"]);
        assert_eq!(
            value["line-number-background-color"],
            serde_json::Value::Null
        );
        assert_eq!(value["metadata"]["revision"], 1);
        assert_eq!(value["metadata"]["license"], "");
    }

    #[test]
    fn null_text_color_leaves_category_unclaimed() {
        let text = r##"{
            "text-styles": {
                "KeywordTok": { "text-color": null, "bold": true },
                "StringTok": { "text-color": "#11AA22" }
            }
        }"##;
        let patch = HighlightStyleConverter.deserialize(text).unwrap();
        assert!(!patch.categories.contains_key(&TokenCategory::Keyword));
        assert_eq!(patch.categories[&TokenCategory::String].color, "#11AA22");
    }

    #[test]
    fn first_entry_with_color_wins_per_category() {
        // ControlFlow and Keyword both alias the keyword category; the first
        // entry carrying a color claims it.
        let text = r##"{
            "text-styles": {
                "ControlFlowTok": { "text-color": "#AAAAAA" },
                "KeywordTok": { "text-color": "#BBBBBB" }
            }
        }"##;
        let patch = HighlightStyleConverter.deserialize(text).unwrap();
        assert_eq!(patch.categories[&TokenCategory::Keyword].color, "#AAAAAA");
    }

    #[test]
    fn bare_token_spellings_resolve_too() {
        let text = r##"{
            "text-styles": {
                "Comment": { "text-color": "#606060", "italic": true }
            }
        }"##;
        let patch = HighlightStyleConverter.deserialize(text).unwrap();
        let style = &patch.categories[&TokenCategory::Comment];
        assert_eq!(style.color, "#606060");
        assert!(style.emphasis.italic);
    }
}
