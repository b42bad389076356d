//! VS Code color-theme JSON (`<name>-vscode.json`).

use serde::{Deserialize, Serialize};
use themesmith_registry::{category_for_scope, GlobalSetting, TokenCategory};
use themesmith_theme::{CategoryStyle, Emphasis, ThemeKind, ThemePatch, ThemeState};

use crate::error::ConvertError;
use crate::FormatConverter;

const SCHEMA: &str = "vscode://schemas/color-theme";

pub struct VscodeConverter;

impl FormatConverter for VscodeConverter {
    fn serialize(&self, state: &ThemeState) -> Result<String, ConvertError> {
        let background = state.global(GlobalSetting::Background);
        let kind = ThemeKind::classify(background).map_err(|reason| {
            ConvertError::InvalidColor {
                value: background.to_string(),
                reason,
            }
        })?;

        let token_colors = TokenCategory::ALL
            .iter()
            .map(|&category| {
                let style = state.get(category);
                TokenColorOut {
                    name: category.label(),
                    scope: category.scopes(),
                    settings: RuleSettingsOut {
                        foreground: &style.color,
                        font_style: style.emphasis.style_string(),
                    },
                }
            })
            .collect();

        let theme = VscodeThemeOut {
            schema: SCHEMA,
            name: state.name(),
            kind: kind.as_str(),
            colors: EditorColorsOut {
                background,
                foreground: state.global(GlobalSetting::Foreground),
            },
            token_colors,
        };
        Ok(serde_json::to_string_pretty(&theme)?)
    }

    fn deserialize(&self, text: &str) -> Result<ThemePatch, ConvertError> {
        let file: VscodeThemeIn = serde_json::from_str(text)?;
        let mut patch = ThemePatch {
            name: file.name,
            ..ThemePatch::default()
        };
        if let Some(colors) = file.colors {
            patch.background = colors.background;
            patch.foreground = colors.foreground;
        }

        // Rules are walked in file order; the first rule whose scope list
        // resolves a category claims it, later rules for that category are
        // ignored.
        for rule in file.token_colors.unwrap_or_default() {
            let scopes = match rule.scope {
                Some(ScopeValue::Single(ref scope)) => std::slice::from_ref(scope),
                Some(ScopeValue::Multiple(ref scopes)) => scopes.as_slice(),
                None => continue,
            };
            let Some(category) = scopes.iter().find_map(|scope| category_for_scope(scope))
            else {
                continue;
            };
            let Some(foreground) = rule.settings.foreground else {
                continue;
            };
            let emphasis = rule
                .settings
                .font_style
                .as_deref()
                .map(Emphasis::from_style_string)
                .unwrap_or(Emphasis::NONE);
            patch.claim(category, CategoryStyle::new(foreground, emphasis));
        }
        Ok(patch)
    }
}

#[derive(Serialize)]
struct VscodeThemeOut<'a> {
    #[serde(rename = "$schema")]
    schema: &'a str,
    name: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
    colors: EditorColorsOut<'a>,
    #[serde(rename = "tokenColors")]
    token_colors: Vec<TokenColorOut<'a>>,
}

#[derive(Serialize)]
struct EditorColorsOut<'a> {
    #[serde(rename = "editor.background")]
    background: &'a str,
    #[serde(rename = "editor.foreground")]
    foreground: &'a str,
}

#[derive(Serialize)]
struct TokenColorOut<'a> {
    name: &'a str,
    scope: &'a [&'a str],
    settings: RuleSettingsOut<'a>,
}

#[derive(Serialize)]
struct RuleSettingsOut<'a> {
    foreground: &'a str,
    #[serde(rename = "fontStyle", skip_serializing_if = "Option::is_none")]
    font_style: Option<&'a str>,
}

#[derive(Deserialize)]
struct VscodeThemeIn {
    name: Option<String>,
    colors: Option<EditorColorsIn>,
    #[serde(rename = "tokenColors")]
    token_colors: Option<Vec<TokenColorIn>>,
}

#[derive(Deserialize)]
struct EditorColorsIn {
    #[serde(rename = "editor.background")]
    background: Option<String>,
    #[serde(rename = "editor.foreground")]
    foreground: Option<String>,
}

#[derive(Deserialize)]
struct TokenColorIn {
    scope: Option<ScopeValue>,
    settings: RuleSettingsIn,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ScopeValue {
    Single(String),
    Multiple(Vec<String>),
}

#[derive(Deserialize)]
struct RuleSettingsIn {
    foreground: Option<String>,
    #[serde(rename = "fontStyle")]
    font_style: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_schema_kind_and_globals() {
        let state = ThemeState::default_theme();
        let text = VscodeConverter.serialize(&state).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["$schema"], SCHEMA);
        assert_eq!(value["type"], "dark");
        assert_eq!(value["colors"]["editor.background"], "#292928");
        assert_eq!(value["tokenColors"][0]["settings"]["fontStyle"], "bold");
    }

    #[test]
    fn plain_categories_carry_no_font_style() {
        let state = ThemeState::default_theme();
        let text = VscodeConverter.serialize(&state).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let string_rule = value["tokenColors"]
            .as_array()
            .unwrap()
            .iter()
            .find(|rule| rule["name"] == "String")
            .unwrap();
        assert!(string_rule["settings"].get("fontStyle").is_none());
    }

    #[test]
    fn first_rule_wins_for_duplicate_scopes() {
        let text = r##"{
            "name": "Dup",
            "tokenColors": [
                { "scope": "string", "settings": { "foreground": "#111111" } },
                { "scope": ["string"], "settings": { "foreground": "#222222" } }
            ]
        }"##;
        let patch = VscodeConverter.deserialize(text).unwrap();
        assert_eq!(patch.categories[&TokenCategory::String].color, "#111111");
    }

    #[test]
    fn unresolvable_scopes_are_skipped() {
        let text = r##"{
            "tokenColors": [
                { "scope": "meta.embedded", "settings": { "foreground": "#111111" } }
            ]
        }"##;
        let patch = VscodeConverter.deserialize(text).unwrap();
        assert!(patch.categories.is_empty());
    }

    #[test]
    fn malformed_json_is_a_hard_error() {
        assert!(matches!(
            VscodeConverter.deserialize("{ not json"),
            Err(ConvertError::Json(_))
        ));
    }
}
