//! TextMate `.tmTheme` property-list markup. The writer emits the plist
//! shape directly; the reader tokenizes the plist into a small value tree
//! and walks it best-effort, skipping malformed entries silently.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use quick_xml::escape::{escape, unescape};
use themesmith_registry::{category_for_scope, GlobalSetting, TokenCategory};
use themesmith_theme::{CategoryStyle, Emphasis, ThemePatch, ThemeState};

use crate::error::ConvertError;
use crate::FormatConverter;

const PLIST_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!DOCTYPE plist PUBLIC \"-//Apple//DTD PLIST 1.0//EN\" \"http://www.apple.com/DTDs/PropertyList-1.0.dtd\">\n<plist version=\"1.0\">\n";

pub struct TmThemeConverter;

impl FormatConverter for TmThemeConverter {
    fn serialize(&self, state: &ThemeState) -> Result<String, ConvertError> {
        let mut out = String::from(PLIST_HEADER);
        out.push_str("<dict>\n");
        write_key_string(&mut out, 1, "name", state.name());
        out.push_str("\t<key>settings</key>\n\t<array>\n");

        // First settings entry carries the global colors.
        out.push_str("\t\t<dict>\n\t\t\t<key>settings</key>\n\t\t\t<dict>\n");
        write_key_string(
            &mut out,
            4,
            "background",
            state.global(GlobalSetting::Background),
        );
        write_key_string(
            &mut out,
            4,
            "foreground",
            state.global(GlobalSetting::Foreground),
        );
        out.push_str("\t\t\t</dict>\n\t\t</dict>\n");

        for category in TokenCategory::ALL {
            let style = state.get(category);
            out.push_str("\t\t<dict>\n");
            write_key_string(&mut out, 3, "name", category.label());
            write_key_string(&mut out, 3, "scope", &category.scopes().join(", "));
            out.push_str("\t\t\t<key>settings</key>\n\t\t\t<dict>\n");
            write_key_string(&mut out, 4, "foreground", &style.color);
            if let Some(font_style) = style.emphasis.style_string() {
                write_key_string(&mut out, 4, "fontStyle", font_style);
            }
            out.push_str("\t\t\t</dict>\n\t\t</dict>\n");
        }

        out.push_str("\t</array>\n</dict>\n</plist>\n");
        Ok(out)
    }

    fn deserialize(&self, text: &str) -> Result<ThemePatch, ConvertError> {
        let value = parse_plist(text)?;
        let dict = value
            .as_dict()
            .ok_or(ConvertError::Plist("root must be a dictionary"))?;

        let mut patch = ThemePatch {
            name: dict
                .get("name")
                .and_then(TmValue::as_string)
                .map(str::to_string),
            ..ThemePatch::default()
        };

        let Some(settings) = dict.get("settings").and_then(TmValue::as_array) else {
            return Ok(patch);
        };

        for entry in settings {
            let Some(entry) = entry.as_dict() else {
                continue;
            };
            if let Some(scope) = entry.get("scope").and_then(TmValue::as_string) {
                apply_scope_entry(&mut patch, scope, entry);
            } else if let Some(general) = entry.get("settings").and_then(TmValue::as_dict) {
                if let Some(background) = general.get("background").and_then(TmValue::as_string) {
                    patch.background = Some(background.to_string());
                }
                if let Some(foreground) = general.get("foreground").and_then(TmValue::as_string) {
                    patch.foreground = Some(foreground.to_string());
                }
            }
        }
        Ok(patch)
    }
}

fn apply_scope_entry(patch: &mut ThemePatch, scope: &str, entry: &BTreeMap<String, TmValue>) {
    // First identifier in the comma-joined list that the index resolves
    // picks the category; entries resolving nothing are skipped.
    let Some(category) = scope
        .split(',')
        .map(str::trim)
        .find_map(category_for_scope)
    else {
        return;
    };
    let Some(settings) = entry.get("settings").and_then(TmValue::as_dict) else {
        return;
    };
    let Some(foreground) = settings.get("foreground").and_then(TmValue::as_string) else {
        return;
    };
    let emphasis = settings
        .get("fontStyle")
        .and_then(TmValue::as_string)
        .map(Emphasis::from_style_string)
        .unwrap_or(Emphasis::NONE);
    patch.claim(category, CategoryStyle::new(foreground, emphasis));
}

fn write_key_string(out: &mut String, depth: usize, key: &str, value: &str) {
    let indent = "\t".repeat(depth);
    let _ = writeln!(out, "{indent}<key>{}</key>", escape(key));
    let _ = writeln!(out, "{indent}<string>{}</string>", escape(value));
}

#[derive(Debug, Clone)]
enum TmValue {
    String(String),
    Dict(BTreeMap<String, TmValue>),
    Array(Vec<TmValue>),
}

impl TmValue {
    fn as_string(&self) -> Option<&str> {
        match self {
            TmValue::String(value) => Some(value.as_str()),
            _ => None,
        }
    }

    fn as_dict(&self) -> Option<&BTreeMap<String, TmValue>> {
        match self {
            TmValue::Dict(map) => Some(map),
            _ => None,
        }
    }

    fn as_array(&self) -> Option<&[TmValue]> {
        match self {
            TmValue::Array(items) => Some(items.as_slice()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
enum TmToken<'a> {
    StartDict,
    EndDict,
    StartArray,
    EndArray,
    Key(&'a str),
    Text(&'a str),
}

struct TokenStream<'a> {
    tokens: Vec<TmToken<'a>>,
    index: usize,
}

impl<'a> TokenStream<'a> {
    fn new(tokens: Vec<TmToken<'a>>) -> Self {
        Self { tokens, index: 0 }
    }

    fn peek(&self) -> Option<&TmToken<'a>> {
        self.tokens.get(self.index)
    }

    fn next(&mut self) -> Option<TmToken<'a>> {
        if let Some(token) = self.tokens.get(self.index) {
            self.index += 1;
            Some(token.clone())
        } else {
            None
        }
    }
}

fn parse_plist(input: &str) -> Result<TmValue, ConvertError> {
    let tokens = tokenize_plist(input)?;
    let mut stream = TokenStream::new(tokens);
    let value = parse_value(&mut stream)?;
    if stream.peek().is_some() {
        return Err(ConvertError::Plist("unexpected trailing tokens"));
    }
    Ok(value)
}

fn tokenize_plist(input: &str) -> Result<Vec<TmToken<'_>>, ConvertError> {
    let mut tokens = Vec::new();
    let mut rest = input;

    loop {
        rest = rest.trim_start();
        if rest.is_empty() {
            break;
        }

        let Some(idx) = rest.find('<') else {
            break;
        };
        if idx > 0 {
            rest = &rest[idx..];
        }

        if rest.starts_with("<?") {
            let end = rest
                .find("?>")
                .ok_or(ConvertError::Plist("unterminated processing instruction"))?;
            rest = &rest[end + 2..];
            continue;
        }

        if rest.starts_with("<!--") {
            let end = rest
                .find("-->")
                .ok_or(ConvertError::Plist("unterminated comment"))?;
            rest = &rest[end + 3..];
            continue;
        }

        if rest.starts_with("</") {
            let end = rest
                .find('>')
                .ok_or(ConvertError::Plist("unterminated closing tag"))?;
            match &rest[2..end] {
                "dict" => tokens.push(TmToken::EndDict),
                "array" => tokens.push(TmToken::EndArray),
                _ => {}
            }
            rest = &rest[end + 1..];
            continue;
        }

        if rest.starts_with("<dict>") {
            tokens.push(TmToken::StartDict);
            rest = &rest["<dict>".len()..];
            continue;
        }
        if rest.starts_with("<array>") {
            tokens.push(TmToken::StartArray);
            rest = &rest["<array>".len()..];
            continue;
        }
        if rest.starts_with("<key>") {
            let (value, remainder) = extract_tag_text(rest, "key")
                .ok_or(ConvertError::Plist("unterminated <key>"))?;
            tokens.push(TmToken::Key(value));
            rest = remainder;
            continue;
        }
        if rest.starts_with("<string>") {
            let (value, remainder) = extract_tag_text(rest, "string")
                .ok_or(ConvertError::Plist("unterminated <string>"))?;
            tokens.push(TmToken::Text(value));
            rest = remainder;
            continue;
        }
        if rest.starts_with("<integer>") {
            let (value, remainder) = extract_tag_text(rest, "integer")
                .ok_or(ConvertError::Plist("unterminated <integer>"))?;
            tokens.push(TmToken::Text(value));
            rest = remainder;
            continue;
        }
        if rest.starts_with("<real>") {
            let (value, remainder) = extract_tag_text(rest, "real")
                .ok_or(ConvertError::Plist("unterminated <real>"))?;
            tokens.push(TmToken::Text(value));
            rest = remainder;
            continue;
        }
        if rest.starts_with("<true/>") {
            tokens.push(TmToken::Text("true"));
            rest = &rest["<true/>".len()..];
            continue;
        }
        if rest.starts_with("<false/>") {
            tokens.push(TmToken::Text("false"));
            rest = &rest["<false/>".len()..];
            continue;
        }

        let end = rest
            .find('>')
            .ok_or(ConvertError::Plist("unterminated tag"))?;
        rest = &rest[end + 1..];
    }

    Ok(tokens)
}

fn parse_value(stream: &mut TokenStream<'_>) -> Result<TmValue, ConvertError> {
    let Some(token) = stream.next() else {
        return Err(ConvertError::Plist("unexpected end of input"));
    };
    match token {
        TmToken::StartDict => parse_dict(stream).map(TmValue::Dict),
        TmToken::StartArray => parse_array(stream).map(TmValue::Array),
        TmToken::Text(text) => Ok(TmValue::String(unescape_text(text))),
        _ => Err(ConvertError::Plist("unexpected token")),
    }
}

fn parse_dict(stream: &mut TokenStream<'_>) -> Result<BTreeMap<String, TmValue>, ConvertError> {
    let mut map = BTreeMap::new();
    loop {
        match stream.peek() {
            Some(TmToken::EndDict) => {
                stream.next();
                break;
            }
            Some(TmToken::Key(key)) => {
                let key = unescape_text(key);
                stream.next();
                let value = parse_value(stream)?;
                map.insert(key, value);
            }
            None => return Err(ConvertError::Plist("unexpected end of input")),
            _ => return Err(ConvertError::Plist("expected key")),
        }
    }
    Ok(map)
}

fn parse_array(stream: &mut TokenStream<'_>) -> Result<Vec<TmValue>, ConvertError> {
    let mut items = Vec::new();
    loop {
        match stream.peek() {
            Some(TmToken::EndArray) => {
                stream.next();
                break;
            }
            Some(_) => items.push(parse_value(stream)?),
            None => return Err(ConvertError::Plist("unexpected end of input")),
        }
    }
    Ok(items)
}

fn extract_tag_text<'a>(input: &'a str, tag: &str) -> Option<(&'a str, &'a str)> {
    let open_end = input.find('>')?;
    let close_tag = format!("</{tag}>");
    let close_pos = input.find(&close_tag)?;
    let content = input[open_end + 1..close_pos].trim();
    let remainder = &input[close_pos + close_tag.len()..];
    Some((content, remainder))
}

fn unescape_text(raw: &str) -> String {
    unescape(raw)
        .map(|cow| cow.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_globals_then_category_entries() {
        let state = ThemeState::default_theme();
        let text = TmThemeConverter.serialize(&state).unwrap();
        assert!(text.starts_with("<?xml"));
        assert!(text.contains("<key>name</key>\n\t<string>Aegean Night</string>"));
        assert!(text.contains("<string>#292928</string>"));
        // Comma-joined scope list for the keyword entry.
        assert!(text.contains(
            "<string>keyword, keyword.control, storage, storage.type, storage.modifier</string>"
        ));
        assert!(text.contains("<string>bold</string>"));
    }

    #[test]
    fn name_with_markup_characters_is_escaped() {
        let mut state = ThemeState::default_theme();
        state.set_name("Salt & Pepper <v2>");
        let text = TmThemeConverter.serialize(&state).unwrap();
        assert!(text.contains("Salt &amp; Pepper &lt;v2&gt;"));
        let patch = TmThemeConverter.deserialize(&text).unwrap();
        assert_eq!(patch.name.as_deref(), Some("Salt & Pepper <v2>"));
    }

    #[test]
    fn deserializes_globals_and_scoped_entries() {
        let text = r#"<?xml version="1.0" encoding="UTF-8"?>
<plist version="1.0">
<dict>
    <key>name</key>
    <string>Sample</string>
    <key>settings</key>
    <array>
        <dict>
            <key>settings</key>
            <dict>
                <key>background</key>
                <string>#282C34</string>
                <key>foreground</key>
                <string>#DCDCDC</string>
            </dict>
        </dict>
        <dict>
            <key>name</key>
            <string>Keywords</string>
            <key>scope</key>
            <string>unknown.scope, keyword.control</string>
            <key>settings</key>
            <dict>
                <key>foreground</key>
                <string>#C678DD</string>
                <key>fontStyle</key>
                <string>bold italic</string>
            </dict>
        </dict>
    </array>
</dict>
</plist>
"#;
        let patch = TmThemeConverter.deserialize(text).unwrap();
        assert_eq!(patch.name.as_deref(), Some("Sample"));
        assert_eq!(patch.background.as_deref(), Some("#282C34"));
        assert_eq!(patch.foreground.as_deref(), Some("#DCDCDC"));
        let keyword = &patch.categories[&TokenCategory::Keyword];
        assert_eq!(keyword.color, "#C678DD");
        assert!(keyword.emphasis.bold);
        assert!(keyword.emphasis.italic);
    }

    #[test]
    fn entries_without_foreground_are_skipped() {
        let text = r#"<plist version="1.0">
<dict>
    <key>settings</key>
    <array>
        <dict>
            <key>scope</key>
            <string>string</string>
            <key>settings</key>
            <dict>
                <key>background</key>
                <string>#000000</string>
            </dict>
        </dict>
    </array>
</dict>
</plist>
"#;
        let patch = TmThemeConverter.deserialize(text).unwrap();
        assert!(patch.categories.is_empty());
    }

    #[test]
    fn truncated_document_is_a_hard_error() {
        let text = "<plist><dict><key>name</key>";
        assert!(matches!(
            TmThemeConverter.deserialize(text),
            Err(ConvertError::Plist(_))
        ));
    }
}
