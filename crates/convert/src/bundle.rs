//! Import dispatch and export bundle assembly. Exactly one converter runs
//! per import; the theme name is the filename stem for every exported file.

use std::fs;
use std::path::Path;

use themesmith_theme::{ThemePatch, ThemeState};

use crate::error::ConvertError;
use crate::highlight_style::HighlightStyleConverter;
use crate::tmtheme::TmThemeConverter;
use crate::vscode::VscodeConverter;
use crate::FormatConverter;

/// The three supported external formats, in archive-preference order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ThemeFormat {
    Vscode,
    HighlightStyle,
    TmTheme,
}

impl ThemeFormat {
    pub const ALL: [ThemeFormat; 3] = [
        ThemeFormat::Vscode,
        ThemeFormat::HighlightStyle,
        ThemeFormat::TmTheme,
    ];

    pub fn converter(&self) -> &'static dyn FormatConverter {
        match self {
            ThemeFormat::Vscode => &VscodeConverter,
            ThemeFormat::HighlightStyle => &HighlightStyleConverter,
            ThemeFormat::TmTheme => &TmThemeConverter,
        }
    }

    pub fn file_name(&self, theme_name: &str) -> String {
        match self {
            ThemeFormat::Vscode => format!("{theme_name}-vscode.json"),
            ThemeFormat::HighlightStyle => format!("{theme_name}.theme"),
            ThemeFormat::TmTheme => format!("{theme_name}.tmTheme"),
        }
    }
}

/// A named text blob, the unit the archive packager and the importer
/// exchange with the outside world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub name: String,
    pub contents: String,
}

/// Picks the converter for an import: file extension first, content shape
/// (a format-distinguishing field) when the extension is ambiguous or
/// missing.
pub fn detect_format(file_name: &str, contents: &str) -> Option<ThemeFormat> {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");
    if extension.eq_ignore_ascii_case("tmtheme") {
        return Some(ThemeFormat::TmTheme);
    }
    if extension.eq_ignore_ascii_case("theme") {
        return Some(ThemeFormat::HighlightStyle);
    }
    if extension.eq_ignore_ascii_case("json") {
        // Both JSON formats can travel under `.json`; the style table is the
        // distinguishing field.
        if contents.contains("\"text-styles\"") && !contents.contains("\"tokenColors\"") {
            return Some(ThemeFormat::HighlightStyle);
        }
        return Some(ThemeFormat::Vscode);
    }
    if contents.contains("<plist") {
        return Some(ThemeFormat::TmTheme);
    }
    if contents.contains("\"tokenColors\"") {
        return Some(ThemeFormat::Vscode);
    }
    if contents.contains("\"text-styles\"") {
        return Some(ThemeFormat::HighlightStyle);
    }
    None
}

/// Imports one theme file, replacing nothing itself: the returned patch is
/// applied by the caller. / 匯入單一主題檔案，回傳待套用的更新。
pub fn import_str(file_name: &str, contents: &str) -> Result<ThemePatch, ConvertError> {
    let format = detect_format(file_name, contents)
        .ok_or_else(|| ConvertError::UnrecognizedFormat(file_name.to_string()))?;
    format.converter().deserialize(contents)
}

/// Reads and imports a theme file from disk, falling back to the file stem
/// when the format carries no theme name. / 從磁碟讀取並匯入主題檔案。
pub fn import_file(path: impl AsRef<Path>) -> Result<ThemePatch, ConvertError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("");
    let mut patch = import_str(file_name, &contents)?;
    if patch.name.is_none() {
        patch.name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .map(str::to_string);
    }
    Ok(patch)
}

/// Serializes the theme through all three converters. The result is the
/// interface handed to the (external) archive packager.
pub fn export_bundle(state: &ThemeState) -> Result<Vec<ExportFile>, ConvertError> {
    let mut files = Vec::with_capacity(ThemeFormat::ALL.len());
    for format in ThemeFormat::ALL {
        files.push(ExportFile {
            name: format.file_name(state.name()),
            contents: format.converter().serialize(state)?,
        });
    }
    Ok(files)
}

/// When an archive offers several theme files, only one is imported:
/// the VS Code JSON, then the highlight-style file, then the tmTheme.
pub fn select_preferred(files: &[ExportFile]) -> Option<&ExportFile> {
    files
        .iter()
        .filter_map(|file| {
            detect_format(&file.name, &file.contents).map(|format| (format, file))
        })
        .min_by_key(|(format, _)| *format)
        .map(|(_, file)| file)
}
