/// Abstract class of source-code lexical element a theme styles as one unit.
/// The set is fixed; external formats alias these through scope identifiers
/// (TextMate-style dotted names) and document-highlight token names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenCategory {
    Keyword,
    String,
    Comment,
    Number,
    Function,
    Type,
    Variable,
    Constant,
    Operator,
    Builtin,
    Preprocessor,
    Punctuation,
}

impl TokenCategory {
    /// Registry order. Serializers emit rules in this order and importers
    /// resolve against it, so it is part of the format contract.
    pub const ALL: [TokenCategory; 12] = [
        TokenCategory::Keyword,
        TokenCategory::String,
        TokenCategory::Comment,
        TokenCategory::Number,
        TokenCategory::Function,
        TokenCategory::Type,
        TokenCategory::Variable,
        TokenCategory::Constant,
        TokenCategory::Operator,
        TokenCategory::Builtin,
        TokenCategory::Preprocessor,
        TokenCategory::Punctuation,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TokenCategory::Keyword => "Keyword",
            TokenCategory::String => "String",
            TokenCategory::Comment => "Comment",
            TokenCategory::Number => "Number",
            TokenCategory::Function => "Function",
            TokenCategory::Type => "Type",
            TokenCategory::Variable => "Variable",
            TokenCategory::Constant => "Constant",
            TokenCategory::Operator => "Operator",
            TokenCategory::Builtin => "Built-in",
            TokenCategory::Preprocessor => "Preprocessor",
            TokenCategory::Punctuation => "Punctuation",
        }
    }

    /// Highlighting-engine scope identifiers for this category, most general
    /// first. Used by both the VS Code and tmTheme formats.
    pub fn scopes(&self) -> &'static [&'static str] {
        match self {
            TokenCategory::Keyword => &[
                "keyword",
                "keyword.control",
                "storage",
                "storage.type",
                "storage.modifier",
            ],
            TokenCategory::String => &["string", "string.quoted", "string.template"],
            TokenCategory::Comment => &[
                "comment",
                "comment.line",
                "comment.block",
                "comment.block.documentation",
            ],
            TokenCategory::Number => &[
                "constant.numeric",
                "constant.numeric.integer",
                "constant.numeric.float",
            ],
            TokenCategory::Function => &[
                "entity.name.function",
                "support.function",
                "meta.function-call",
            ],
            TokenCategory::Type => &[
                "entity.name.type",
                "entity.name.class",
                "support.type",
                "support.class",
            ],
            TokenCategory::Variable => &["variable", "variable.other", "variable.parameter"],
            TokenCategory::Constant => &[
                "constant",
                "constant.language",
                "variable.other.constant",
            ],
            TokenCategory::Operator => &["keyword.operator"],
            TokenCategory::Builtin => &["support.function.builtin", "variable.language"],
            TokenCategory::Preprocessor => &[
                "meta.preprocessor",
                "entity.other.attribute-name",
                "meta.annotation",
            ],
            TokenCategory::Punctuation => &[
                "punctuation",
                "punctuation.separator",
                "punctuation.terminator",
                "meta.brace",
            ],
        }
    }

    /// Document-highlight token names for this category, stored without the
    /// `Tok` suffix the file format appends.
    pub fn highlight_tokens(&self) -> &'static [&'static str] {
        match self {
            TokenCategory::Keyword => &["Keyword", "ControlFlow", "Import"],
            TokenCategory::String => &["String", "VerbatimString", "SpecialString", "Char"],
            TokenCategory::Comment => &["Comment", "Documentation", "CommentVar"],
            TokenCategory::Number => &["DecVal", "Float", "BaseN"],
            TokenCategory::Function => &["Function"],
            TokenCategory::Type => &["DataType"],
            TokenCategory::Variable => &["Variable"],
            TokenCategory::Constant => &["Constant", "SpecialChar"],
            TokenCategory::Operator => &["Operator"],
            TokenCategory::Builtin => &["BuiltIn", "Extension"],
            TokenCategory::Preprocessor => &["Preprocessor", "Annotation", "Attribute"],
            TokenCategory::Punctuation => &["Other"],
        }
    }
}

/// The two theme-wide colors. Both external formats express these directly,
/// so no per-format identifier mapping is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlobalSetting {
    Background,
    Foreground,
}

impl GlobalSetting {
    pub const ALL: [GlobalSetting; 2] = [GlobalSetting::Background, GlobalSetting::Foreground];

    pub fn label(&self) -> &'static str {
        match self {
            GlobalSetting::Background => "Background",
            GlobalSetting::Foreground => "Foreground",
        }
    }
}

/// Every document-highlight token the `.theme` style table covers, in
/// emission order. Includes tokens no category owns; those serialize with a
/// null text color.
pub const HIGHLIGHT_TOKEN_SUPERSET: [&str; 31] = [
    "Keyword",
    "ControlFlow",
    "Import",
    "DataType",
    "DecVal",
    "BaseN",
    "Float",
    "Char",
    "SpecialChar",
    "String",
    "VerbatimString",
    "SpecialString",
    "Comment",
    "Documentation",
    "CommentVar",
    "Annotation",
    "Attribute",
    "Function",
    "Variable",
    "Constant",
    "Operator",
    "BuiltIn",
    "Extension",
    "Preprocessor",
    "Other",
    "Normal",
    "Alert",
    "Error",
    "Warning",
    "Information",
    "RegionMarker",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_category_has_identifiers() {
        for category in TokenCategory::ALL {
            assert!(!category.scopes().is_empty(), "{category:?} has no scopes");
            assert!(
                !category.highlight_tokens().is_empty(),
                "{category:?} has no highlight tokens"
            );
        }
    }

    #[test]
    fn identifiers_are_unique_across_registry() {
        let mut scopes = HashSet::new();
        let mut tokens = HashSet::new();
        for category in TokenCategory::ALL {
            for scope in category.scopes() {
                assert!(scopes.insert(*scope), "scope '{scope}' registered twice");
            }
            for token in category.highlight_tokens() {
                assert!(tokens.insert(*token), "token '{token}' registered twice");
            }
        }
    }

    #[test]
    fn labels_are_nonempty() {
        for category in TokenCategory::ALL {
            assert!(!category.label().is_empty());
        }
        for setting in GlobalSetting::ALL {
            assert!(!setting.label().is_empty());
        }
    }

    #[test]
    fn superset_covers_all_registered_tokens() {
        let superset: HashSet<&str> = HIGHLIGHT_TOKEN_SUPERSET.into_iter().collect();
        for category in TokenCategory::ALL {
            for token in category.highlight_tokens() {
                assert!(superset.contains(token), "'{token}' missing from superset");
            }
        }
    }
}
