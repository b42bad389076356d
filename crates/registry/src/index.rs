use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::category::TokenCategory;

/// Marker the document-highlight file format appends to token names
/// (`Keyword` is written as `KeywordTok`).
pub const TOKEN_SUFFIX: &str = "Tok";

/// Reverse of the category registry, built once at startup. Maps each
/// external identifier back to its owning category. Should two categories
/// ever claim the same identifier, the first-registered one wins; that
/// tie-break is a documented policy, not an error.
static SCOPE_INDEX: Lazy<HashMap<&'static str, TokenCategory>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for category in TokenCategory::ALL {
        for scope in category.scopes() {
            index.entry(*scope).or_insert(category);
        }
    }
    index
});

static HIGHLIGHT_TOKEN_INDEX: Lazy<HashMap<&'static str, TokenCategory>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for category in TokenCategory::ALL {
        for token in category.highlight_tokens() {
            index.entry(*token).or_insert(category);
        }
    }
    index
});

/// Resolves a highlighting-engine scope identifier to its category.
pub fn category_for_scope(scope: &str) -> Option<TokenCategory> {
    SCOPE_INDEX.get(scope.trim()).copied()
}

/// Resolves a document-highlight token name to its category. Accepts both
/// the bare spelling (`Keyword`) and the suffixed file spelling
/// (`KeywordTok`).
pub fn category_for_highlight_token(token: &str) -> Option<TokenCategory> {
    let token = token.trim();
    let bare = token.strip_suffix(TOKEN_SUFFIX).unwrap_or(token);
    HIGHLIGHT_TOKEN_INDEX.get(bare).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_every_registered_scope() {
        for category in TokenCategory::ALL {
            for scope in category.scopes() {
                assert_eq!(category_for_scope(scope), Some(category));
            }
        }
    }

    #[test]
    fn resolves_tokens_with_and_without_suffix() {
        assert_eq!(
            category_for_highlight_token("Keyword"),
            Some(TokenCategory::Keyword)
        );
        assert_eq!(
            category_for_highlight_token("KeywordTok"),
            Some(TokenCategory::Keyword)
        );
        assert_eq!(
            category_for_highlight_token("VerbatimStringTok"),
            Some(TokenCategory::String)
        );
    }

    #[test]
    fn unknown_identifiers_resolve_to_none() {
        assert_eq!(category_for_scope("meta.embedded.block"), None);
        assert_eq!(category_for_highlight_token("AlertTok"), None);
        assert_eq!(category_for_highlight_token("NormalTok"), None);
    }

    #[test]
    fn nested_scopes_resolve_to_their_own_category() {
        assert_eq!(
            category_for_scope("keyword"),
            Some(TokenCategory::Keyword)
        );
        assert_eq!(
            category_for_scope("keyword.operator"),
            Some(TokenCategory::Operator)
        );
        assert_eq!(
            category_for_scope("constant.numeric"),
            Some(TokenCategory::Number)
        );
        assert_eq!(
            category_for_scope("constant"),
            Some(TokenCategory::Constant)
        );
    }
}
