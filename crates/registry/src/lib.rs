mod category;
mod index;

pub use category::{GlobalSetting, TokenCategory, HIGHLIGHT_TOKEN_SUPERSET};
pub use index::{category_for_highlight_token, category_for_scope, TOKEN_SUFFIX};
