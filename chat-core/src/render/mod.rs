pub mod html;
pub mod text;

pub use html::render_html;
pub use text::render_text;

use serde::{Deserialize, Serialize};

/// How contribution bodies are inserted into markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkupPolicy {
    /// Bodies are escaped and display as literal text.
    #[default]
    Escape,
    /// Bodies are inserted unmodified. Only for a fully trusted backend.
    Trusted,
}

impl MarkupPolicy {
    pub fn from_trust(trust_markup: bool) -> Self {
        if trust_markup {
            MarkupPolicy::Trusted
        } else {
            MarkupPolicy::Escape
        }
    }
}
