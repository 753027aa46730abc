/// Plain-text rendering for terminal surfaces

use crate::formatter::{RenderDocument, RULE_WIDTH};

pub fn render_text(document: &RenderDocument) -> String {
    match document {
        RenderDocument::Plain(text) => text.clone(),
        RenderDocument::Composite(contributions) => {
            let rule = "-".repeat(RULE_WIDTH);
            contributions
                .iter()
                .map(|c| {
                    if c.body.is_empty() {
                        format!("{} {}\n{}", c.icon, c.name, rule)
                    } else {
                        format!("{} {}\n{}\n{}", c.icon, c.name, rule, c.body)
                    }
                })
                .collect::<Vec<_>>()
                .join("\n\n")
        }
    }
}
