/// Markup rendering for the browser transcript surface

use super::MarkupPolicy;
use crate::formatter::{AgentContribution, RenderDocument};
use crate::security::escape_html;

pub fn render_html(document: &RenderDocument, policy: MarkupPolicy) -> String {
    match document {
        RenderDocument::Plain(text) => escape_html(text),
        RenderDocument::Composite(contributions) => {
            let mut html = String::from("<div class=\"multi-agent-response\">");
            for contribution in contributions {
                html.push_str(&render_contribution(contribution, policy));
            }
            html.push_str("</div>");
            html
        }
    }
}

fn render_contribution(contribution: &AgentContribution, policy: MarkupPolicy) -> String {
    let body = match policy {
        MarkupPolicy::Escape => escape_html(&contribution.body),
        MarkupPolicy::Trusted => contribution.body.clone(),
    };
    format!(
        concat!(
            "<div class=\"{class}\">",
            "<div class=\"agent-header\">",
            "<span class=\"agent-icon\">{icon}</span>",
            "<span class=\"agent-name\">{name}</span>",
            "</div>",
            "<div class=\"agent-content\">{body}</div>",
            "</div>"
        ),
        class = contribution.style.css_class(),
        icon = contribution.icon,
        name = escape_html(&contribution.name),
        body = body,
    )
}
