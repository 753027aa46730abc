pub mod glyph;
pub mod section;

pub use glyph::{match_header, Glyph};
pub use section::parse_section;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Number of `=` characters in a section delimiter. Shared with the backend.
pub const DELIMITER_LEN: usize = 60;

/// Substring marking the rule line between a section header and its body.
pub const RULE_TOKEN: &str = "---";

/// Width of the dashed rule the backend writes under each header.
pub const RULE_WIDTH: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentStyle {
    Generic,
    ProjectManager,
    Architect,
    DomainExpert,
}

impl AgentStyle {
    /// First matching rule wins; matching is case-sensitive containment.
    pub fn classify(name: &str) -> Self {
        if name.contains("PROJECT MANAGER") {
            AgentStyle::ProjectManager
        } else if name.contains("AI ARCHITECT") {
            AgentStyle::Architect
        } else if name.contains("DOMAIN EXPERT") {
            AgentStyle::DomainExpert
        } else {
            AgentStyle::Generic
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            AgentStyle::Generic => "agent-response",
            AgentStyle::ProjectManager => "agent-response pm-response",
            AgentStyle::Architect => "agent-response architect-response",
            AgentStyle::DomainExpert => "agent-response expert-response",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentContribution {
    pub icon: Glyph,
    pub name: String,
    pub body: String,
    pub style: AgentStyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderDocument {
    /// Response shown verbatim as text.
    Plain(String),
    /// Ordered agent contributions. May be empty when glyphs were present but
    /// no section carried a valid header.
    Composite(Vec<AgentContribution>),
}

impl RenderDocument {
    pub fn is_composite(&self) -> bool {
        matches!(self, RenderDocument::Composite(_))
    }

    pub fn contributions(&self) -> &[AgentContribution] {
        match self {
            RenderDocument::Composite(contributions) => contributions,
            RenderDocument::Plain(_) => &[],
        }
    }
}

/// Split `raw` on every maximal run of exactly [`DELIMITER_LEN`] `=` characters.
///
/// Runs of any other length are ordinary text.
pub fn split_sections(raw: &str) -> Vec<&str> {
    let bytes = raw.as_bytes();
    let mut sections = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'=' {
            i += 1;
            continue;
        }
        let run_start = i;
        while i < bytes.len() && bytes[i] == b'=' {
            i += 1;
        }
        if i - run_start == DELIMITER_LEN {
            sections.push(&raw[start..run_start]);
            start = i;
        }
    }

    sections.push(&raw[start..]);
    sections
}

/// Turn a raw backend response into a renderable document.
///
/// Text without any agent glyph comes back as [`RenderDocument::Plain`]
/// unchanged, whatever delimiters it contains.
pub fn format(raw: &str) -> RenderDocument {
    if !Glyph::appears_in(raw) {
        debug!(target: "formatter", "no agent icons found, showing as plain text");
        return RenderDocument::Plain(raw.to_string());
    }

    let sections = split_sections(raw);
    debug!(target: "formatter", sections = sections.len(), length = raw.len(), "parsing multi-agent response");

    let mut contributions = Vec::new();
    for (index, section) in sections.iter().enumerate() {
        match parse_section(section) {
            Some(contribution) => {
                debug!(target: "formatter", index, agent = %contribution.name, "parsed agent section");
                contributions.push(contribution);
            }
            None => debug!(target: "formatter", index, "skipped section"),
        }
    }

    debug!(target: "formatter", agents = contributions.len(), "finished parsing");
    RenderDocument::Composite(contributions)
}
