/// Per-section parsing state machine

use super::glyph::match_header;
use super::{AgentContribution, AgentStyle, RULE_TOKEN};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ExpectHeader,
    ExpectSeparatorOrBody,
    InBody,
}

/// Parse one section of a composite transcript.
///
/// Returns `None` for blank sections and for sections whose first line is not
/// a glyph header. Lines seen before the first `---` rule are metadata and are
/// discarded once the rule appears; without a rule they become the body.
pub fn parse_section(section: &str) -> Option<AgentContribution> {
    let trimmed = section.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut state = State::ExpectHeader;
    let mut header = None;
    let mut lines: Vec<&str> = Vec::new();

    for line in trimmed.split('\n') {
        state = match state {
            State::ExpectHeader => {
                let header_line = line.trim();
                match match_header(header_line) {
                    Some(matched) => {
                        header = Some(matched);
                        State::ExpectSeparatorOrBody
                    }
                    None => {
                        debug!(target: "formatter", header = header_line, "no agent header match");
                        return None;
                    }
                }
            }
            State::ExpectSeparatorOrBody if line.contains(RULE_TOKEN) => {
                lines.clear();
                State::InBody
            }
            State::ExpectSeparatorOrBody | State::InBody => {
                lines.push(line);
                state
            }
        };
    }

    let (icon, name) = header?;
    Some(AgentContribution {
        icon,
        name: name.to_string(),
        body: lines.join("\n").trim().to_string(),
        style: AgentStyle::classify(name),
    })
}
