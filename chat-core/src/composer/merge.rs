use crate::error::{ChatError, Result};
use crate::formatter::{match_header, split_sections, AgentContribution, DELIMITER_LEN, RULE_WIDTH};

/// Encode contributions in the composite transcript wire format.
///
/// Each contribution is written as `"{icon} {NAME}"`, a dashed rule, the body
/// and a blank line; contributions are joined by a delimiter line.
///
/// Parsing the result yields the same icons, upper-cased names and trimmed
/// bodies, with styles derived from the names. Contributions that cannot be
/// encoded that way are rejected with [`ChatError::InvalidInput`]: a name that
/// is blank, multi-line or padded with whitespace, or a name or body holding
/// a delimiter run.
pub fn compose_transcript(contributions: &[AgentContribution]) -> Result<String> {
    let delimiter = "=".repeat(DELIMITER_LEN);
    let rule = "-".repeat(RULE_WIDTH);
    let mut lines = Vec::new();

    for (idx, contribution) in contributions.iter().enumerate() {
        let header = format!("{} {}", contribution.icon, contribution.name.to_uppercase());
        check_encodable(idx, &header, contribution)?;

        if idx > 0 {
            lines.push(delimiter.clone());
        }
        lines.push(header);
        lines.push(rule.clone());
        lines.push(contribution.body.clone());
        lines.push(String::new());
    }

    Ok(lines.join("\n"))
}

fn check_encodable(idx: usize, header: &str, contribution: &AgentContribution) -> Result<()> {
    let name = contribution.name.as_str();
    if name.contains(['\n', '\r']) || name.trim() != name || match_header(header).is_none() {
        return Err(ChatError::InvalidInput(format!(
            "contribution {idx}: agent name {:?} does not form a header",
            contribution.name
        )));
    }
    if split_sections(header).len() > 1 || split_sections(&contribution.body).len() > 1 {
        return Err(ChatError::InvalidInput(format!(
            "contribution {idx}: text contains a {DELIMITER_LEN}-character delimiter"
        )));
    }
    Ok(())
}
