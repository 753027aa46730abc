pub mod merge;

pub use merge::compose_transcript;

use serde::{Deserialize, Serialize};

/// Discussion round a contribution belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    Opening,
    Initial,
    Response,
    Synthesis,
}

impl Stage {
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Opening => "OPENING",
            Stage::Initial => "INITIAL",
            Stage::Response => "RESPONSE",
            Stage::Synthesis => "SYNTHESIS",
        }
    }
}

/// Header name for an agent speaking in a given round, e.g. `"Project Manager - OPENING"`.
pub fn display_name(agent: &str, stage: Stage) -> String {
    format!("{} - {}", agent, stage.label())
}
