/// Agent glyphs recognized in composite transcript headers

use serde::{Deserialize, Serialize};
use std::fmt;

const VARIATION_SELECTOR: char = '\u{FE0F}';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Glyph {
    Target,
    Building,
    Briefcase,
}

impl Glyph {
    pub const ALL: [Glyph; 3] = [Glyph::Target, Glyph::Building, Glyph::Briefcase];

    /// Canonical text of the glyph as the backend emits it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Glyph::Target => "🎯",
            Glyph::Building => "🏗️",
            Glyph::Briefcase => "💼",
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            '🎯' => Some(Glyph::Target),
            '🏗' => Some(Glyph::Building),
            '💼' => Some(Glyph::Briefcase),
            _ => None,
        }
    }

    /// Whether any recognized glyph occurs anywhere in `text`, in its
    /// canonical form. A bare building glyph without the selector does not count.
    pub fn appears_in(text: &str) -> bool {
        Self::ALL.iter().any(|glyph| text.contains(glyph.as_str()))
    }

    /// Every glyph occurrence in `line`, as (glyph, byte offset just past it).
    ///
    /// The building glyph is accepted with or without its trailing variation
    /// selector; the selector is consumed when present.
    pub fn find_all(line: &str) -> Vec<(Glyph, usize)> {
        let mut found = Vec::new();
        let mut chars = line.char_indices().peekable();
        while let Some((offset, c)) = chars.next() {
            let Some(glyph) = Self::from_char(c) else {
                continue;
            };
            let mut end = offset + c.len_utf8();
            if let Some(&(next_offset, VARIATION_SELECTOR)) = chars.peek() {
                end = next_offset + VARIATION_SELECTOR.len_utf8();
                chars.next();
            }
            found.push((glyph, end));
        }
        found
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Match a header line: a glyph, one or more whitespace characters, then a
/// non-empty agent name running to the end of the line.
///
/// The match is not anchored; stray text before the glyph is ignored and the
/// first glyph that satisfies the pattern wins.
pub fn match_header(line: &str) -> Option<(Glyph, &str)> {
    for (glyph, end) in Glyph::find_all(line) {
        let rest = &line[end..];
        if !rest.starts_with(char::is_whitespace) {
            continue;
        }
        let name = rest.trim_start();
        if !name.is_empty() {
            return Some((glyph, name));
        }
    }
    None
}
