//! Splits a raw provider reply into an explanation paragraph and a bullet list.
//!
//! Best effort: the reply is expected to look like
//!
//! ```text
//! Explanation:
//! ...
//!
//! Bullets:
//! - one
//! - two
//! ```
//!
//! but any other shape still yields a displayable result.

use serde::Serialize;

const EXPLANATION_MARKER: &str = "Explanation:";
const BULLETS_MARKER: &str = "Bullets:";
const BULLET_PREFIX: &str = "- ";

/// Shown when the reply is absent or empty.
pub const NO_EXPLANATION_MESSAGE: &str = "No explanation received from AI.";

/// Display-ready split of a reply.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ParsedExplanation {
    pub explanation: String,
    pub bullets: Vec<String>,
}

impl ParsedExplanation {
    fn whole(raw: &str) -> Self {
        Self {
            explanation: raw.to_string(),
            bullets: Vec::new(),
        }
    }
}

/// Parses `raw` into explanation + bullets. Never panics.
///
/// - `None` or `""`: explanation is [`NO_EXPLANATION_MESSAGE`].
/// - No `Bullets:` marker: the whole text is the explanation, no bullets.
/// - Otherwise the text before the first marker, minus a leading `Explanation:` and trimmed,
///   is the explanation (the whole text if that comes out empty). Bullets are the trimmed lines
///   between the first marker and the next one (if any) that start with `- `, prefix removed.
pub fn parse_explanation(raw: Option<&str>) -> ParsedExplanation {
    let raw = match raw {
        Some(r) if !r.is_empty() => r,
        _ => return ParsedExplanation::whole(NO_EXPLANATION_MESSAGE),
    };

    let Some((head, rest)) = raw.split_once(BULLETS_MARKER) else {
        return ParsedExplanation::whole(raw);
    };
    let section = rest.split(BULLETS_MARKER).next().unwrap_or(rest);

    let head = head.trim_start();
    let explanation = head.strip_prefix(EXPLANATION_MARKER).unwrap_or(head).trim();
    let explanation = if explanation.is_empty() { raw } else { explanation };

    ParsedExplanation {
        explanation: explanation.to_string(),
        bullets: bullets(section),
    }
}

fn bullets(section: &str) -> Vec<String> {
    section
        .lines()
        .map(str::trim)
        .filter_map(|line| line.strip_prefix(BULLET_PREFIX))
        .map(|item| item.trim_start().to_string())
        .collect()
}
