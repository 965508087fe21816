//! Parsing generated scenario text into narrative plus choices.

use crate::error::{EngineError, EngineResult};

/// A parsed adventure must offer exactly this many choices.
pub const REQUIRED_CHOICES: usize = 3;

/// Generated text split into narrative and an ordered choice list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedScenario {
    /// Everything that was not a numbered choice line, joined by newlines.
    pub narrative: String,
    /// Choice texts in encountered order, numbering prefixes stripped.
    pub choices: Vec<String>,
}

/// Split raw generated text into a narrative and exactly three choices.
///
/// A line whose trimmed form starts with `<digits> '.'` is a choice; the
/// prefix is stripped and the remainder kept in encountered order. Choices
/// are keyed by position ("1".."3"), not by whatever numbering the source
/// text used, so malformed or repeated numbering cannot skew the keys. Any
/// choice count other than three fails with
/// [`EngineError::InsufficientChoices`] and the text is discarded.
pub fn parse_scenario(raw: &str) -> EngineResult<ParsedScenario> {
    let mut narrative_lines: Vec<&str> = Vec::new();
    let mut choices: Vec<String> = Vec::new();

    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match strip_choice_prefix(line) {
            Some(rest) => choices.push(rest.to_string()),
            None => narrative_lines.push(line),
        }
    }

    if choices.len() != REQUIRED_CHOICES {
        return Err(EngineError::InsufficientChoices(choices.len()));
    }

    Ok(ParsedScenario {
        narrative: narrative_lines.join("\n"),
        choices,
    })
}

/// Match a "leading integer, period, optional space" prefix and return the
/// remainder.
fn strip_choice_prefix(line: &str) -> Option<&str> {
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    line[digits..].strip_prefix('.').map(str::trim_start)
}
