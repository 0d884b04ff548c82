//! `/poll` command parsing.
//!
//! All arguments are double-quoted: the first quoted segment is the question, the rest are
//! choices. Anything outside quotes (the command keyword, commas, stray words) is dropped.

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::Poll;

/// Shortest text between two quotes; `(?s)` so a choice may span lines.
static QUOTED: Lazy<Regex> = Lazy::new(|| Regex::new(r#"(?s)"(.*?)""#).expect("valid regex"));

/// The command's quotes do not pair up (zero or an odd number of `"`).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Poll must have an even, non-zero number of double quotes (found {quote_count})")]
pub struct MalformedCommand {
    pub quote_count: usize,
}

/// Parses the full message text (command keyword included) into a [`Poll`].
///
/// The quote check is global over the whole text, so a stray `"` anywhere fails the command.
pub fn parse(raw: &str) -> Result<Poll, MalformedCommand> {
    let quote_count = raw.matches('"').count();
    if quote_count == 0 || quote_count % 2 != 0 {
        return Err(MalformedCommand { quote_count });
    }

    let mut segments = QUOTED
        .captures_iter(raw)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string());

    // An even, non-zero count always yields at least one segment.
    let question = segments.next().unwrap_or_default();
    Ok(Poll::new(question, segments.collect()))
}

impl FromStr for Poll {
    type Err = MalformedCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
