//! Rendering a [`Poll`] into what gets sent: display text, optional choice card, reaction symbols.

use super::Poll;
use crate::types::Card;

/// Prefix of every poll message (bar chart).
pub const POLL_GLYPH: &str = "📊";
pub const THUMBS_UP: &str = "👍";
pub const THUMBS_DOWN: &str = "👎";

/// REGIONAL INDICATOR SYMBOL LETTER A.
const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;
const REGIONAL_INDICATOR_COUNT: i64 = 26;

/// `0 → 🇦 … 25 → 🇿`; any other index has no symbol and yields an empty string.
pub fn symbol_for(index: i64) -> String {
    if !(0..REGIONAL_INDICATOR_COUNT).contains(&index) {
        return String::new();
    }
    // In range, so the offset fits in u32 and lands on an assigned code point.
    char::from_u32(REGIONAL_INDICATOR_A + index as u32)
        .map(String::from)
        .unwrap_or_default()
}

impl Poll {
    /// The question as sent in the message body. Kept out of the card, which cannot render mentions.
    pub fn display_text(&self) -> String {
        format!("{} {}", POLL_GLYPH, self.question)
    }

    /// One `<symbol> <choice>` line per choice; `None` for a yes/no poll.
    pub fn card_body(&self) -> Option<Card> {
        if self.is_binary() {
            return None;
        }
        let description = self
            .choices
            .iter()
            .enumerate()
            .map(|(i, choice)| format!("{} {}", symbol_for(i as i64), choice))
            .collect::<Vec<_>>()
            .join("\n");
        Some(Card::with_description(description))
    }

    /// Reactions to attach, in order. Choices past the 26th map to empty symbols.
    pub fn reaction_symbols(&self) -> Vec<String> {
        if self.is_binary() {
            return vec![THUMBS_UP.to_string(), THUMBS_DOWN.to_string()];
        }
        (0..self.choices.len())
            .map(|i| symbol_for(i as i64))
            .collect()
    }
}

/// Usage card sent back when a command's quotes don't pair up.
pub fn help_card(command_prefix: &str) -> Card {
    Card {
        title: Some("Usage:".to_string()),
        description: format!(
            "{prefix} \"Question\"\nOr\n{prefix} \"Question\" \"Choice A\" \"Choice B\" \"Choice C\"",
            prefix = command_prefix
        ),
        footer: Some("HEPIA powered".to_string()),
    }
}
