//! Poll definition and the three pieces built on it: [`parser`] (command text → [`Poll`]),
//! [`render`] (display text, card, reaction symbols) and [`registry`] (pending polls keyed by
//! correlation token until the bot sees its own echo).

pub mod parser;
pub mod registry;
pub mod render;

use serde::{Deserialize, Serialize};

pub use parser::{parse, MalformedCommand};
pub use registry::{CorrelationToken, PendingPolls};
pub use render::{help_card, symbol_for, POLL_GLYPH, THUMBS_DOWN, THUMBS_UP};

/// A question plus an ordered list of zero or more choices. Choice order is reaction order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Poll {
    pub question: String,
    pub choices: Vec<String>,
}

impl Poll {
    pub fn new(question: impl Into<String>, choices: Vec<String>) -> Self {
        Self {
            question: question.into(),
            choices,
        }
    }

    /// Yes/no poll: no enumerated choices, answered with thumbs up / down.
    pub fn is_binary(&self) -> bool {
        self.choices.is_empty()
    }
}
