//! Consumer side of the demo: performs text intentions against a target line.

use motion_expression::Expression;

use crate::text::TextIntention;

/// A line of text that intentions are appended to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextTarget {
    separator: String,
    text: String,
}

impl TextTarget {
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            text: String::new(),
        }
    }

    /// Appends the intention's text, separated from any existing content.
    pub fn perform(&mut self, intention: &TextIntention) {
        if !self.text.is_empty() {
            self.text.push_str(&self.separator);
        }
        self.text.push_str(&intention.text);
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.text
    }
}

/// Performs every intention of `expression`, in order, onto a fresh target.
pub fn render<E>(expression: &E, separator: &str) -> String
where
    E: Expression<Intention = TextIntention>,
{
    let mut target = TextTarget::new(separator);
    for intention in expression.intentions() {
        target.perform(&intention);
    }
    target.into_inner()
}
