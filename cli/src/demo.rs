//! The sample chains: one root language, a seeded term, two sibling
//! modifications of it, and a longer chain bridging through five terms.

use motion_expression::{ChainSettings, ExpressionError, Term};

use crate::render::render;
use crate::text::TextLanguage;

/// One rendered sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoLine {
    pub label: &'static str,
    pub rendered: String,
}

pub fn run(settings: ChainSettings, separator: &str) -> Result<Vec<DemoLine>, ExpressionError> {
    let exp1 = TextLanguage::with_settings(settings);
    let exp2 = exp1.term();
    let exp3 = exp2.text("foobar")?;
    let exp4 = exp2.text("baz")?;
    let exp5 = exp3
        .and()?
        .term()
        .text("qux")?
        .and()?
        .term()
        .and()?
        .term()
        .and()?
        .term();

    Ok(vec![
        DemoLine {
            label: "language",
            rendered: render(&exp1, separator),
        },
        DemoLine {
            label: "term",
            rendered: render(&exp2, separator),
        },
        DemoLine {
            label: "foobar",
            rendered: render(&exp3, separator),
        },
        DemoLine {
            label: "baz",
            rendered: render(&exp4, separator),
        },
        DemoLine {
            label: "chain",
            rendered: render(&exp5, separator),
        },
    ])
}
