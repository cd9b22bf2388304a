//! Shared test utilities and fixtures
//!
//! A small caption vocabulary built in two layers, plus helpers for reading
//! intentions back out of any chain.

#![allow(dead_code)]

use motion_expression::{
    CauseError, ChainSettings, Expression, ExpressionError, Initializer, Language, LanguageState,
    Term, TermState, initializer, modifier,
};
use motion_expression_cli::TextIntention;

/// Texts of every intention, in chain order.
pub fn texts(expression: &impl Expression<Intention = TextIntention>) -> Vec<String> {
    expression
        .intentions()
        .into_iter()
        .map(|intention| intention.text)
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Caption {
    pub text: String,
    pub emphasis: u8,
}

/// Base caption initialization shared by every caption term.
fn base_initializer(delegate: Option<Initializer<Caption>>) -> Initializer<Caption> {
    Initializer::new(
        initializer::each(|caption: &mut Caption| {
            caption.text = "caption".to_owned();
            caption.emphasis = 1;
        }),
        delegate,
    )
}

#[derive(Debug, Clone)]
pub struct Captions {
    state: LanguageState<Captions>,
}

impl Captions {
    pub fn new() -> Self {
        Self::with_settings(ChainSettings::default())
    }

    pub fn with_settings(settings: ChainSettings) -> Self {
        Self {
            state: LanguageState::with_settings(settings),
        }
    }

    /// A single caption with the base defaults.
    pub fn caption(&self) -> CaptionTerm {
        CaptionTerm::layered(self, None, 1)
    }

    /// A headline: caption defaults, then louder emphasis layered on top.
    pub fn headline(&self) -> CaptionTerm {
        let derived = Initializer::new(
            initializer::each(|caption: &mut Caption| caption.emphasis = 5),
            None,
        );
        CaptionTerm::layered(self, Some(derived), 1)
    }

    /// `count` captions seeded together in one term.
    pub fn captions(&self, count: usize) -> CaptionTerm {
        CaptionTerm::layered(self, None, count)
    }
}

impl Default for Captions {
    fn default() -> Self {
        Self::new()
    }
}

impl Expression for Captions {
    type Intention = Caption;

    fn intentions(&self) -> Vec<Caption> {
        self.state.intentions()
    }
}

impl Language for Captions {
    fn chained(state: LanguageState<Self>) -> Result<Self, CauseError> {
        Ok(Self { state })
    }

    fn state(&self) -> &LanguageState<Self> {
        &self.state
    }
}

#[derive(Debug)]
pub struct CaptionTerm {
    state: TermState<Captions>,
}

impl CaptionTerm {
    fn layered(captions: &Captions, derived: Option<Initializer<Caption>>, count: usize) -> Self {
        Self {
            state: TermState::initializing(
                captions,
                base_initializer(derived),
                vec![Caption::default(); count],
            ),
        }
    }

    pub fn text(&self, text: &'static str) -> Result<Self, ExpressionError> {
        self.modify(modifier::each(move |caption: &mut Caption| {
            caption.text = text.to_owned();
        }))
    }

    pub fn louder(&self) -> Result<Self, ExpressionError> {
        self.modify(modifier::each(|caption: &mut Caption| caption.emphasis += 1))
    }

    /// Numbers the captions in this term, starting at one.
    pub fn numbered(&self) -> Result<Self, ExpressionError> {
        self.modify(modifier::from_fn(|captions: &mut [Caption]| {
            for (index, caption) in captions.iter_mut().enumerate() {
                caption.text = format!("{} {}", caption.text, index + 1);
            }
        }))
    }
}

impl Expression for CaptionTerm {
    type Intention = Caption;

    fn intentions(&self) -> Vec<Caption> {
        self.state.intentions()
    }
}

impl Term for CaptionTerm {
    type Language = Captions;

    fn chained(state: TermState<Captions>) -> Result<Self, CauseError> {
        Ok(Self { state })
    }

    fn state(&self) -> &TermState<Captions> {
        &self.state
    }
}

/// A second vocabulary over captions: blank spacers.
#[derive(Debug, Clone)]
pub struct Spacing {
    state: LanguageState<Spacing>,
}

impl Spacing {
    pub fn spacer(&self) -> SpacerTerm {
        SpacerTerm {
            state: TermState::initializing(
                self,
                Initializer::new(
                    initializer::each(|caption: &mut Caption| caption.text = "-".to_owned()),
                    None,
                ),
                vec![Caption::default()],
            ),
        }
    }
}

impl Expression for Spacing {
    type Intention = Caption;

    fn intentions(&self) -> Vec<Caption> {
        self.state.intentions()
    }
}

impl Language for Spacing {
    fn chained(state: LanguageState<Self>) -> Result<Self, CauseError> {
        Ok(Self { state })
    }

    fn state(&self) -> &LanguageState<Self> {
        &self.state
    }
}

#[derive(Debug)]
pub struct SpacerTerm {
    state: TermState<Spacing>,
}

impl Expression for SpacerTerm {
    type Intention = Caption;

    fn intentions(&self) -> Vec<Caption> {
        self.state.intentions()
    }
}

impl Term for SpacerTerm {
    type Language = Spacing;

    fn chained(state: TermState<Spacing>) -> Result<Self, CauseError> {
        Ok(Self { state })
    }

    fn state(&self) -> &TermState<Spacing> {
        &self.state
    }
}

/// Caption texts, in chain order.
pub fn caption_texts(expression: &impl Expression<Intention = Caption>) -> Vec<String> {
    expression
        .intentions()
        .into_iter()
        .map(|caption| caption.text)
        .collect()
}
