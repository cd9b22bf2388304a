//! A minimal text vocabulary.
//!
//! Each term contributes one [`TextIntention`], seeded to `"default"`.

use motion_expression::{
    CauseError, ChainSettings, Expression, ExpressionError, Initializer, Language, LanguageState,
    Term, TermState, initializer, modifier,
};

pub const DEFAULT_TEXT: &str = "default";

/// Asks the renderer to append `text` to its target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextIntention {
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct TextLanguage {
    state: LanguageState<TextLanguage>,
}

impl TextLanguage {
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(ChainSettings::default())
    }

    #[must_use]
    pub fn with_settings(settings: ChainSettings) -> Self {
        Self {
            state: LanguageState::with_settings(settings),
        }
    }

    #[must_use]
    pub fn term(&self) -> TextTerm {
        TextTerm::new(self)
    }
}

impl Default for TextLanguage {
    fn default() -> Self {
        Self::new()
    }
}

impl Expression for TextLanguage {
    type Intention = TextIntention;

    fn intentions(&self) -> Vec<TextIntention> {
        self.state.intentions()
    }
}

impl Language for TextLanguage {
    fn chained(state: LanguageState<Self>) -> Result<Self, CauseError> {
        Ok(Self { state })
    }

    fn state(&self) -> &LanguageState<Self> {
        &self.state
    }
}

#[derive(Debug)]
pub struct TextTerm {
    state: TermState<TextLanguage>,
}

impl TextTerm {
    fn new(language: &TextLanguage) -> Self {
        let seed = Initializer::new(
            initializer::each(|intention: &mut TextIntention| {
                intention.text = DEFAULT_TEXT.to_owned();
            }),
            None,
        );
        Self {
            state: TermState::initializing(language, seed, vec![TextIntention::default()]),
        }
    }

    /// Replaces the text of this term's intention.
    pub fn text(&self, text: impl Into<String>) -> Result<Self, ExpressionError> {
        let text = text.into();
        self.modify(modifier::each(move |intention: &mut TextIntention| {
            intention.text.clone_from(&text);
        }))
    }
}

impl Expression for TextTerm {
    type Intention = TextIntention;

    fn intentions(&self) -> Vec<TextIntention> {
        self.state.intentions()
    }
}

impl Term for TextTerm {
    type Language = TextLanguage;

    fn chained(state: TermState<TextLanguage>) -> Result<Self, CauseError> {
        Ok(Self { state })
    }

    fn state(&self) -> &TermState<TextLanguage> {
        &self.state
    }
}
