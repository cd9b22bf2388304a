//! Terms: the links of a chain that own work.
//!
//! A term's intentions are its originating language's intentions followed by
//! its own materialized work. `modify` appends to the term's own work and
//! never reaches back into earlier links.

use std::any::type_name;
use std::fmt;
use std::sync::Arc;

use crate::expression::{BadImplementationReason, CauseError, Expression, ExpressionError};
use crate::initializer::Initializer;
use crate::language::{History, Language, Link};
use crate::modifier::Modify;
use crate::work::Work;

/// State every term embeds: the language it came from and its own work.
pub struct TermState<L: Language> {
    language: L,
    work: Work<L::Intention>,
}

impl<L: Language> TermState<L> {
    /// State for a term's initializing constructor.
    ///
    /// `initializer` runs over fresh copies of `seeds` each time the term is
    /// materialized; it should pass any derived initializer on as its delegate.
    pub fn initializing(
        language: &L,
        initializer: Initializer<L::Intention>,
        seeds: Vec<L::Intention>,
    ) -> Self {
        let cache = language.state().settings().cache();
        Self {
            language: language.clone(),
            work: Work::seeded(seeds, initializer, cache),
        }
    }

    /// The language this term was created from, which `and` continues.
    #[must_use]
    pub fn language(&self) -> &L {
        &self.language
    }

    #[must_use]
    pub fn work(&self) -> &Work<L::Intention> {
        &self.work
    }

    #[must_use]
    pub fn intentions(&self) -> Vec<L::Intention> {
        let mut intentions = self.language.state().intentions();
        intentions.extend(self.work.materialize());
        intentions
    }
}

impl<L: Language> History<L::Intention> for TermState<L> {
    fn own_work(&self) -> Vec<L::Intention> {
        self.work.materialize()
    }

    fn predecessor(&self) -> Option<Link<L::Intention>> {
        self.language.state().previous()
    }

    fn detach_predecessor(&self) -> Option<Link<L::Intention>> {
        self.language.state().detach_previous()
    }
}

impl<L: Language> Clone for TermState<L> {
    fn clone(&self) -> Self {
        Self {
            language: self.language.clone(),
            work: self.work.clone(),
        }
    }
}

impl<L: Language> fmt::Debug for TermState<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TermState")
            .field("language", self.language.state())
            .field("work", &self.work)
            .finish()
    }
}

/// A vocabulary's term type.
///
/// Implementors embed a [`TermState`] and provide two constructors: an
/// initializing one of their own design, built on
/// [`TermState::initializing`], and the continuation constructor
/// [`Term::chained`] that `modify` uses to produce the extended copy.
///
/// Vocabulary modifier methods return `Result<Self, ExpressionError>` by
/// delegating to [`Term::modify`].
pub trait Term: Expression + Sized + 'static {
    /// The language `and` returns.
    type Language: Language<Intention = Self::Intention>;

    /// The continuation constructor: build `Self` around `state`, unchanged.
    ///
    /// Returning a value that does not carry `state`'s work is reported as
    /// [`ExpressionError::BadImplementation`] on first use.
    fn chained(state: TermState<Self::Language>) -> Result<Self, CauseError>;

    fn state(&self) -> &TermState<Self::Language>;

    /// A new term of the same type with `modifier` appended to its work.
    ///
    /// `self` is unaffected.
    fn modify<M>(&self, modifier: M) -> Result<Self, ExpressionError>
    where
        M: Modify<Self::Intention> + 'static,
    {
        let current = self.state();
        let modifier: Arc<dyn Modify<Self::Intention>> = Arc::new(modifier);
        let work = current.work.extend(modifier);
        let expected = work.clone();
        let term = Self::chained(TermState {
            language: current.language.clone(),
            work,
        })
        .map_err(|cause| {
            ExpressionError::bad_implementation::<Self>(
                BadImplementationReason::ConstructionFailed,
                Some(cause),
            )
        })?;
        if !term.state().work.same_history(&expected) {
            return Err(ExpressionError::bad_implementation::<Self>(
                BadImplementationReason::DroppedWork,
                None,
            ));
        }
        tracing::trace!(
            term = type_name::<Self>(),
            depth = expected.depth(),
            "modified term"
        );
        Ok(term)
    }

    /// Bridges to a new instance of [`Term::Language`] anchored at this term.
    fn and(&self) -> Result<Self::Language, ExpressionError> {
        self.state().language().chain(self)
    }
}
