//! Languages: the vocabulary anchors of an expression chain.
//!
//! A language has no work of its own. A root language starts a chain and has
//! no intentions; a chained language carries the term it was bridged from
//! (`Term -> and -> Language`) and forwards that term's intentions verbatim.
//!
//! A vocabulary defines its terms as methods on its language type that pass
//! `self` into the term's initializing constructor.

use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;
use std::sync::{Arc, Mutex, PoisonError};

use crate::expression::{BadImplementationReason, CauseError, Expression, ExpressionError};
use crate::settings::ChainSettings;
use crate::term::Term;

pub(crate) type Link<I> = Arc<dyn History<I>>;

/// One term in a chain's bridge spine, with its concrete types erased.
pub(crate) trait History<I>: Send + Sync {
    /// The term's own materialized work, without anything bridged before it.
    fn own_work(&self) -> Vec<I>;

    /// The term its originating language was bridged from.
    fn predecessor(&self) -> Option<Link<I>>;

    /// Takes the predecessor out of the term's language.
    fn detach_predecessor(&self) -> Option<Link<I>>;
}

/// State every language embeds: the previous term, if any, and chain settings.
pub struct LanguageState<L: Expression> {
    // Only emptied while dropping a uniquely owned spine.
    previous: Mutex<Option<Link<L::Intention>>>,
    settings: ChainSettings,
    language: PhantomData<fn() -> L>,
}

impl<L: Expression> LanguageState<L> {
    /// State for a language that starts a chain.
    #[must_use]
    pub fn root() -> Self {
        Self::with_settings(ChainSettings::default())
    }

    /// Root state whose settings apply to the whole chain built from it.
    #[must_use]
    pub fn with_settings(settings: ChainSettings) -> Self {
        Self::continuing(None, settings)
    }

    fn continuing(previous: Option<Link<L::Intention>>, settings: ChainSettings) -> Self {
        Self {
            previous: Mutex::new(previous),
            settings,
            language: PhantomData,
        }
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.previous().is_none()
    }

    #[must_use]
    pub fn settings(&self) -> ChainSettings {
        self.settings
    }

    /// The previous term's intentions, or nothing for a root language.
    ///
    /// Walks the bridge spine back to the root, then concatenates each term's
    /// own work oldest first.
    #[must_use]
    pub fn intentions(&self) -> Vec<L::Intention> {
        let mut spine = Vec::new();
        let mut next = self.previous();
        while let Some(link) = next {
            next = link.predecessor();
            spine.push(link);
        }
        spine.iter().rev().flat_map(|link| link.own_work()).collect()
    }

    pub(crate) fn previous(&self) -> Option<Link<L::Intention>> {
        self.previous
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub(crate) fn detach_previous(&self) -> Option<Link<L::Intention>> {
        self.previous
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    fn carries(&self, previous: Option<&Link<L::Intention>>) -> bool {
        match (self.previous().as_ref(), previous) {
            (Some(own), Some(expected)) => Arc::ptr_eq(own, expected),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<L: Expression> Default for LanguageState<L> {
    fn default() -> Self {
        Self::root()
    }
}

impl<L: Expression> Clone for LanguageState<L> {
    fn clone(&self) -> Self {
        Self::continuing(self.previous(), self.settings)
    }
}

impl<L: Expression> Drop for LanguageState<L> {
    fn drop(&mut self) {
        // Unlink uniquely owned predecessors one at a time so a long bridged
        // chain does not drop recursively.
        let mut next = self
            .previous
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        while let Some(mut link) = next {
            next = Arc::get_mut(&mut link).and_then(|term| term.detach_predecessor());
        }
    }
}

impl<L: Expression> fmt::Debug for LanguageState<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageState")
            .field("language", &type_name::<L>())
            .field("root", &self.is_root())
            .field("settings", &self.settings)
            .finish()
    }
}

/// A vocabulary's language type.
///
/// Implementors embed a [`LanguageState<Self>`] and provide a continuation
/// constructor. The chain calls it whenever a term bridges back to this
/// language, so every bridge yields the implementor's own concrete type.
pub trait Language: Expression + Clone + Send + Sync + Sized + 'static {
    /// The continuation constructor: build `Self` around `state`, unchanged.
    ///
    /// Returning a value that does not carry `state` is reported as
    /// [`ExpressionError::BadImplementation`] on first use.
    fn chained(state: LanguageState<Self>) -> Result<Self, CauseError>;

    fn state(&self) -> &LanguageState<Self>;

    /// A new instance of this language anchored at `previous`.
    fn chain<T>(&self, previous: &T) -> Result<Self, ExpressionError>
    where
        T: Term<Language = Self>,
    {
        let history: Link<Self::Intention> = Arc::new(previous.state().clone());
        continue_with(LanguageState::continuing(
            Some(history),
            self.state().settings(),
        ))
    }

    /// Continues this language's history in another vocabulary.
    fn translate<M>(&self) -> Result<M, ExpressionError>
    where
        M: Language<Intention = Self::Intention>,
    {
        let state = self.state();
        continue_with(LanguageState::continuing(
            state.previous(),
            state.settings(),
        ))
    }
}

fn continue_with<L: Language>(state: LanguageState<L>) -> Result<L, ExpressionError> {
    let expected = state.previous();
    let language = L::chained(state).map_err(|cause| {
        ExpressionError::bad_implementation::<L>(
            BadImplementationReason::ConstructionFailed,
            Some(cause),
        )
    })?;
    if !language.state().carries(expected.as_ref()) {
        return Err(ExpressionError::bad_implementation::<L>(
            BadImplementationReason::DroppedPredecessor,
            None,
        ));
    }
    tracing::debug!(language = type_name::<L>(), "chained language");
    Ok(language)
}
