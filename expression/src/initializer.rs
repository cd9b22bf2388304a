//! Seeding of a term's intentions.
//!
//! An [`Initializer`] runs once per materialization, over fresh copies of the
//! term's seed intentions. It may carry one delegate, which runs after it, so a
//! derived vocabulary can build on a base vocabulary's defaults instead of
//! replacing them.
//!
//! [`each`] and [`from_fn`] adapt closures into [`Initialize`] steps, in the same
//! shape as the helpers in [`modifier`](crate::modifier).

use std::fmt;
use std::sync::Arc;

/// Initializes the properties of freshly seeded intentions.
///
/// The slice length is fixed: implementations edit records in place.
pub trait Initialize<I>: Send + Sync {
    fn initialize(&self, intentions: &mut [I]);
}

/// Initializer over the whole slice at once. Built by [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FromFn<F>(F);

impl<I, F> Initialize<I> for FromFn<F>
where
    F: Fn(&mut [I]) + Send + Sync,
{
    fn initialize(&self, intentions: &mut [I]) {
        (self.0)(intentions);
    }
}

/// Initializer that performs the same operation on every intention. Built by [`each`].
#[derive(Debug, Clone, Copy)]
pub struct Each<F>(F);

impl<I, F> Initialize<I> for Each<F>
where
    F: Fn(&mut I) + Send + Sync,
{
    fn initialize(&self, intentions: &mut [I]) {
        for intention in intentions {
            (self.0)(intention);
        }
    }
}

pub fn from_fn<I, F>(initialize: F) -> FromFn<F>
where
    F: Fn(&mut [I]) + Send + Sync,
{
    FromFn(initialize)
}

pub fn each<I, F>(initialize: F) -> Each<F>
where
    F: Fn(&mut I) + Send + Sync,
{
    Each(initialize)
}

/// An initialization step plus at most one delegate applied after it.
pub struct Initializer<I> {
    own: Arc<dyn Initialize<I>>,
    delegate: Option<Arc<Initializer<I>>>,
}

impl<I: 'static> Initializer<I> {
    /// Creates an initializer. Pass the derived vocabulary's initializer as
    /// `delegate`, if there is one.
    pub fn new(
        initialize: impl Initialize<I> + 'static,
        delegate: Option<Initializer<I>>,
    ) -> Self {
        Self {
            own: Arc::new(initialize),
            delegate: delegate.map(Arc::new),
        }
    }
}

impl<I> Initializer<I> {
    #[must_use]
    pub fn delegate(&self) -> Option<&Initializer<I>> {
        self.delegate.as_deref()
    }

    /// Number of initializers applied by [`Initializer::full_initialize`].
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut current = self.delegate();
        while let Some(initializer) = current {
            depth += 1;
            current = initializer.delegate();
        }
        depth
    }

    /// Applies this initializer, then its delegate chain, base first.
    pub fn full_initialize(&self, intentions: &mut [I]) {
        let mut current = Some(self);
        while let Some(initializer) = current {
            initializer.own.initialize(intentions);
            current = initializer.delegate();
        }
    }
}

impl<I> Clone for Initializer<I> {
    fn clone(&self) -> Self {
        Self {
            own: Arc::clone(&self.own),
            delegate: self.delegate.clone(),
        }
    }
}

impl<I> fmt::Debug for Initializer<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Initializer")
            .field("depth", &self.depth())
            .finish_non_exhaustive()
    }
}
