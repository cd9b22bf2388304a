//! Modifications of existing intentions.
//!
//! A vocabulary's modifier methods wrap a [`Modify`] implementation and hand it to
//! [`Term::modify`](crate::Term::modify), which records it as a new work node.
//! Modifiers do not delegate: layering happens one node per modification.

/// Modifies the properties of already materialized intentions.
///
/// The slice length is fixed: implementations edit records in place.
pub trait Modify<I>: Send + Sync {
    fn modify(&self, intentions: &mut [I]);
}

/// Modifier over the whole slice at once. Built by [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FromFn<F>(F);

impl<I, F> Modify<I> for FromFn<F>
where
    F: Fn(&mut [I]) + Send + Sync,
{
    fn modify(&self, intentions: &mut [I]) {
        (self.0)(intentions);
    }
}

/// Modifier that performs the same operation on every intention. Built by [`each`].
#[derive(Debug, Clone, Copy)]
pub struct Each<F>(F);

impl<I, F> Modify<I> for Each<F>
where
    F: Fn(&mut I) + Send + Sync,
{
    fn modify(&self, intentions: &mut [I]) {
        for intention in intentions {
            (self.0)(intention);
        }
    }
}

pub fn from_fn<I, F>(modify: F) -> FromFn<F>
where
    F: Fn(&mut [I]) + Send + Sync,
{
    FromFn(modify)
}

pub fn each<I, F>(modify: F) -> Each<F>
where
    F: Fn(&mut I) + Send + Sync,
{
    Each(modify)
}
