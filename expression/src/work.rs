//! Persistent work history behind every term.
//!
//! A [`Work`] is an immutable singly-linked list of contributions. The oldest
//! node seeds the intentions, every later node modifies them. Extending a
//! history allocates one node and shares the whole prefix, so sibling terms
//! built from a common ancestor share their common history by reference.
//!
//! # Invariants
//!
//! - Nodes are never mutated after they are published.
//! - Materializing a node replays only that node and its ancestors, so nothing
//!   appended later can be observed.
//! - Every materialization starts from fresh copies of the seed intentions.

use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::initializer::Initializer;
use crate::modifier::Modify;
use crate::settings::CacheMode;

enum Step<I> {
    Seed {
        intentions: Vec<I>,
        initializer: Initializer<I>,
    },
    Modify(Arc<dyn Modify<I>>),
}

impl<I: Clone> Step<I> {
    fn apply(&self, intentions: &mut Vec<I>) {
        match self {
            Step::Seed {
                intentions: seeds,
                initializer,
            } => {
                *intentions = seeds.clone();
                initializer.full_initialize(intentions);
            }
            Step::Modify(modifier) => modifier.modify(intentions),
        }
    }
}

struct Node<I> {
    step: Step<I>,
    predecessor: Option<Arc<Node<I>>>,
    depth: usize,
    memo: Option<OnceLock<Vec<I>>>,
}

impl<I> Node<I> {
    fn cached(&self) -> Option<&Vec<I>> {
        self.memo.as_ref().and_then(OnceLock::get)
    }
}

impl<I> Drop for Node<I> {
    // Unlink iteratively so dropping a long unshared history cannot overflow the stack.
    fn drop(&mut self) {
        let mut next = self.predecessor.take();
        while let Some(node) = next {
            match Arc::try_unwrap(node) {
                Ok(mut node) => next = node.predecessor.take(),
                Err(_) => break,
            }
        }
    }
}

/// The history of contributions to a term's own intentions.
///
/// Only the crate builds histories; vocabularies contribute through
/// [`Initializer`] and [`Modify`] instead.
pub struct Work<I> {
    head: Option<Arc<Node<I>>>,
}

impl<I> Work<I> {
    /// A history with no contributions. Materializes to nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self { head: None }
    }

    /// Number of nodes, seed included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.head.as_ref().map_or(0, |node| node.depth)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    #[must_use]
    pub fn is_memoized(&self) -> bool {
        self.head.as_ref().is_some_and(|node| node.memo.is_some())
    }

    /// True when both values are the very same history, not merely equal ones.
    pub(crate) fn same_history(&self, other: &Work<I>) -> bool {
        match (&self.head, &other.head) {
            (Some(left), Some(right)) => Arc::ptr_eq(left, right),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<I: Clone + Send + Sync + 'static> Work<I> {
    pub(crate) fn seeded(
        intentions: Vec<I>,
        initializer: Initializer<I>,
        cache: CacheMode,
    ) -> Self {
        let node = Node {
            step: Step::Seed {
                intentions,
                initializer,
            },
            predecessor: None,
            depth: 1,
            memo: cache.is_memoized().then(OnceLock::new),
        };
        Self {
            head: Some(Arc::new(node)),
        }
    }

    /// A new history made of this one plus `modifier`. `self` is left untouched.
    pub(crate) fn extend(&self, modifier: Arc<dyn Modify<I>>) -> Self {
        let node = Node {
            step: Step::Modify(modifier),
            predecessor: self.head.clone(),
            depth: self.depth() + 1,
            memo: self.is_memoized().then(OnceLock::new),
        };
        Self {
            head: Some(Arc::new(node)),
        }
    }

    /// Replays the history oldest first and returns the resulting intentions.
    ///
    /// Memoized histories stop replaying at the newest ancestor that already
    /// holds a result.
    #[must_use]
    pub fn materialize(&self) -> Vec<I> {
        let Some(head) = &self.head else {
            return Vec::new();
        };
        if let Some(cached) = head.cached() {
            return cached.clone();
        }

        let mut pending = Vec::with_capacity(head.depth);
        let mut intentions = Vec::new();
        let mut cursor = Some(head);
        while let Some(node) = cursor {
            if let Some(cached) = node.cached() {
                intentions = cached.clone();
                break;
            }
            pending.push(node);
            cursor = node.predecessor.as_ref();
        }

        for node in pending.iter().rev() {
            node.step.apply(&mut intentions);
        }
        tracing::trace!(
            depth = head.depth,
            replayed = pending.len(),
            "materialized work"
        );

        if let Some(memo) = &head.memo {
            return memo.get_or_init(|| intentions).clone();
        }
        intentions
    }
}

impl<I> Clone for Work<I> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
        }
    }
}

impl<I> Default for Work<I> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<I> fmt::Debug for Work<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Work")
            .field("depth", &self.depth())
            .field("memoized", &self.is_memoized())
            .finish()
    }
}
