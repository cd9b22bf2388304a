//! The root capability shared by every chain link, and the errors chaining can raise.

use std::any::type_name;
use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

/// Underlying failure reported by a vocabulary's continuation constructor.
pub type CauseError = Box<dyn StdError + Send + Sync + 'static>;

/// Anything that can produce the final, ordered sequence of intentions.
///
/// Every `Language` and `Term` is an `Expression`. Each call returns a fresh
/// snapshot: calling it twice on the same value yields equal sequences, and
/// nothing built on top of the value later can change what it returns.
pub trait Expression {
    /// The opaque record a vocabulary produces.
    type Intention: Clone + Send + Sync + 'static;

    fn intentions(&self) -> Vec<Self::Intention>;
}

/// Which part of the continuation contract a vocabulary type broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadImplementationReason {
    /// The continuation constructor returned an error.
    ConstructionFailed,
    /// A language continuation did not keep the term it was chained from.
    DroppedPredecessor,
    /// A term continuation did not keep the work history it was handed.
    DroppedWork,
}

impl BadImplementationReason {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            BadImplementationReason::ConstructionFailed => "the constructor failed",
            BadImplementationReason::DroppedPredecessor => {
                "the constructor discarded the previous term"
            }
            BadImplementationReason::DroppedWork => "the constructor discarded the work history",
        }
    }
}

impl fmt::Display for BadImplementationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while extending an expression chain.
///
/// These signal a broken vocabulary definition, not bad data. They surface at
/// the first chaining call that needs the offending constructor.
#[derive(Debug, Error)]
pub enum ExpressionError {
    #[error(
        "{type_name} does not correctly implement its chaining constructor: {reason}. \
         It must build itself from the state it is handed"
    )]
    BadImplementation {
        type_name: &'static str,
        reason: BadImplementationReason,
        #[source]
        source: Option<CauseError>,
    },
}

impl ExpressionError {
    pub(crate) fn bad_implementation<E>(
        reason: BadImplementationReason,
        source: Option<CauseError>,
    ) -> Self {
        let type_name = type_name::<E>();
        tracing::error!(
            type_name,
            %reason,
            cause = ?source.as_ref().map(ToString::to_string),
            "bad chaining constructor"
        );
        Self::BadImplementation {
            type_name,
            reason,
            source,
        }
    }

    /// Fully qualified name of the vocabulary type at fault.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::BadImplementation { type_name, .. } => type_name,
        }
    }

    #[must_use]
    pub fn reason(&self) -> BadImplementationReason {
        match self {
            Self::BadImplementation { reason, .. } => *reason,
        }
    }
}
