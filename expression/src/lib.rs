//! Immutable, type-safe expression chains.
//!
//! An expression chain is an ordered, immutable list of declarative
//! *intentions* built by alternating two kinds of links:
//!
//! ```text
//! Language --term()--> Term --modify()--> Term --and()--> Language --term()--> Term
//! ```
//!
//! Vocabularies define their own [`Language`] and [`Term`] types. The chain
//! never needs to know them: each link embeds a state value from this crate
//! and supplies a continuation constructor, which the chain calls to re-create
//! the vocabulary's own concrete type at every step. Every step returns a new
//! value, and any link can [materialize](Expression::intentions) the sequence
//! built so far.
//!
//! This crate only builds chains. Executing intentions is left to consumers.

mod expression;
pub mod initializer;
mod language;
pub mod modifier;
mod settings;
mod term;
mod work;

pub use expression::{BadImplementationReason, CauseError, Expression, ExpressionError};
pub use initializer::{Initialize, Initializer};
pub use language::{Language, LanguageState};
pub use modifier::Modify;
pub use settings::{CacheMode, ChainSettings, SettingsError};
pub use term::{Term, TermState};
pub use work::Work;
