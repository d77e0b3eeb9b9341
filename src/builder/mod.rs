//! Builder API for ergonomic automaton construction.
//!
//! This module provides a fluent builder and the `dfa!` macro. Both are thin
//! layers over [`Dfa::with_validation`](crate::core::Dfa::with_validation),
//! so they enforce exactly the same invariants.

pub mod automaton;
pub mod error;
pub mod macros;

pub use automaton::DfaBuilder;
pub use error::BuildError;

use crate::core::{State, Symbol};

/// Create a builder for an automaton over `symbols`.
///
/// # Example
///
/// ```
/// use dfa::builder::over;
///
/// let dfa = over(['a', 'b'])
///     .state(0)
///     .transition(0, 'a', 0)
///     .transition(0, 'b', 0)
///     .start(0)
///     .accept(0)
///     .build()
///     .unwrap();
///
/// assert!(dfa.is_word("abba").unwrap());
/// ```
pub fn over<S, A>(symbols: impl IntoIterator<Item = A>) -> DfaBuilder<S, A>
where
    S: State,
    A: Symbol,
{
    DfaBuilder::new().symbols(symbols)
}
