//! Transition keys and the transition function.

use super::state::{State, Symbol};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The `(state, symbol)` input of a single transition.
///
/// # Example
///
/// ```rust
/// use dfa::core::TransitionKey;
///
/// let key = TransitionKey::new(1, '0');
/// assert_eq!(key, TransitionKey::from((1, '0')));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionKey<S: State, A: Symbol> {
    /// The state the transition leaves from
    pub state: S,
    /// The symbol consumed by the transition
    pub symbol: A,
}

impl<S: State, A: Symbol> TransitionKey<S, A> {
    /// Create a key for `state` reading `symbol`.
    pub fn new(state: S, symbol: A) -> Self {
        Self { state, symbol }
    }
}

impl<S: State, A: Symbol> From<(S, A)> for TransitionKey<S, A> {
    fn from((state, symbol): (S, A)) -> Self {
        Self::new(state, symbol)
    }
}

/// Mapping from transition input to target state.
pub type TransitionFunction<S, A> = HashMap<TransitionKey<S, A>, S>;
