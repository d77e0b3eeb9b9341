//! Construction and evaluation errors.

use thiserror::Error;

/// Structural defects that prevent an automaton from being constructed.
///
/// States and symbols are carried in their `Debug` rendering so the error
/// type does not depend on the automaton's type parameters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Start state {start} is not a member of the state set")]
    MissingStart { start: String },

    #[error("Accepting state {state} is not a member of the state set")]
    AcceptingNotSubset { state: String },

    #[error("State {state} has no transition on symbols {missing}")]
    IncompleteTransitions { state: String, missing: String },

    #[error("State {state} has a transition on {symbol}, which is not in the alphabet")]
    UnknownSymbol { state: String, symbol: String },

    #[error("Transition ({state}, {symbol}) targets {target}, which is not a member of the state set")]
    UnknownTarget {
        state: String,
        symbol: String,
        target: String,
    },

    #[error("Transition ({state}, {symbol}) leaves from a state outside the state set")]
    UnknownSource { state: String, symbol: String },
}

/// Errors raised while evaluating a word.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("No transition from state {state} on symbol {symbol}")]
    MissingTransition { state: String, symbol: String },
}
