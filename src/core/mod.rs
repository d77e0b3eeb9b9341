//! Core automaton types and logic.
//!
//! This module contains the pure core of the crate:
//! - State and symbol abstractions via the `State` and `Symbol` traits
//! - The transition function keyed by `TransitionKey`
//! - Validation of candidate definitions
//! - The immutable `Dfa` and word evaluation
//! - Step-by-step evaluation traces
//!
//! Nothing in this module mutates a constructed automaton or performs I/O.

mod automaton;
mod error;
mod state;
mod trace;
mod transition;
mod validation;

pub use automaton::Dfa;
pub use error::{LookupError, ValidationError};
pub use state::{State, Symbol};
pub use trace::{Step, Trace};
pub use transition::{TransitionFunction, TransitionKey};
pub use validation::Validation;
