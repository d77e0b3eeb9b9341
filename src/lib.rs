//! Dfa: validated, immutable deterministic finite automata
//!
//! A deterministic finite automaton is built once from its 5-tuple of
//! states, alphabet, transition function, start state and accepting states.
//! Construction validates the tuple and either returns an immutable [`Dfa`]
//! or a [`ValidationError`] naming the defect. The automaton then classifies
//! words over its alphabet as accepted or rejected.
//!
//! # Core Concepts
//!
//! - **Validation**: the start state and accepting states must be known
//!   states, and every state needs exactly one transition per symbol
//! - **Evaluation**: words are read left to right from the start state; a
//!   symbol without a transition is a [`LookupError`], never a silent rejection
//! - **Definitions**: automata convert to and from a versioned, serializable
//!   form that is re-validated on load
//!
//! # Example
//!
//! ```rust
//! use dfa::dfa;
//!
//! let dfa = dfa! {
//!     states: [1, 2, 3],
//!     symbols: ['0', '1'],
//!     transitions: {
//!         (1, '0') => 2,
//!         (1, '1') => 3,
//!         (2, '0') => 3,
//!         (2, '1') => 1,
//!         (3, '0') => 1,
//!         (3, '1') => 2,
//!     },
//!     start: 1,
//!     accepting: [3],
//! }
//! .unwrap();
//!
//! assert!(dfa.is_word("00111").unwrap());
//! assert!(dfa.is_word("0x").is_err());
//! ```

pub mod builder;
pub mod core;
pub mod definition;

// Re-export commonly used types
pub use crate::builder::{BuildError, DfaBuilder};
pub use crate::core::{Dfa, LookupError, TransitionKey, Validation, ValidationError};
pub use crate::definition::{DefinitionError, DfaDefinition};
