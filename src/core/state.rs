//! State and symbol traits for automaton components.
//!
//! A state is an opaque identifier: the automaton only ever compares and
//! hashes it. A symbol is a single letter of the input alphabet. Both traits
//! are implemented automatically for every type meeting their bounds, so
//! plain integers and `char` work out of the box.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for automaton states.
///
/// # Required Traits
///
/// - `Clone`: States are copied into traces and definitions
/// - `Eq` + `Hash`: States are members of sets and transition keys
/// - `Debug`: States are rendered into errors and logs
/// - `Serialize` + `Deserialize`: States must be serializable for definitions
///
/// # Example
///
/// ```rust
/// use dfa::core::State;
///
/// fn assert_state<S: State>() {}
///
/// assert_state::<u32>();
/// assert_state::<String>();
/// ```
pub trait State: Clone + Eq + Hash + Debug + Serialize + DeserializeOwned {}

impl<T> State for T where T: Clone + Eq + Hash + Debug + Serialize + DeserializeOwned {}

/// Trait for alphabet symbols.
///
/// Symbols are small values consumed one at a time during evaluation,
/// hence the `Copy` bound.
pub trait Symbol: Copy + Eq + Hash + Debug + Serialize + DeserializeOwned {}

impl<T> Symbol for T where T: Copy + Eq + Hash + Debug + Serialize + DeserializeOwned {}
