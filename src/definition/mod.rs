//! Serializable automaton definitions.
//!
//! A definition is the plain-data form of a [`Dfa`]: lists instead of sets
//! and maps, plus a format version. Definitions can be written as JSON or
//! bincode, and turning one back into a `Dfa` always re-runs validation.

use crate::core::{Dfa, State, Symbol, Validation};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub mod error;

pub use error::DefinitionError;

/// Version identifier for definition format
pub const DEFINITION_VERSION: u32 = 1;

/// One row of the transition table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionEntry<S: State, A: Symbol> {
    /// Source state
    pub from: S,

    /// Symbol read
    pub symbol: A,

    /// Target state
    pub to: S,
}

/// Serializable description of an automaton.
///
/// Element order in the lists carries no meaning.
///
/// # Example
///
/// ```rust
/// use dfa::dfa;
/// use dfa::definition::DfaDefinition;
///
/// let dfa = dfa! {
///     states: [0u32, 1],
///     symbols: ['a'],
///     transitions: {
///         (0, 'a') => 1,
///         (1, 'a') => 0,
///     },
///     start: 0,
///     accepting: [1],
/// }
/// .unwrap();
///
/// let json = dfa.to_definition().to_json().unwrap();
/// let restored = DfaDefinition::<u32, char>::from_json(&json)
///     .unwrap()
///     .into_dfa()
///     .unwrap();
///
/// assert_eq!(restored, dfa);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct DfaDefinition<S: State, A: Symbol> {
    /// Definition format version
    pub version: u32,

    /// All states
    pub states: Vec<S>,

    /// The input alphabet
    pub symbols: Vec<A>,

    /// The transition table
    pub transitions: Vec<TransitionEntry<S, A>>,

    /// The start state
    pub start: S,

    /// The accepting states
    pub accepting: Vec<S>,

    /// Validation policy applied when loading
    #[serde(default)]
    pub validation: Validation,
}

impl<S: State, A: Symbol> DfaDefinition<S, A> {
    /// Validate the definition and build the automaton it describes.
    pub fn into_dfa(self) -> Result<Dfa<S, A>, DefinitionError> {
        if self.version != DEFINITION_VERSION {
            return Err(DefinitionError::UnsupportedVersion {
                found: self.version,
                supported: DEFINITION_VERSION,
            });
        }

        {
            let mut seen = HashSet::new();
            for entry in &self.transitions {
                if !seen.insert((&entry.from, entry.symbol)) {
                    return Err(DefinitionError::DuplicateTransition {
                        state: format!("{:?}", entry.from),
                        symbol: format!("{:?}", entry.symbol),
                    });
                }
            }
        }

        let dfa = Dfa::with_validation(
            self.states,
            self.symbols,
            self.transitions
                .into_iter()
                .map(|entry| ((entry.from, entry.symbol), entry.to)),
            self.start,
            self.accepting,
            self.validation,
        )?;

        tracing::debug!(version = self.version, "loaded automaton definition");
        Ok(dfa)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, DefinitionError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DefinitionError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from JSON. The result is not validated until [`into_dfa`](Self::into_dfa).
    pub fn from_json(json: &str) -> Result<Self, DefinitionError> {
        serde_json::from_str(json).map_err(|e| DefinitionError::DeserializationFailed(e.to_string()))
    }

    /// Serialize to the compact binary format.
    pub fn to_binary(&self) -> Result<Vec<u8>, DefinitionError> {
        bincode::serialize(self).map_err(|e| DefinitionError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from the compact binary format.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, DefinitionError> {
        bincode::deserialize(bytes)
            .map_err(|e| DefinitionError::DeserializationFailed(e.to_string()))
    }
}

impl<S: State, A: Symbol> From<Dfa<S, A>> for DfaDefinition<S, A> {
    fn from(dfa: Dfa<S, A>) -> Self {
        Self {
            version: DEFINITION_VERSION,
            states: dfa.states().iter().cloned().collect(),
            symbols: dfa.symbols().iter().copied().collect(),
            transitions: dfa
                .transitions()
                .iter()
                .map(|(key, to)| TransitionEntry {
                    from: key.state.clone(),
                    symbol: key.symbol,
                    to: to.clone(),
                })
                .collect(),
            start: dfa.start().clone(),
            accepting: dfa.accepting().iter().cloned().collect(),
            validation: dfa.validation(),
        }
    }
}

impl<S: State, A: Symbol> TryFrom<DfaDefinition<S, A>> for Dfa<S, A> {
    type Error = DefinitionError;

    fn try_from(definition: DfaDefinition<S, A>) -> Result<Self, Self::Error> {
        definition.into_dfa()
    }
}
