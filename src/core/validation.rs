//! Validation of candidate automaton definitions.
//!
//! Every check here is a pure function over borrowed parts of the 5-tuple.
//! Checks run in a fixed order and stop at the first defect.

use super::error::ValidationError;
use super::state::{State, Symbol};
use super::transition::TransitionFunction;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Policy deciding how thoroughly a definition is checked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Validation {
    /// Start and accepting states must be known states, and every known
    /// state must have exactly one transition per alphabet symbol.
    /// Transition targets are not checked.
    #[default]
    Standard,

    /// Everything `Standard` checks, and additionally every transition must
    /// leave from and lead to a known state.
    Strict,
}

/// Run every check required by `policy`.
pub(crate) fn validate<S: State, A: Symbol>(
    states: &HashSet<S>,
    symbols: &HashSet<A>,
    transitions: &TransitionFunction<S, A>,
    start: &S,
    accepting: &HashSet<S>,
    policy: Validation,
) -> Result<(), ValidationError> {
    check_start(states, start)?;
    check_accepting(states, accepting)?;
    check_coverage(states, symbols, transitions)?;
    if policy == Validation::Strict {
        check_closed(states, transitions)?;
    }
    Ok(())
}

fn check_start<S: State>(states: &HashSet<S>, start: &S) -> Result<(), ValidationError> {
    if states.contains(start) {
        Ok(())
    } else {
        Err(ValidationError::MissingStart {
            start: format!("{start:?}"),
        })
    }
}

fn check_accepting<S: State>(
    states: &HashSet<S>,
    accepting: &HashSet<S>,
) -> Result<(), ValidationError> {
    match accepting.iter().find(|state| !states.contains(*state)) {
        Some(state) => Err(ValidationError::AcceptingNotSubset {
            state: format!("{state:?}"),
        }),
        None => Ok(()),
    }
}

/// Every known state must read exactly the alphabet on its outgoing transitions.
fn check_coverage<S: State, A: Symbol>(
    states: &HashSet<S>,
    symbols: &HashSet<A>,
    transitions: &TransitionFunction<S, A>,
) -> Result<(), ValidationError> {
    let mut outgoing: HashMap<&S, HashSet<A>> = HashMap::new();
    for key in transitions.keys() {
        outgoing.entry(&key.state).or_default().insert(key.symbol);
    }

    let none = HashSet::new();
    for state in states {
        let read = outgoing.get(state).unwrap_or(&none);

        if let Some(symbol) = read.iter().find(|symbol| !symbols.contains(*symbol)) {
            return Err(ValidationError::UnknownSymbol {
                state: format!("{state:?}"),
                symbol: format!("{symbol:?}"),
            });
        }

        if read.len() != symbols.len() {
            let missing: Vec<&A> = symbols.iter().filter(|s| !read.contains(*s)).collect();
            return Err(ValidationError::IncompleteTransitions {
                state: format!("{state:?}"),
                missing: format!("{missing:?}"),
            });
        }
    }
    Ok(())
}

fn check_closed<S: State, A: Symbol>(
    states: &HashSet<S>,
    transitions: &TransitionFunction<S, A>,
) -> Result<(), ValidationError> {
    for (key, target) in transitions {
        if !states.contains(&key.state) {
            return Err(ValidationError::UnknownSource {
                state: format!("{:?}", key.state),
                symbol: format!("{:?}", key.symbol),
            });
        }
        if !states.contains(target) {
            return Err(ValidationError::UnknownTarget {
                state: format!("{:?}", key.state),
                symbol: format!("{:?}", key.symbol),
                target: format!("{target:?}"),
            });
        }
    }
    Ok(())
}
