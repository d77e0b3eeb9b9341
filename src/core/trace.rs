//! Step-by-step record of a word's evaluation.
//!
//! A trace is built by [`Dfa::trace`](crate::core::Dfa::trace) and is an
//! immutable value afterwards.

use super::state::{State, Symbol};
use serde::{Deserialize, Serialize};

/// A single applied transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Step<S: State, A: Symbol> {
    /// The state before reading `symbol`
    pub from: S,
    /// The symbol read
    pub symbol: A,
    /// The state after reading `symbol`
    pub to: S,
}

/// Ordered record of the transitions taken while reading a word.
///
/// # Example
///
/// ```rust
/// use dfa::dfa;
///
/// let parity = dfa! {
///     states: [0, 1],
///     symbols: ['x'],
///     transitions: {
///         (0, 'x') => 1,
///         (1, 'x') => 0,
///     },
///     start: 0,
///     accepting: [0],
/// }
/// .unwrap();
///
/// let trace = parity.trace("xxx".chars()).unwrap();
/// assert_eq!(trace.path(), vec![&0, &1, &0, &1]);
/// assert_eq!(trace.end_state(), &1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Trace<S: State, A: Symbol> {
    start: S,
    steps: Vec<Step<S, A>>,
}

impl<S: State, A: Symbol> Trace<S, A> {
    pub(crate) fn new(start: S) -> Self {
        Self {
            start,
            steps: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, step: Step<S, A>) {
        self.steps.push(step);
    }

    /// The state evaluation started in.
    pub fn start(&self) -> &S {
        &self.start
    }

    /// All applied transitions, in reading order.
    pub fn steps(&self) -> &[Step<S, A>] {
        &self.steps
    }

    /// States visited: the start state, then the target of each step.
    pub fn path(&self) -> Vec<&S> {
        std::iter::once(&self.start)
            .chain(self.steps.iter().map(|step| &step.to))
            .collect()
    }

    /// The state reached after the last step.
    pub fn end_state(&self) -> &S {
        self.steps.last().map_or(&self.start, |step| &step.to)
    }

    /// Number of symbols read.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True if no symbols were read.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
