//! Builder for constructing automata.

use crate::builder::error::BuildError;
use crate::core::{Dfa, State, Symbol, TransitionFunction, TransitionKey, Validation};

/// Builder for constructing automata with a fluent API.
///
/// # Example
///
/// ```rust
/// use dfa::builder::DfaBuilder;
///
/// let dfa = DfaBuilder::new()
///     .states([1, 2, 3])
///     .symbols(['0', '1'])
///     .transition(1, '0', 2)
///     .transition(1, '1', 3)
///     .transition(2, '0', 3)
///     .transition(2, '1', 1)
///     .transition(3, '0', 1)
///     .transition(3, '1', 2)
///     .start(1)
///     .accept(3)
///     .build()
///     .unwrap();
///
/// assert!(dfa.is_word("00111").unwrap());
/// ```
pub struct DfaBuilder<S: State, A: Symbol> {
    states: Vec<S>,
    symbols: Vec<A>,
    transitions: TransitionFunction<S, A>,
    duplicate: Option<TransitionKey<S, A>>,
    start: Option<S>,
    accepting: Vec<S>,
    validation: Validation,
}

impl<S: State, A: Symbol> DfaBuilder<S, A> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            symbols: Vec::new(),
            transitions: TransitionFunction::new(),
            duplicate: None,
            start: None,
            accepting: Vec::new(),
            validation: Validation::Standard,
        }
    }

    /// Add a state.
    pub fn state(mut self, state: S) -> Self {
        self.states.push(state);
        self
    }

    /// Add multiple states at once.
    pub fn states(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.states.extend(states);
        self
    }

    /// Add an alphabet symbol.
    pub fn symbol(mut self, symbol: A) -> Self {
        self.symbols.push(symbol);
        self
    }

    /// Add multiple alphabet symbols at once.
    pub fn symbols(mut self, symbols: impl IntoIterator<Item = A>) -> Self {
        self.symbols.extend(symbols);
        self
    }

    /// Add the transition `from --symbol--> to`.
    ///
    /// Each `(from, symbol)` pair may only be given once; a repeat is
    /// reported by [`build`](Self::build).
    pub fn transition(mut self, from: S, symbol: A, to: S) -> Self {
        let key = TransitionKey::new(from, symbol);
        if self.transitions.contains_key(&key) {
            self.duplicate.get_or_insert(key);
        } else {
            self.transitions.insert(key, to);
        }
        self
    }

    /// Set the start state (required).
    pub fn start(mut self, state: S) -> Self {
        self.start = Some(state);
        self
    }

    /// Mark a state as accepting.
    pub fn accept(mut self, state: S) -> Self {
        self.accepting.push(state);
        self
    }

    /// Mark multiple states as accepting.
    pub fn accepting(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.accepting.extend(states);
        self
    }

    /// Choose the validation policy.
    pub fn validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    /// Shorthand for `.validation(Validation::Strict)`.
    pub fn strict(self) -> Self {
        self.validation(Validation::Strict)
    }

    /// Build the automaton.
    /// Returns an error if the start state is missing, a transition was
    /// repeated, or the definition fails validation.
    pub fn build(self) -> Result<Dfa<S, A>, BuildError> {
        let start = self.start.ok_or(BuildError::MissingStart)?;

        if let Some(key) = self.duplicate {
            return Err(BuildError::DuplicateTransition {
                state: format!("{:?}", key.state),
                symbol: format!("{:?}", key.symbol),
            });
        }

        let dfa = Dfa::with_validation(
            self.states,
            self.symbols,
            self.transitions,
            start,
            self.accepting,
            self.validation,
        )?;
        Ok(dfa)
    }
}

impl<S: State, A: Symbol> Default for DfaBuilder<S, A> {
    fn default() -> Self {
        Self::new()
    }
}
