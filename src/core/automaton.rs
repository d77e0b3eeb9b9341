//! The validated, immutable automaton and word evaluation.

use super::error::{LookupError, ValidationError};
use super::state::{State, Symbol};
use super::trace::{Step, Trace};
use super::transition::{TransitionFunction, TransitionKey};
use super::validation::{validate, Validation};
use crate::definition::DfaDefinition;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A deterministic finite automaton.
///
/// The only way to obtain a `Dfa` is through a validating constructor
/// ([`Dfa::new`], [`Dfa::with_validation`], the builder, or a loaded
/// definition), so every value upholds:
///
/// - the start state is a member of the state set,
/// - the accepting states are a subset of the state set,
/// - every state has exactly one transition per alphabet symbol.
///
/// A `Dfa` is never mutated after construction.
///
/// # Example
///
/// ```rust
/// use dfa::core::Dfa;
///
/// let dfa = Dfa::new(
///     [1, 2, 3],
///     ['0', '1'],
///     [
///         ((1, '0'), 2),
///         ((1, '1'), 3),
///         ((2, '0'), 3),
///         ((2, '1'), 1),
///         ((3, '0'), 1),
///         ((3, '1'), 2),
///     ],
///     1,
///     [3],
/// )
/// .unwrap();
///
/// assert!(dfa.is_word("00111").unwrap());
/// assert!(!dfa.is_word("").unwrap());
/// assert!(dfa.is_word("0021").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    bound = "",
    into = "DfaDefinition<S, A>",
    try_from = "DfaDefinition<S, A>"
)]
pub struct Dfa<S: State, A: Symbol> {
    states: HashSet<S>,
    symbols: HashSet<A>,
    transitions: TransitionFunction<S, A>,
    start: S,
    accepting: HashSet<S>,
    validation: Validation,
}

impl<S: State, A: Symbol> Dfa<S, A> {
    /// Validate a definition under [`Validation::Standard`] and build the automaton.
    ///
    /// Transitions may be given as any iterator of `(key, target)` pairs where
    /// the key converts into a [`TransitionKey`], e.g. a `HashMap` or an array
    /// of `((state, symbol), target)` tuples. A repeated key keeps its last
    /// target.
    pub fn new<K>(
        states: impl IntoIterator<Item = S>,
        symbols: impl IntoIterator<Item = A>,
        transitions: impl IntoIterator<Item = (K, S)>,
        start: S,
        accepting: impl IntoIterator<Item = S>,
    ) -> Result<Self, ValidationError>
    where
        K: Into<TransitionKey<S, A>>,
    {
        Self::with_validation(
            states,
            symbols,
            transitions,
            start,
            accepting,
            Validation::Standard,
        )
    }

    /// Validate a definition under `validation` and build the automaton.
    pub fn with_validation<K>(
        states: impl IntoIterator<Item = S>,
        symbols: impl IntoIterator<Item = A>,
        transitions: impl IntoIterator<Item = (K, S)>,
        start: S,
        accepting: impl IntoIterator<Item = S>,
        validation: Validation,
    ) -> Result<Self, ValidationError>
    where
        K: Into<TransitionKey<S, A>>,
    {
        let states: HashSet<S> = states.into_iter().collect();
        let symbols: HashSet<A> = symbols.into_iter().collect();
        let transitions: TransitionFunction<S, A> = transitions
            .into_iter()
            .map(|(key, target)| (key.into(), target))
            .collect();
        let accepting: HashSet<S> = accepting.into_iter().collect();

        if let Err(error) = validate(
            &states,
            &symbols,
            &transitions,
            &start,
            &accepting,
            validation,
        ) {
            tracing::debug!(%error, ?validation, "rejected automaton definition");
            return Err(error);
        }

        tracing::debug!(
            states = states.len(),
            symbols = symbols.len(),
            transitions = transitions.len(),
            ?validation,
            "constructed automaton"
        );

        Ok(Self {
            states,
            symbols,
            transitions,
            start,
            accepting,
            validation,
        })
    }

    /// All states.
    pub fn states(&self) -> &HashSet<S> {
        &self.states
    }

    /// The input alphabet.
    pub fn symbols(&self) -> &HashSet<A> {
        &self.symbols
    }

    /// The transition function.
    pub fn transitions(&self) -> &TransitionFunction<S, A> {
        &self.transitions
    }

    /// The start state.
    pub fn start(&self) -> &S {
        &self.start
    }

    /// The accepting states.
    pub fn accepting(&self) -> &HashSet<S> {
        &self.accepting
    }

    /// The policy this automaton was validated under.
    pub fn validation(&self) -> Validation {
        self.validation
    }

    /// Check if `state` is accepting.
    pub fn is_accepting(&self, state: &S) -> bool {
        self.accepting.contains(state)
    }

    /// Target of the transition on `(state, symbol)`, if one exists.
    pub fn transition(&self, state: &S, symbol: A) -> Option<&S> {
        self.transitions.get(&TransitionKey::new(state.clone(), symbol))
    }

    /// Apply a single transition.
    ///
    /// Fails if there is no transition on `(state, symbol)`, which for a
    /// validated automaton means `symbol` is outside the alphabet or `state`
    /// is not one of its states.
    pub fn step(&self, state: &S, symbol: A) -> Result<&S, LookupError> {
        let next = self
            .transition(state, symbol)
            .ok_or_else(|| LookupError::MissingTransition {
                state: format!("{state:?}"),
                symbol: format!("{symbol:?}"),
            })?;
        tracing::trace!(from = ?state, ?symbol, to = ?next, "applied transition");
        Ok(next)
    }

    /// The state reached by reading `word` left to right from the start state.
    pub fn end_state(&self, word: impl IntoIterator<Item = A>) -> Result<&S, LookupError> {
        word.into_iter()
            .try_fold(&self.start, |state, symbol| self.step(state, symbol))
    }

    /// Check if the automaton accepts `word`.
    ///
    /// A symbol without a transition is an error, not a rejection.
    pub fn accepts(&self, word: impl IntoIterator<Item = A>) -> Result<bool, LookupError> {
        let end = self.end_state(word)?;
        Ok(self.is_accepting(end))
    }

    /// Evaluate `word`, recording every transition taken.
    pub fn trace(&self, word: impl IntoIterator<Item = A>) -> Result<Trace<S, A>, LookupError> {
        let mut trace = Trace::new(self.start.clone());
        let mut current = &self.start;
        for symbol in word {
            let next = self.step(current, symbol)?;
            trace.push(Step {
                from: current.clone(),
                symbol,
                to: next.clone(),
            });
            current = next;
        }
        Ok(trace)
    }

    /// Serializable form of this automaton.
    pub fn to_definition(&self) -> DfaDefinition<S, A> {
        DfaDefinition::from(self.clone())
    }
}

impl<S: State> Dfa<S, char> {
    /// Check if the automaton accepts the characters of `word`.
    pub fn is_word(&self, word: &str) -> Result<bool, LookupError> {
        self.accepts(word.chars())
    }
}

impl<S: State, A: Symbol> fmt::Display for Dfa<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let transitions: Vec<String> = self
            .transitions
            .iter()
            .map(|(key, target)| format!("({:?}, {:?})={:?}", key.state, key.symbol, target))
            .collect();
        write!(
            f,
            "Dfa(states={:?}, symbols={:?}, transitions={{{}}}, start={:?}, accepting={:?})",
            self.states,
            self.symbols,
            transitions.join(", "),
            self.start,
            self.accepting
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle() -> Dfa<u32, char> {
        Dfa::new(
            [1, 2, 3],
            ['0', '1'],
            [
                ((1, '0'), 2),
                ((1, '1'), 3),
                ((2, '0'), 3),
                ((2, '1'), 1),
                ((3, '0'), 1),
                ((3, '1'), 2),
            ],
            1,
            [3],
        )
        .unwrap()
    }

    /// Accepts exactly the words whose last symbol is 'a'.
    fn ends_with_a() -> Dfa<u32, char> {
        Dfa::new(
            [0, 1],
            ['a', 'b'],
            [((0, 'a'), 1), ((0, 'b'), 0), ((1, 'a'), 1), ((1, 'b'), 0)],
            0,
            [1],
        )
        .unwrap()
    }

    #[test]
    fn reference_word_is_accepted() {
        let dfa = cycle();
        assert_eq!(dfa.end_state("00111".chars()), Ok(&3));
        assert_eq!(dfa.is_word("00111"), Ok(true));
    }

    #[test]
    fn reference_word_visits_expected_states() {
        let trace = cycle().trace("00111".chars()).unwrap();
        assert_eq!(trace.path(), vec![&1, &2, &3, &2, &1, &3]);
    }

    #[test]
    fn evaluation_reads_left_to_right() {
        let dfa = ends_with_a();
        assert_eq!(dfa.is_word("ab"), Ok(false));
        assert_eq!(dfa.is_word("ba"), Ok(true));
        assert_eq!(dfa.is_word("bbba"), Ok(true));
        assert_eq!(dfa.is_word("abbb"), Ok(false));
    }

    #[test]
    fn empty_word_depends_on_start_acceptance() {
        assert_eq!(cycle().is_word(""), Ok(false));

        let accepting_start = Dfa::new([0], ['a'], [((0, 'a'), 0)], 0, [0]).unwrap();
        assert_eq!(accepting_start.is_word(""), Ok(true));
    }

    #[test]
    fn foreign_symbol_is_an_error_not_a_rejection() {
        let result = cycle().is_word("0120");
        assert_eq!(
            result,
            Err(LookupError::MissingTransition {
                state: "1".to_string(),
                symbol: "'2'".to_string(),
            })
        );
    }

    #[test]
    fn step_from_foreign_state_fails() {
        assert!(cycle().step(&9, '0').is_err());
    }

    #[test]
    fn invalid_start_is_rejected() {
        let result = Dfa::new([1, 2], ['a'], [((1, 'a'), 2), ((2, 'a'), 1)], 3, [1]);
        assert!(matches!(result, Err(ValidationError::MissingStart { .. })));
    }

    #[test]
    fn invalid_accepting_is_rejected() {
        let result = Dfa::new([1, 2], ['a'], [((1, 'a'), 2), ((2, 'a'), 1)], 1, [4]);
        assert!(matches!(
            result,
            Err(ValidationError::AcceptingNotSubset { .. })
        ));
    }

    #[test]
    fn incomplete_transitions_are_rejected() {
        let result = Dfa::new(
            [1, 2],
            ['a', 'b'],
            [((1, 'a'), 2), ((1, 'b'), 1), ((2, 'a'), 1)],
            1,
            [1],
        );
        assert!(matches!(
            result,
            Err(ValidationError::IncompleteTransitions { .. })
        ));
    }

    #[test]
    fn extraneous_symbols_are_rejected() {
        let result = Dfa::new([1], ['a'], [((1, 'a'), 1), ((1, 'b'), 1)], 1, [1]);
        assert!(matches!(result, Err(ValidationError::UnknownSymbol { .. })));
    }

    #[test]
    fn every_state_has_a_transition_per_symbol() {
        let dfa = cycle();
        for state in dfa.states() {
            for symbol in dfa.symbols() {
                assert!(dfa.transition(state, *symbol).is_some());
            }
        }
    }

    #[test]
    fn evaluation_is_deterministic() {
        let dfa = cycle();
        let first = dfa.is_word("0110100");
        let second = dfa.is_word("0110100");
        assert_eq!(first, second);
    }

    #[test]
    fn foreign_target_reaches_lookup_error_under_standard_policy() {
        let dfa = Dfa::new([0], ['a'], [((0, 'a'), 5)], 0, []).unwrap();
        assert_eq!(dfa.end_state("a".chars()), Ok(&5));
        assert!(matches!(
            dfa.accepts("aa".chars()),
            Err(LookupError::MissingTransition { .. })
        ));
    }

    #[test]
    fn strict_policy_is_recorded() {
        let dfa = Dfa::with_validation([0], ['a'], [((0, 'a'), 0)], 0, [0], Validation::Strict)
            .unwrap();
        assert_eq!(dfa.validation(), Validation::Strict);
        assert_eq!(cycle().validation(), Validation::Standard);
    }

    #[test]
    fn accessors_expose_definition() {
        let dfa = cycle();
        assert_eq!(dfa.states().len(), 3);
        assert_eq!(dfa.symbols().len(), 2);
        assert_eq!(dfa.transitions().len(), 6);
        assert_eq!(dfa.start(), &1);
        assert!(dfa.is_accepting(&3));
        assert!(!dfa.is_accepting(&1));
        assert_eq!(dfa.accepting().len(), 1);
    }

    #[test]
    fn display_names_every_component() {
        let rendered = cycle().to_string();
        assert!(rendered.starts_with("Dfa(states="));
        assert!(rendered.contains("(1, '0')=2"));
        assert!(rendered.contains("start=1"));
        assert!(rendered.contains("accepting={3}"));
    }

    #[test]
    fn long_words_do_not_recurse() {
        let dfa = ends_with_a();
        let word = "b".repeat(1_000_000) + "a";
        assert_eq!(dfa.is_word(&word), Ok(true));
    }

    #[test]
    fn automaton_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Dfa<u32, char>>();
    }
}
