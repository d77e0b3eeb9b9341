//! Macros for ergonomic automaton construction.

/// Build a [`Dfa`](crate::core::Dfa) from a literal transition table.
///
/// Expands to a call to [`Dfa::with_validation`](crate::core::Dfa::with_validation),
/// so the result is a `Result<Dfa<_, _>, ValidationError>`. An optional
/// trailing `validation:` entry selects the policy; the default is
/// [`Validation::Standard`](crate::core::Validation::Standard).
///
/// # Example
///
/// ```
/// use dfa::dfa;
/// use dfa::core::Validation;
///
/// let dfa = dfa! {
///     states: [1, 2, 3],
///     symbols: ['0', '1'],
///     transitions: {
///         (1, '0') => 2,
///         (1, '1') => 3,
///         (2, '0') => 3,
///         (2, '1') => 1,
///         (3, '0') => 1,
///         (3, '1') => 2,
///     },
///     start: 1,
///     accepting: [3],
///     validation: Validation::Strict,
/// }
/// .unwrap();
///
/// assert!(dfa.is_word("00111").unwrap());
/// ```
#[macro_export]
macro_rules! dfa {
    (@validation) => {
        $crate::core::Validation::Standard
    };
    (@validation $validation:expr) => {
        $validation
    };
    (
        states: [$($state:expr),* $(,)?],
        symbols: [$($symbol:expr),* $(,)?],
        transitions: {
            $(($from:expr, $on:expr) => $to:expr),* $(,)?
        },
        start: $start:expr,
        accepting: [$($accept:expr),* $(,)?]
        $(, validation: $validation:expr)?
        $(,)?
    ) => {{
        let transitions: ::std::vec::Vec<($crate::core::TransitionKey<_, _>, _)> = ::std::vec![
            $(($crate::core::TransitionKey::new($from, $on), $to)),*
        ];
        $crate::core::Dfa::with_validation(
            [$($state),*],
            [$($symbol),*],
            transitions,
            $start,
            [$($accept),*],
            $crate::dfa!(@validation $($validation)?),
        )
    }};
}
