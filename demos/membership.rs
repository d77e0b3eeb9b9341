//! Membership Test
//!
//! This demo builds the three-state cycle automaton over {0, 1} and checks
//! whether a word belongs to its language.
//!
//! Key concepts:
//! - Validating construction through the `dfa!` macro
//! - Left-to-right evaluation with a step-by-step trace
//! - Lookup errors for symbols outside the alphabet
//!
//! Run with: cargo run --example membership
//! Set RUST_LOG=dfa=trace to see every applied transition.

use dfa::dfa;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let automaton = match dfa! {
        states: [1, 2, 3],
        symbols: ['0', '1'],
        transitions: {
            (1, '0') => 2,
            (1, '1') => 3,
            (2, '0') => 3,
            (2, '1') => 1,
            (3, '0') => 1,
            (3, '1') => 2,
        },
        start: 1,
        accepting: [3],
    } {
        Ok(automaton) => automaton,
        Err(error) => {
            eprintln!("Invalid automaton: {error}");
            std::process::exit(1);
        }
    };

    println!("{automaton}");

    let word = "00111";
    match automaton.is_word(word) {
        Ok(accepted) => println!("Is word \"{word}\" element of DFA: {accepted}"),
        Err(error) => eprintln!("Could not evaluate \"{word}\": {error}"),
    }

    if let Ok(trace) = automaton.trace(word.chars()) {
        println!("Path: {:?}", trace.path());
    }

    let foreign = "0120";
    if let Err(error) = automaton.is_word(foreign) {
        println!("Evaluating \"{foreign}\" failed: {error}");
    }
}
