//! Shared helpers for driving the calculator engine in tests.

#![allow(dead_code)]

use calcpad::calculator::{CalculatorIntent, CalculatorReducer, CalculatorState, Operation};
use calcpad::mvi::Reducer;

pub const ADD: CalculatorIntent = CalculatorIntent::Operation(Operation::Add);
pub const SUBTRACT: CalculatorIntent = CalculatorIntent::Operation(Operation::Subtract);
pub const MULTIPLY: CalculatorIntent = CalculatorIntent::Operation(Operation::Multiply);
pub const DIVIDE: CalculatorIntent = CalculatorIntent::Operation(Operation::Divide);

/// Fold a sequence of intents over the empty state.
pub fn press(intents: &[CalculatorIntent]) -> CalculatorState {
    press_from(CalculatorState::default(), intents)
}

/// Fold a sequence of intents over an explicit starting state.
pub fn press_from(state: CalculatorState, intents: &[CalculatorIntent]) -> CalculatorState {
    intents
        .iter()
        .copied()
        .fold(state, CalculatorReducer::reduce)
}

/// Digit intents for each ascii digit in `digits`.
pub fn digits(digits: &str) -> Vec<CalculatorIntent> {
    digits
        .bytes()
        .map(|b| CalculatorIntent::Number(b - b'0'))
        .collect()
}
