//! Reducer for calculator state transitions.

use crate::calculator::format::{format_result, MAX_OPERAND_LEN};
use crate::calculator::intent::CalculatorIntent;
use crate::calculator::operation::{ArithmeticError, Operation};
use crate::calculator::state::CalculatorState;
use crate::mvi::Reducer;

/// Folds key presses into calculator state.
///
/// Every transition is total: malformed input (a second decimal point, an
/// overlong operand, a digit with no operand to land in) is absorbed as a
/// no-op instead of surfacing an error.
pub struct CalculatorReducer;

impl Reducer for CalculatorReducer {
    type State = CalculatorState;
    type Intent = CalculatorIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match state {
            CalculatorState::Undefined => reduce_undefined(intent),
            CalculatorState::Editing {
                number1,
                number2,
                operation,
            } => reduce_editing(number1, number2, operation, intent),
        }
    }
}

/// Transitions out of the division-by-zero display.
fn reduce_undefined(intent: CalculatorIntent) -> CalculatorState {
    match intent {
        // Starting a fresh entry recovers from the error display.
        CalculatorIntent::Number(_) | CalculatorIntent::Decimal => {
            reduce_editing(String::new(), String::new(), None, intent)
        }
        CalculatorIntent::Clear | CalculatorIntent::Delete => CalculatorState::default(),
        CalculatorIntent::Operation(_) | CalculatorIntent::Calculate => CalculatorState::Undefined,
    }
}

fn reduce_editing(
    mut number1: String,
    mut number2: String,
    operation: Option<Operation>,
    intent: CalculatorIntent,
) -> CalculatorState {
    match intent {
        CalculatorIntent::Number(digit) => {
            if operation.is_none() {
                append_digit(&mut number1, digit);
            } else {
                append_digit(&mut number2, digit);
            }
            CalculatorState::Editing {
                number1,
                number2,
                operation,
            }
        }

        CalculatorIntent::Decimal => {
            if operation.is_none() {
                append_decimal(&mut number1);
            } else {
                append_decimal(&mut number2);
            }
            CalculatorState::Editing {
                number1,
                number2,
                operation,
            }
        }

        CalculatorIntent::Operation(op) => {
            // The pending operator may be set or swapped any time after the
            // first operand exists; with nothing to operate on, ignore.
            let operation = if number1.is_empty() {
                operation
            } else {
                Some(op)
            };
            CalculatorState::Editing {
                number1,
                number2,
                operation,
            }
        }

        CalculatorIntent::Calculate => match operation {
            Some(op) if !number1.is_empty() && !number2.is_empty() => {
                evaluate(&number1, &number2, op).unwrap_or(CalculatorState::Editing {
                    number1,
                    number2,
                    operation,
                })
            }
            // Missing an operand or the operator: nothing to compute.
            _ => CalculatorState::Editing {
                number1,
                number2,
                operation,
            },
        },

        CalculatorIntent::Clear => CalculatorState::default(),

        CalculatorIntent::Delete => {
            if !number2.is_empty() {
                number2.pop();
                CalculatorState::Editing {
                    number1,
                    number2,
                    operation,
                }
            } else if operation.is_some() {
                // Backspacing through the operator returns to editing the
                // first operand.
                CalculatorState::Editing {
                    number1,
                    number2,
                    operation: None,
                }
            } else {
                number1.pop();
                CalculatorState::Editing {
                    number1,
                    number2,
                    operation: None,
                }
            }
        }
    }
}

/// Append one digit to an operand, honoring the length cap and the
/// leading-zero rule: a bare `"0"` is replaced rather than extended, so
/// `"05"` can never form.
fn append_digit(operand: &mut String, digit: u8) {
    if digit > 9 || operand.len() >= MAX_OPERAND_LEN {
        return;
    }
    if operand == "0" {
        if digit == 0 {
            return;
        }
        operand.clear();
    }
    operand.push((b'0' + digit) as char);
}

/// Append the decimal point, inserting the leading `0` on an empty
/// operand. At most one point per operand.
fn append_decimal(operand: &mut String) {
    if operand.contains('.') || operand.len() >= MAX_OPERAND_LEN {
        return;
    }
    if operand.is_empty() {
        operand.push('0');
    }
    operand.push('.');
}

/// Evaluate `number1 <op> number2`, or `None` when an operand fails to
/// parse. Operands are built one validated character at a time, so the
/// parse failures are unreachable in practice; mapping them to a no-op
/// keeps the reducer total.
fn evaluate(number1: &str, number2: &str, operation: Operation) -> Option<CalculatorState> {
    let lhs: f64 = number1.parse().ok()?;
    let rhs: f64 = number2.parse().ok()?;
    Some(match operation.apply(lhs, rhs) {
        Ok(result) => CalculatorState::Editing {
            number1: format_result(result),
            number2: String::new(),
            operation: None,
        },
        Err(ArithmeticError::DivisionByZero) => CalculatorState::Undefined,
    })
}
