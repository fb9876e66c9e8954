//! Calculator entry state.

use crate::calculator::operation::Operation;
use crate::mvi::State;

/// Display text shown after a division by zero.
pub const UNDEFINED_DISPLAY: &str = "Undefined";

/// Running state of the calculator.
///
/// Replaced wholesale on every intent; nothing mutates in place. The
/// operands are kept as the text the user typed, so `"1."` and `"0.5"`
/// survive exactly as entered until `Calculate` folds them into a result.
#[derive(Debug, Clone, PartialEq)]
pub enum CalculatorState {
    /// Normal entry: first operand, second operand, pending operator.
    ///
    /// Digits flow into `number2` exactly when `operation` is set,
    /// otherwise into `number1`.
    Editing {
        number1: String,
        number2: String,
        operation: Option<Operation>,
    },
    /// A division by zero happened. Cleared by `Clear`/`Delete`, or by
    /// starting a fresh entry.
    Undefined,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::Editing {
            number1: String::new(),
            number2: String::new(),
            operation: None,
        }
    }
}

impl State for CalculatorState {}

impl CalculatorState {
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// First operand text; empty in the undefined state.
    pub fn number1(&self) -> &str {
        match self {
            Self::Editing { number1, .. } => number1,
            Self::Undefined => "",
        }
    }

    /// Second operand text; empty in the undefined state.
    pub fn number2(&self) -> &str {
        match self {
            Self::Editing { number2, .. } => number2,
            Self::Undefined => "",
        }
    }

    /// Pending operator, if one has been selected.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            Self::Editing { operation, .. } => *operation,
            Self::Undefined => None,
        }
    }

    /// Compose the display string the shell renders: first operand,
    /// operator glyph, second operand, in entry order.
    pub fn display(&self) -> String {
        match self {
            Self::Undefined => UNDEFINED_DISPLAY.to_string(),
            Self::Editing {
                number1,
                number2,
                operation,
            } => {
                let mut out = String::with_capacity(number1.len() + number2.len() + 1);
                out.push_str(number1);
                if let Some(op) = operation {
                    out.push(op.symbol());
                }
                out.push_str(number2);
                out
            }
        }
    }
}
