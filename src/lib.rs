//! Pure expression-evaluation engine for a four-function calculator.
//!
//! The crate holds no UI: a shell (whatever draws the keypad) forwards
//! each button press as a [`CalculatorIntent`], the reducer folds it into
//! a new [`CalculatorState`], and the shell renders the state's display
//! string. One pending operation at a time, evaluated left to right; no
//! precedence, no parentheses.
//!
//! ```
//! use calcpad::calculator::{CalculatorIntent, Operation};
//! use calcpad::Controller;
//!
//! let mut calc = Controller::new();
//! calc.on_intent(CalculatorIntent::Number(5));
//! calc.on_intent(CalculatorIntent::Operation(Operation::Add));
//! calc.on_intent(CalculatorIntent::Number(3));
//! calc.on_intent(CalculatorIntent::Calculate);
//! assert_eq!(calc.display(), "8");
//! ```

pub mod calculator;
pub mod controller;
pub mod logging;
pub mod mvi;

pub use controller::Controller;
