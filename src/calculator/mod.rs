//! The calculator engine: state, intents, and the reducer that folds key
//! presses into a running result.

mod format;
mod intent;
mod operation;
mod reducer;
mod state;

pub use format::{format_result, MAX_DISPLAY_LEN, MAX_OPERAND_LEN, RESULT_PRECISION};
pub use intent::CalculatorIntent;
pub use operation::{ArithmeticError, Operation};
pub use reducer::CalculatorReducer;
pub use state::{CalculatorState, UNDEFINED_DISPLAY};
