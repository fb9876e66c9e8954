//! Single-writer state store for an embedding shell.

use crate::calculator::{CalculatorIntent, CalculatorReducer, CalculatorState};
use crate::mvi::Reducer;

/// Owns the one live [`CalculatorState`] and applies intents to it one at
/// a time.
///
/// The shell dispatches each gesture through [`Controller::on_intent`] and
/// reads the refreshed state (or [`Controller::display`]) back out. The
/// reducer itself stays pure; this is the only place the state is
/// replaced.
#[derive(Debug, Default)]
pub struct Controller {
    state: CalculatorState,
}

impl Controller {
    /// Controller holding the empty calculator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state snapshot.
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Display string for the current state.
    pub fn display(&self) -> String {
        self.state.display()
    }

    /// Run one intent through the reducer and store the result.
    pub fn on_intent(&mut self, intent: CalculatorIntent) {
        self.state = CalculatorReducer::reduce(std::mem::take(&mut self.state), intent);
        tracing::debug!(?intent, display = %self.state.display(), "applied intent");
    }
}
