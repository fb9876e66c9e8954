//! Reducer trait: the only place state transitions happen.

use super::intent::Intent;
use super::state::State;

/// Reducer transforms state based on intents.
///
/// `reduce` must be a pure function: `(State, Intent) -> State`, total
/// over both arguments, with no side effects. Invalid or inapplicable
/// intents return the state unchanged rather than failing.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: State;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
