//! Base trait for intents (discrete user gestures).

use std::fmt::Debug;

/// Marker trait for intent objects.
///
/// An intent is a single gesture forwarded by the shell: a digit key, an
/// operator key, equals, clear, backspace. Intents are consumed by
/// reducers to produce new states.
///
/// The `Debug` bound lets the controller log every dispatched intent.
pub trait Intent: Debug {}
