//! Base trait for state snapshots.

/// Marker trait for engine state objects.
///
/// A state value is:
/// - Immutable (new states are built by value, never patched in place)
/// - Self-contained (everything the shell needs to render)
/// - Comparable (`PartialEq`, so shells can skip redundant redraws)
///
/// `Default` is the canonical empty state and is what `Clear` resets to.
pub trait State: Clone + PartialEq + Default {}
