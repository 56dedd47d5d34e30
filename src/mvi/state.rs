//! Base trait for store state.

/// Marker trait for store state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (everything a view needs to render)
/// - Comparable (PartialEq so subscribers only wake on real changes)
pub trait State: Clone + PartialEq + Default + Send + Sync + 'static {}
