//! Base trait for intents (named store mutations).

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (open a menu, enter edit mode)
/// - API responses (a page was loaded, an article was deleted)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
