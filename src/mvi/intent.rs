/// Marker trait for intent objects.
///
/// Intents describe something that should happen (advance the deck, jump to
/// the end) without saying how the state changes.
pub trait Intent: Send + 'static {}
