/// Marker trait for UI state.
///
/// `PartialEq` is what change detection relies on: a dispatch that produces
/// an equal state is not a change and triggers no redraw.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
