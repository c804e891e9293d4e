use super::intent::Intent;
use super::state::UiState;

/// The only place where state transitions happen.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Must be pure: no I/O, no logging, no shared state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
