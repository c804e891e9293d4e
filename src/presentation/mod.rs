//! Presentation state: the single global step counter.
//!
//! Uses the MVI pattern:
//! - `state.rs` - the current step and its clamped mutators
//! - `intent.rs` - navigation requests (advance, retreat, reset, jump)
//! - `reducer.rs` - pure transitions between states
//!
//! The core never bounds the step from above. A step past the end of the
//! deck simply resolves to nothing.

mod intent;
mod reducer;
mod state;

pub use intent::PresentationIntent;
pub use reducer::PresentationReducer;
pub use state::PresentationState;
