//! Step-accounting composition tree.
//!
//! A deck is a tree of nodes, each spanning a known number of steps. A
//! single global step picks which leaves are visible and which local step
//! each of them should render:
//!
//! ```text
//! global step ──→ Deck::resolve ──→ Span tree ──→ renderer
//! ```
//!
//! - **Sequence**: exactly one child at a time
//! - **Build**: children accumulate and stay visible once revealed
//! - **Parallel**: every child at once, all seeing the same step
//! - **Delay / Cut / HideAfter**: rewrite the (length, step) pair of one child
//! - **Decorate**: padding, frames, panels and styling; step accounting untouched

mod builder;
mod decoration;
mod error;
mod node;
mod resolve;
mod root;
mod step_value;

pub use builder::DeckBuilder;
pub use decoration::{Alignment, Decoration, Emphasis, FrameSpec, Insets, StepTransform};
pub use error::DeckError;
pub use node::{Arrangement, Axis, DeckNode, NodeKind, StepContent};
pub use resolve::{ActiveChild, ActiveLeaf, ActiveSpan, Span};
pub use root::Deck;
pub use step_value::{Hold, StepValue};
