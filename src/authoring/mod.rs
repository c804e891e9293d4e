//! Deck files: the authoring surface for the presenter.

mod loader;
mod schema;

pub use loader::{build_deck, load_deck, DeckFileError};
pub use schema::{AlignSpec, AxisSpec, DeckFile, FrameEntry, KindSpec, NodeSpec};
