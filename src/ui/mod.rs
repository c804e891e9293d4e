//! Terminal presenter: draws the active part of a deck and turns key
//! presses into presentation intents.

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod slide_view;
pub mod terminal_guard;
pub mod theme;

pub use app::App;
pub use runtime::run;
