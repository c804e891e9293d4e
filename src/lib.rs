pub mod authoring;
pub mod config;
pub mod deck;
pub mod inspect;
pub mod logging;
pub mod mvi;
pub mod presentation;
pub mod slide;
pub mod ui;
