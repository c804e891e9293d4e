use crate::mvi::Intent;

/// Navigation requests for the presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationIntent {
    Advance { by: usize },
    /// Moves back, never below step 0.
    Retreat { by: usize },
    Reset,
    JumpTo { step: usize },
}

impl Intent for PresentationIntent {}
