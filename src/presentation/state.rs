use crate::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PresentationState {
    step: usize,
}

impl UiState for PresentationState {}

impl PresentationState {
    pub fn new(step: usize) -> Self {
        Self { step }
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn advance(&mut self, by: usize) {
        self.step = self.step.saturating_add(by);
    }

    /// Move back by `by` steps, stopping at zero.
    pub fn retreat(&mut self, by: usize) {
        self.step = self.step.saturating_sub(by);
    }
}
