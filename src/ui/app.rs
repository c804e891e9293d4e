use crate::config::PresenterConfig;
use crate::deck::Deck;
use crate::mvi::Reducer;
use crate::presentation::{PresentationIntent, PresentationReducer, PresentationState};
use crate::slide::Slide;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PopupKind {
    Help,
    Outline,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Deck,
    Popup(PopupKind),
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    size: Option<(u16, u16)>,
    deck: Deck<Slide>,
    /// Global step (MVI pattern).
    presentation: PresentationState,
    config: PresenterConfig,
    needs_redraw: bool,
}

impl App {
    pub fn new(deck: Deck<Slide>, config: PresenterConfig) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Deck,
            size: None,
            deck,
            presentation: PresentationState::default(),
            config,
            needs_redraw: true,
        }
    }

    /// Start the presentation at `step` instead of 0.
    pub fn starting_at(mut self, step: usize) -> Self {
        self.dispatch(PresentationIntent::JumpTo { step });
        self
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn deck(&self) -> &Deck<Slide> {
        &self.deck
    }

    pub fn config(&self) -> &PresenterConfig {
        &self.config
    }

    pub fn step(&self) -> usize {
        self.presentation.step()
    }

    pub fn is_finished(&self) -> bool {
        self.deck.is_finished(self.step())
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn show_popup(&self) -> bool {
        matches!(self.focus, Focus::Popup(_))
    }

    pub fn popup_kind(&self) -> Option<PopupKind> {
        match self.focus {
            Focus::Popup(kind) => Some(kind),
            Focus::Deck => None,
        }
    }

    /// Open `kind`, or close it if it is already open. Returns whether a
    /// popup is open afterwards.
    pub fn toggle_popup(&mut self, kind: PopupKind) -> bool {
        self.focus = match self.focus {
            Focus::Popup(open) if open == kind => Focus::Deck,
            _ => Focus::Popup(kind),
        };
        self.needs_redraw = true;
        self.show_popup()
    }

    pub fn close_popup(&mut self) {
        if self.show_popup() {
            self.focus = Focus::Deck;
            self.needs_redraw = true;
        }
    }

    pub fn size(&self) -> Option<(u16, u16)> {
        self.size
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
        self.needs_redraw = true;
    }

    /// Returns whether a frame should be drawn and clears the flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    pub fn advance(&mut self, by: usize) {
        self.dispatch(PresentationIntent::Advance { by });
    }

    pub fn retreat(&mut self, by: usize) {
        self.dispatch(PresentationIntent::Retreat { by });
    }

    pub fn reset(&mut self) {
        self.dispatch(PresentationIntent::Reset);
    }

    pub fn jump_to_end(&mut self) {
        let step = self.deck.last_step().unwrap_or(0);
        self.dispatch(PresentationIntent::JumpTo { step });
    }

    // ========================================================================
    // Presentation state (MVI pattern)
    // ========================================================================

    /// Dispatch an intent to the presentation reducer.
    ///
    /// Only a state that differs from the previous one counts as a change.
    pub fn dispatch(&mut self, intent: PresentationIntent) {
        let before = self.presentation;
        dispatch_mvi!(self, presentation, PresentationReducer, intent);
        if self.config.clamp_to_end {
            self.clamp_to_last_step();
        }
        if self.presentation != before {
            tracing::debug!(
                from = before.step(),
                to = self.presentation.step(),
                ?intent,
                "step changed"
            );
            self.needs_redraw = true;
        }
    }

    fn clamp_to_last_step(&mut self) {
        let last = self.deck.last_step().unwrap_or(0);
        if self.presentation.step() > last {
            self.presentation = PresentationState::new(last);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::DeckNode;

    fn app(config: PresenterConfig) -> App {
        let root = DeckNode::sequence(vec![
            DeckNode::content(Slide::title("one")),
            DeckNode::content(Slide::text("two")),
        ]);
        App::new(Deck::new("test", root), config)
    }

    #[test]
    fn unchanged_step_does_not_request_redraw() {
        let mut app = app(PresenterConfig::default());
        assert!(app.take_redraw());
        app.retreat(1);
        assert!(!app.take_redraw());
        app.advance(1);
        assert!(app.take_redraw());
    }

    #[test]
    fn advance_runs_past_end_without_clamp() {
        let mut app = app(PresenterConfig::default());
        app.advance(5);
        assert_eq!(app.step(), 5);
        assert!(app.is_finished());
    }

    #[test]
    fn clamp_to_end_stops_at_last_step() {
        let mut app = app(PresenterConfig {
            clamp_to_end: true,
            ..PresenterConfig::default()
        });
        app.advance(5);
        assert_eq!(app.step(), 1);
        assert!(!app.is_finished());
    }

    #[test]
    fn toggle_popup_closes_same_kind() {
        let mut app = app(PresenterConfig::default());
        assert!(app.toggle_popup(PopupKind::Help));
        assert_eq!(app.popup_kind(), Some(PopupKind::Help));
        assert!(app.toggle_popup(PopupKind::Outline));
        assert!(!app.toggle_popup(PopupKind::Outline));
        assert_eq!(app.focus(), Focus::Deck);
    }
}
