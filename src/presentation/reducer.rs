use crate::mvi::Reducer;
use crate::presentation::intent::PresentationIntent;
use crate::presentation::state::PresentationState;

pub struct PresentationReducer;

impl Reducer for PresentationReducer {
    type State = PresentationState;
    type Intent = PresentationIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PresentationIntent::Advance { by } => {
                let mut next = state;
                next.advance(by);
                next
            }
            PresentationIntent::Retreat { by } => {
                let mut next = state;
                next.retreat(by);
                next
            }
            PresentationIntent::Reset => PresentationState::default(),
            PresentationIntent::JumpTo { step } => PresentationState::new(step),
        }
    }
}
