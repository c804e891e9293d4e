use crate::deck::node::DeckNode;
use crate::deck::resolve::{ActiveLeaf, Span};

/// A complete presentation: a title and the root of its deck tree.
///
/// Global steps are resolved against the root. Once the global step reaches
/// the root's length nothing is active any more, whatever the root kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Deck<C> {
    title: String,
    root: DeckNode<C>,
}

impl<C> Deck<C> {
    pub fn new(title: impl Into<String>, root: DeckNode<C>) -> Self {
        Self {
            title: title.into(),
            root,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn root(&self) -> &DeckNode<C> {
        &self.root
    }

    /// Total number of steps in the presentation.
    pub fn length(&self) -> usize {
        self.root.length()
    }

    /// Index of the final step, or `None` for an empty deck.
    pub fn last_step(&self) -> Option<usize> {
        self.length().checked_sub(1)
    }

    pub fn is_finished(&self, step: usize) -> bool {
        step >= self.length()
    }

    pub fn resolve(&self, step: usize) -> Span<'_, C> {
        if self.is_finished(step) {
            return Span::Empty;
        }
        self.root.resolve(step)
    }

    pub fn active_leaves(&self, step: usize) -> Vec<ActiveLeaf<'_, C>> {
        self.resolve(step).leaves()
    }
}
