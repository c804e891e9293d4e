use crate::deck::node::{Arrangement, Axis, DeckNode, StepContent};

/// Ordered child list assembled one node at a time.
///
/// ```ignore
/// let slide = DeckBuilder::new()
///     .add(DeckNode::leaf("one", 1))
///     .add(DeckNode::leaf("two", 1))
///     .build(Axis::Vertical);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DeckBuilder<C> {
    children: Vec<DeckNode<C>>,
}

impl<C> Default for DeckBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> DeckBuilder<C> {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    pub fn add(mut self, node: DeckNode<C>) -> Self {
        self.children.push(node);
        self
    }

    pub fn push(&mut self, node: DeckNode<C>) {
        self.children.push(node);
    }

    pub fn extend<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = DeckNode<C>>,
    {
        self.children.extend(nodes);
        self
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn into_children(self) -> Vec<DeckNode<C>> {
        self.children
    }

    pub fn sequence(self) -> DeckNode<C> {
        DeckNode::sequence(self.children)
    }

    pub fn build(self, axis: Axis) -> DeckNode<C> {
        DeckNode::build(axis, self.children)
    }

    pub fn parallel(self, arrangement: Arrangement) -> DeckNode<C> {
        DeckNode::parallel(arrangement, self.children)
    }
}

impl<C: StepContent> DeckBuilder<C> {
    /// Add a leaf sized by its content.
    pub fn content(self, content: C) -> Self {
        self.add(DeckNode::content(content))
    }
}
