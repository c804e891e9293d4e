//! The deck tree: a closed set of node kinds with a cached step length.

use crate::deck::decoration::{Alignment, Decoration, FrameSpec, Insets, StepTransform};

/// Anything that can sit in a leaf and knows how many steps it spans.
pub trait StepContent {
    fn length(&self) -> usize;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Axis {
    #[default]
    Vertical,
    Horizontal,
}

/// Static layout of a parallel container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrangement {
    Horizontal,
    Vertical,
    /// Panes laid out along `Axis` with separators between them.
    Separated(Axis),
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind<C> {
    Leaf(C),
    /// One child at a time.
    Sequence(Vec<DeckNode<C>>),
    /// Children accumulate: once revealed, a child stays.
    Build {
        axis: Axis,
        children: Vec<DeckNode<C>>,
    },
    /// All children at once, sharing the parent's step.
    Parallel {
        arrangement: Arrangement,
        children: Vec<DeckNode<C>>,
    },
    Delay {
        amount: usize,
        child: Box<DeckNode<C>>,
    },
    Cut {
        amount: usize,
        child: Box<DeckNode<C>>,
    },
    HideAfter {
        after: usize,
        child: Box<DeckNode<C>>,
    },
    Decorate {
        decoration: Decoration,
        child: Box<DeckNode<C>>,
    },
}

/// A node in the deck tree.
///
/// `length` is computed once from the static structure when the node is
/// built. Nodes are immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckNode<C> {
    length: usize,
    kind: NodeKind<C>,
}

impl<C> DeckNode<C> {
    /// Leaf with an explicit length, regardless of what the content reports.
    pub fn leaf(content: C, length: usize) -> Self {
        Self {
            length,
            kind: NodeKind::Leaf(content),
        }
    }

    pub fn sequence(children: Vec<DeckNode<C>>) -> Self {
        Self {
            length: sum_lengths(&children),
            kind: NodeKind::Sequence(children),
        }
    }

    pub fn build(axis: Axis, children: Vec<DeckNode<C>>) -> Self {
        Self {
            length: sum_lengths(&children),
            kind: NodeKind::Build { axis, children },
        }
    }

    pub fn parallel(arrangement: Arrangement, children: Vec<DeckNode<C>>) -> Self {
        let length = children.iter().map(DeckNode::length).max().unwrap_or(0);
        Self {
            length,
            kind: NodeKind::Parallel {
                arrangement,
                children,
            },
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn kind(&self) -> &NodeKind<C> {
        &self.kind
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf(_))
    }

    /// Direct children in order; modifiers report their single child.
    pub fn children(&self) -> &[DeckNode<C>] {
        match &self.kind {
            NodeKind::Leaf(_) => &[],
            NodeKind::Sequence(children)
            | NodeKind::Build { children, .. }
            | NodeKind::Parallel { children, .. } => children,
            NodeKind::Delay { child, .. }
            | NodeKind::Cut { child, .. }
            | NodeKind::HideAfter { child, .. }
            | NodeKind::Decorate { child, .. } => std::slice::from_ref(child.as_ref()),
        }
    }

    /// Occupy `amount` steps of the parent's budget before the child starts.
    pub fn delay(self, amount: usize) -> Self {
        Self {
            length: self.length.saturating_add(amount),
            kind: NodeKind::Delay {
                amount,
                child: Box::new(self),
            },
        }
    }

    /// Report `amount` fewer steps to the parent. The length never goes
    /// below zero.
    pub fn cut(self, amount: usize) -> Self {
        if amount > self.length {
            tracing::warn!(
                amount,
                length = self.length,
                "cut exceeds child length, clamping to zero"
            );
        }
        Self {
            length: self.length.saturating_sub(amount),
            kind: NodeKind::Cut {
                amount,
                child: Box::new(self),
            },
        }
    }

    /// Stop showing the child once the local step reaches `after`.
    pub fn hide_after(self, after: usize) -> Self {
        Self {
            length: self.length,
            kind: NodeKind::HideAfter {
                after,
                child: Box::new(self),
            },
        }
    }

    /// Hide the child as soon as its own steps are used up.
    pub fn hide_after_own_length(self) -> Self {
        let after = self.length;
        self.hide_after(after)
    }

    pub fn decorate(self, decoration: Decoration) -> Self {
        Self {
            length: self.length,
            kind: NodeKind::Decorate {
                decoration,
                child: Box::new(self),
            },
        }
    }

    pub fn padding(self, amount: u16) -> Self {
        self.decorate(Decoration::Padding(Insets::uniform(amount)))
    }

    pub fn insets(self, insets: Insets) -> Self {
        self.decorate(Decoration::Padding(insets))
    }

    pub fn frame(self, frame: FrameSpec) -> Self {
        self.decorate(Decoration::Frame(frame))
    }

    /// Unbounded frame with centred content.
    pub fn centered(self) -> Self {
        self.frame(FrameSpec {
            max_width: None,
            max_height: None,
            alignment: Alignment::Center,
        })
    }

    pub fn transform(self, transform: StepTransform) -> Self {
        self.decorate(Decoration::Transform(transform))
    }

    pub fn titled(self, title: impl Into<String>) -> Self {
        self.decorate(Decoration::Titled(title.into()))
    }

    pub fn boxed(self) -> Self {
        self.decorate(Decoration::Boxed)
    }
}

impl<C: StepContent> DeckNode<C> {
    /// Leaf whose length is whatever the content reports.
    pub fn content(content: C) -> Self {
        let length = content.length();
        Self::leaf(content, length)
    }
}

fn sum_lengths<C>(children: &[DeckNode<C>]) -> usize {
    children
        .iter()
        .fold(0usize, |acc, child| acc.saturating_add(child.length()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(len: usize) -> DeckNode<&'static str> {
        DeckNode::leaf("x", len)
    }

    #[test]
    fn container_lengths() {
        assert_eq!(DeckNode::sequence(vec![leaf(2), leaf(3)]).length(), 5);
        assert_eq!(DeckNode::build(Axis::Vertical, vec![leaf(2), leaf(3)]).length(), 5);
        assert_eq!(
            DeckNode::parallel(Arrangement::Horizontal, vec![leaf(2), leaf(3)]).length(),
            3
        );
        assert_eq!(
            DeckNode::<&str>::parallel(Arrangement::Vertical, Vec::new()).length(),
            0
        );
    }

    #[test]
    fn modifier_lengths() {
        assert_eq!(leaf(3).delay(2).length(), 5);
        assert_eq!(leaf(3).cut(1).length(), 2);
        assert_eq!(leaf(3).cut(7).length(), 0);
        assert_eq!(leaf(3).hide_after(1).length(), 3);
        assert_eq!(leaf(3).padding(2).boxed().titled("t").length(), 3);
    }

    #[test]
    fn children_of_modifier_is_wrapped_node() {
        let node = leaf(4).delay(1);
        assert_eq!(node.children(), &[leaf(4)]);
        assert!(leaf(1).children().is_empty());
    }
}
