//! Step resolution: which parts of the tree are active at a local step.
//!
//! Every function here is pure. The caller passes the local step
//! explicitly and each node computes its children's local steps before
//! recursing, so resolving the same tree at the same step always yields
//! the same result.

use crate::deck::decoration::Decoration;
use crate::deck::node::{Arrangement, Axis, DeckNode, NodeKind};

/// A direct child that is active, with the step it should see.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveChild<'a, C> {
    pub index: usize,
    pub node: &'a DeckNode<C>,
    pub step: usize,
}

/// One revealed entry of a build, keyed by its child index.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveSpan<'a, C> {
    pub index: usize,
    pub span: Span<'a, C>,
}

/// Resolved shape of a subtree at one step.
#[derive(Debug, Clone, PartialEq)]
pub enum Span<'a, C> {
    Empty,
    Leaf {
        content: &'a C,
        step: usize,
    },
    Sequence {
        index: usize,
        child: Box<Span<'a, C>>,
    },
    Build {
        axis: Axis,
        /// Number of children in the build, revealed or not.
        total: usize,
        children: Vec<ActiveSpan<'a, C>>,
    },
    Parallel {
        arrangement: Arrangement,
        children: Vec<Span<'a, C>>,
    },
    Decorated {
        decoration: &'a Decoration,
        step: usize,
        child: Box<Span<'a, C>>,
    },
}

/// A visible leaf, its local step and its position in the tree.
///
/// `path` holds child indices through containers only; wrapping a node in
/// modifiers does not change its path.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveLeaf<'a, C> {
    pub path: Vec<usize>,
    pub content: &'a C,
    pub step: usize,
}

impl<C> DeckNode<C> {
    /// The single active child of a sequence at `step`, if any.
    ///
    /// Returns `None` for non-sequence nodes as well as for steps at or
    /// beyond the sequence's length.
    pub fn active_in_sequence(&self, step: usize) -> Option<ActiveChild<'_, C>> {
        let NodeKind::Sequence(children) = self.kind() else {
            return None;
        };
        select_one(children, step)
    }

    /// Direct children active at `step`, in order.
    pub fn active_children(&self, step: usize) -> Vec<ActiveChild<'_, C>> {
        match self.kind() {
            NodeKind::Leaf(_) => Vec::new(),
            NodeKind::Sequence(children) => select_one(children, step).into_iter().collect(),
            NodeKind::Build { children, .. } => select_prefix(children, step),
            NodeKind::Parallel { children, .. } => children
                .iter()
                .enumerate()
                .map(|(index, node)| ActiveChild { index, node, step })
                .collect(),
            NodeKind::Delay { amount, child } => {
                if step < *amount {
                    Vec::new()
                } else {
                    vec![ActiveChild {
                        index: 0,
                        node: child.as_ref(),
                        step: step - amount,
                    }]
                }
            }
            NodeKind::HideAfter { after, child } => {
                if step >= *after {
                    Vec::new()
                } else {
                    vec![ActiveChild {
                        index: 0,
                        node: child.as_ref(),
                        step,
                    }]
                }
            }
            NodeKind::Cut { child, .. } | NodeKind::Decorate { child, .. } => {
                vec![ActiveChild {
                    index: 0,
                    node: child.as_ref(),
                    step,
                }]
            }
        }
    }

    /// Resolve this subtree at a local step.
    pub fn resolve(&self, step: usize) -> Span<'_, C> {
        match self.kind() {
            NodeKind::Leaf(content) => Span::Leaf { content, step },
            NodeKind::Sequence(children) => match select_one(children, step) {
                Some(active) => Span::Sequence {
                    index: active.index,
                    child: Box::new(active.node.resolve(active.step)),
                },
                None => Span::Empty,
            },
            NodeKind::Build { axis, children } => Span::Build {
                axis: *axis,
                total: children.len(),
                children: select_prefix(children, step)
                    .into_iter()
                    .map(|active| ActiveSpan {
                        index: active.index,
                        span: active.node.resolve(active.step),
                    })
                    .collect(),
            },
            NodeKind::Parallel {
                arrangement,
                children,
            } => Span::Parallel {
                arrangement: *arrangement,
                children: children.iter().map(|child| child.resolve(step)).collect(),
            },
            NodeKind::Delay { amount, child } => {
                if step < *amount {
                    Span::Empty
                } else {
                    child.resolve(step - amount)
                }
            }
            NodeKind::Cut { child, .. } => child.resolve(step),
            NodeKind::HideAfter { after, child } => {
                if step >= *after {
                    Span::Empty
                } else {
                    child.resolve(step)
                }
            }
            NodeKind::Decorate { decoration, child } => Span::Decorated {
                decoration,
                step,
                child: Box::new(child.resolve(step)),
            },
        }
    }
}

impl<'a, C> Span<'a, C> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Span::Empty)
    }

    /// Visible leaves in document order.
    pub fn leaves(&self) -> Vec<ActiveLeaf<'a, C>> {
        let mut out = Vec::new();
        let mut path = Vec::new();
        self.collect_leaves(&mut path, &mut out);
        out
    }

    fn collect_leaves(&self, path: &mut Vec<usize>, out: &mut Vec<ActiveLeaf<'a, C>>) {
        match self {
            Span::Empty => {}
            Span::Leaf { content, step } => out.push(ActiveLeaf {
                path: path.clone(),
                content: *content,
                step: *step,
            }),
            Span::Sequence { index, child } => {
                path.push(*index);
                child.collect_leaves(path, out);
                path.pop();
            }
            Span::Build { children, .. } => {
                for active in children {
                    path.push(active.index);
                    active.span.collect_leaves(path, out);
                    path.pop();
                }
            }
            Span::Parallel { children, .. } => {
                for (index, child) in children.iter().enumerate() {
                    path.push(index);
                    child.collect_leaves(path, out);
                    path.pop();
                }
            }
            Span::Decorated { child, .. } => child.collect_leaves(path, out),
        }
    }
}

/// Walk the budget forward until the step falls inside a child.
fn select_one<C>(children: &[DeckNode<C>], step: usize) -> Option<ActiveChild<'_, C>> {
    let mut remaining = step;
    for (index, node) in children.iter().enumerate() {
        if remaining < node.length() {
            return Some(ActiveChild {
                index,
                node,
                step: remaining,
            });
        }
        remaining -= node.length();
    }
    None
}

/// Every child whose starting offset has been reached. Zero-length children
/// are included once reached and do not consume budget.
fn select_prefix<C>(children: &[DeckNode<C>], step: usize) -> Vec<ActiveChild<'_, C>> {
    let mut active = Vec::new();
    let mut offset = 0usize;
    for (index, node) in children.iter().enumerate() {
        if offset > step {
            break;
        }
        active.push(ActiveChild {
            index,
            node,
            step: step - offset,
        });
        offset = offset.saturating_add(node.length());
    }
    active
}
