//! Length-preserving wrappers: padding, framing, panels, step-aware styling.
//!
//! None of these touch step accounting. They are carried through resolution
//! so the renderer can apply them around the wrapped span.

use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Insets {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Insets {
    pub fn uniform(amount: u16) -> Self {
        Self {
            top: amount,
            right: amount,
            bottom: amount,
            left: amount,
        }
    }

    pub fn symmetric(vertical: u16, horizontal: u16) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    TopLeading,
    Top,
    Leading,
    #[default]
    Center,
}

/// Upper bounds on the area a span may occupy. `None` means unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameSpec {
    pub max_width: Option<u16>,
    pub max_height: Option<u16>,
    pub alignment: Alignment,
}

/// Renderer-neutral emphasis produced by a [`StepTransform`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Emphasis {
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub accent: bool,
}

/// Shared closure mapping the wrapped node's local step to an [`Emphasis`].
///
/// Equality is identity: two transforms are equal only if they share the
/// same closure.
#[derive(Clone)]
pub struct StepTransform(Arc<dyn Fn(usize) -> Emphasis + Send + Sync>);

impl StepTransform {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(usize) -> Emphasis + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn apply(&self, step: usize) -> Emphasis {
        (self.0)(step)
    }
}

impl fmt::Debug for StepTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StepTransform(..)")
    }
}

impl PartialEq for StepTransform {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Decoration {
    Padding(Insets),
    Frame(FrameSpec),
    Transform(StepTransform),
    /// Panel with a heading and a rule beneath it.
    Titled(String),
    /// Bordered container.
    Boxed,
}

impl Decoration {
    pub fn label(&self) -> &'static str {
        match self {
            Decoration::Padding(_) => "padding",
            Decoration::Frame(_) => "frame",
            Decoration::Transform(_) => "transform",
            Decoration::Titled(_) => "titled",
            Decoration::Boxed => "boxed",
        }
    }
}
