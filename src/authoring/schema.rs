//! On-disk deck format (TOML).
//!
//! ```toml
//! title = "Release notes"
//!
//! [root]
//! kind = "sequence"
//!
//! [[root.children]]
//! kind = "title"
//! text = "What changed"
//! centered = true
//!
//! [[root.children]]
//! kind = "build"
//! padding = 1
//! children = [
//!   { kind = "text", text = "Faster startup" },
//!   { kind = "text", text = "Smaller binary", delay = 1 },
//! ]
//! ```

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeckFile {
    #[serde(default)]
    pub title: Option<String>,
    pub root: NodeSpec,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KindSpec {
    Sequence,
    Build,
    Parallel,
    Title,
    Text,
    Body,
    Code,
    Quote,
    Blank,
}

impl KindSpec {
    pub fn is_container(self) -> bool {
        matches!(self, KindSpec::Sequence | KindSpec::Build | KindSpec::Parallel)
    }

    pub fn name(self) -> &'static str {
        match self {
            KindSpec::Sequence => "sequence",
            KindSpec::Build => "build",
            KindSpec::Parallel => "parallel",
            KindSpec::Title => "title",
            KindSpec::Text => "text",
            KindSpec::Body => "body",
            KindSpec::Code => "code",
            KindSpec::Quote => "quote",
            KindSpec::Blank => "blank",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisSpec {
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignSpec {
    TopLeading,
    Top,
    Leading,
    Center,
}

/// A frame is either plain text shown for one step or a held frame.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FrameEntry {
    Plain(String),
    Held { text: String, hold: usize },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeSpec {
    pub kind: KindSpec,
    #[serde(default)]
    pub children: Vec<NodeSpec>,

    // Leaf content.
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub frames: Vec<FrameEntry>,
    #[serde(default)]
    pub parts: Vec<String>,
    #[serde(default)]
    pub separator: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub centered: bool,
    /// Overrides the step length the content would report.
    #[serde(default)]
    pub length: Option<usize>,

    // Container layout.
    #[serde(default)]
    pub axis: Option<AxisSpec>,
    #[serde(default)]
    pub separated: bool,

    // Modifiers, applied innermost first in this order.
    #[serde(default)]
    pub hide_after: Option<usize>,
    #[serde(default)]
    pub cut: Option<usize>,
    #[serde(default)]
    pub padding: Option<u16>,
    #[serde(default)]
    pub max_width: Option<u16>,
    #[serde(default)]
    pub max_height: Option<u16>,
    #[serde(default)]
    pub align: Option<AlignSpec>,
    #[serde(default)]
    pub titled: Option<String>,
    #[serde(default)]
    pub boxed: bool,
    #[serde(default)]
    pub delay: Option<usize>,
}
