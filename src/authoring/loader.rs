use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::authoring::schema::{AlignSpec, AxisSpec, DeckFile, FrameEntry, KindSpec, NodeSpec};
use crate::deck::{
    Alignment, Arrangement, Axis, Deck, DeckError, DeckNode, FrameSpec, Hold, StepValue,
};
use crate::slide::Slide;

/// Errors that can occur when loading a deck file.
#[derive(Debug, Error)]
pub enum DeckFileError {
    #[error("Failed to read deck file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse deck file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid node at {node}: {message}")]
    InvalidNode { node: String, message: String },

    #[error("Invalid node at {node}: {source}")]
    InvalidContent {
        node: String,
        #[source]
        source: DeckError,
    },
}

/// Read and build a deck from a TOML file.
///
/// Without a `title` entry the file stem is used as the deck title.
pub fn load_deck(path: &Path) -> Result<Deck<Slide>, DeckFileError> {
    let content = fs::read_to_string(path).map_err(|e| DeckFileError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let file: DeckFile = toml::from_str(&content).map_err(|e| DeckFileError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let fallback = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "deck".to_string());
    let deck = build_deck(file, &fallback)?;
    tracing::debug!(
        path = %path.display(),
        title = deck.title(),
        length = deck.length(),
        "deck loaded"
    );
    Ok(deck)
}

/// Build a deck from an already parsed file.
pub fn build_deck(file: DeckFile, fallback_title: &str) -> Result<Deck<Slide>, DeckFileError> {
    let root = build_node(&file.root, "root")?;
    let title = file.title.unwrap_or_else(|| fallback_title.to_string());
    Ok(Deck::new(title, root))
}

fn build_node(spec: &NodeSpec, at: &str) -> Result<DeckNode<Slide>, DeckFileError> {
    check_fields(spec, at)?;
    let node = if spec.kind.is_container() {
        build_container(spec, at)?
    } else {
        build_leaf(spec, at)?
    };
    Ok(apply_modifiers(node, spec))
}

fn build_container(spec: &NodeSpec, at: &str) -> Result<DeckNode<Slide>, DeckFileError> {
    if spec.children.is_empty() {
        return Err(invalid(at, "container has no children"));
    }
    let children = spec
        .children
        .iter()
        .enumerate()
        .map(|(i, child)| build_node(child, &format!("{at}.children[{i}]")))
        .collect::<Result<Vec<_>, _>>()?;

    let axis = match spec.axis.unwrap_or(AxisSpec::Vertical) {
        AxisSpec::Vertical => Axis::Vertical,
        AxisSpec::Horizontal => Axis::Horizontal,
    };

    let node = match spec.kind {
        KindSpec::Sequence => DeckNode::sequence(children),
        KindSpec::Build => DeckNode::build(axis, children),
        KindSpec::Parallel => {
            let arrangement = match (spec.separated, axis) {
                (true, axis) => Arrangement::Separated(axis),
                (false, Axis::Vertical) => Arrangement::Vertical,
                (false, Axis::Horizontal) => Arrangement::Horizontal,
            };
            DeckNode::parallel(arrangement, children)
        }
        _ => return Err(invalid(at, "not a container kind")),
    };
    Ok(node)
}

/// Rejects content and layout fields the node's kind never reads.
fn check_fields(spec: &NodeSpec, at: &str) -> Result<(), DeckFileError> {
    let kind = spec.kind;
    let quote = kind == KindSpec::Quote;
    if quote && !spec.parts.is_empty() && !spec.frames.is_empty() {
        return Err(invalid(at, "`frames` and `parts` cannot both be set"));
    }
    let framed_kind = matches!(kind, KindSpec::Body | KindSpec::Code | KindSpec::Quote);
    let framed = !spec.frames.is_empty() || !spec.parts.is_empty();
    let fields = [
        (
            "text",
            spec.text.is_some(),
            matches!(kind, KindSpec::Title | KindSpec::Text) || (framed_kind && !framed),
        ),
        ("frames", !spec.frames.is_empty(), framed_kind),
        ("parts", !spec.parts.is_empty(), quote),
        ("separator", spec.separator.is_some(), quote && !spec.parts.is_empty()),
        ("language", spec.language.is_some(), kind == KindSpec::Code),
        ("centered", spec.centered, kind == KindSpec::Title),
        ("length", spec.length.is_some(), !kind.is_container()),
        (
            "axis",
            spec.axis.is_some(),
            matches!(kind, KindSpec::Build | KindSpec::Parallel),
        ),
        ("separated", spec.separated, kind == KindSpec::Parallel),
    ];
    match fields.iter().find(|(_, set, applies)| *set && !*applies) {
        Some((field, ..)) => Err(invalid(
            at,
            &format!("`{field}` has no effect on a {} node", kind.name()),
        )),
        None => Ok(()),
    }
}

fn build_leaf(spec: &NodeSpec, at: &str) -> Result<DeckNode<Slide>, DeckFileError> {
    if !spec.children.is_empty() {
        return Err(invalid(at, "leaf nodes cannot have children"));
    }

    let slide = match spec.kind {
        KindSpec::Title => Slide::Title {
            text: required_text(spec, at)?,
            centered: spec.centered,
        },
        KindSpec::Text => Slide::Text(required_text(spec, at)?),
        KindSpec::Body => Slide::Body(frames(spec, at)?),
        KindSpec::Code => Slide::Code {
            language: spec.language.clone(),
            frames: frames(spec, at)?,
        },
        KindSpec::Quote => {
            let value = if spec.parts.is_empty() {
                frames(spec, at)?
            } else {
                let separator = spec.separator.as_deref().unwrap_or(" ");
                StepValue::accumulate(spec.parts.as_slice(), separator)
                    .map_err(|source| content_error(at, source))?
            };
            Slide::Quote(value)
        }
        KindSpec::Blank => Slide::Blank,
        _ => return Err(invalid(at, "not a leaf kind")),
    };

    Ok(match spec.length {
        Some(length) => DeckNode::leaf(slide, length),
        None => DeckNode::content(slide),
    })
}

/// Innermost first: hide_after, cut, padding, frame, titled, boxed, delay.
fn apply_modifiers(mut node: DeckNode<Slide>, spec: &NodeSpec) -> DeckNode<Slide> {
    if let Some(after) = spec.hide_after {
        node = node.hide_after(after);
    }
    if let Some(amount) = spec.cut {
        node = node.cut(amount);
    }
    if let Some(padding) = spec.padding {
        node = node.padding(padding);
    }
    if spec.max_width.is_some() || spec.max_height.is_some() || spec.align.is_some() {
        node = node.frame(FrameSpec {
            max_width: spec.max_width,
            max_height: spec.max_height,
            alignment: spec.align.map(alignment).unwrap_or_default(),
        });
    }
    if let Some(title) = &spec.titled {
        node = node.titled(title.clone());
    }
    if spec.boxed {
        node = node.boxed();
    }
    if let Some(amount) = spec.delay {
        node = node.delay(amount);
    }
    node
}

fn alignment(spec: AlignSpec) -> Alignment {
    match spec {
        AlignSpec::TopLeading => Alignment::TopLeading,
        AlignSpec::Top => Alignment::Top,
        AlignSpec::Leading => Alignment::Leading,
        AlignSpec::Center => Alignment::Center,
    }
}

fn required_text(spec: &NodeSpec, at: &str) -> Result<String, DeckFileError> {
    spec.text
        .clone()
        .ok_or_else(|| invalid(at, "missing `text`"))
}

/// Frames come from `frames`, or from a single `text` when no frames are given.
fn frames(spec: &NodeSpec, at: &str) -> Result<StepValue<String>, DeckFileError> {
    if spec.frames.is_empty() {
        if let Some(text) = &spec.text {
            return Ok(StepValue::single(text.clone()));
        }
    }
    let holds = spec
        .frames
        .iter()
        .map(|entry| match entry {
            FrameEntry::Plain(text) => Hold::once(text.clone()),
            FrameEntry::Held { text, hold } => Hold::new(text.clone(), *hold),
        })
        .collect();
    StepValue::build(holds).map_err(|source| content_error(at, source))
}

fn invalid(at: &str, message: &str) -> DeckFileError {
    DeckFileError::InvalidNode {
        node: at.to_string(),
        message: message.to_string(),
    }
}

fn content_error(at: &str, source: DeckError) -> DeckFileError {
    DeckFileError::InvalidContent {
        node: at.to_string(),
        source,
    }
}
