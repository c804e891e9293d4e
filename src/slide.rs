//! Leaf content shown by the terminal presenter.

use std::fmt;

use crate::deck::{StepContent, StepValue};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slide {
    /// Heading, emphasised on its first step.
    Title { text: String, centered: bool },
    Text(String),
    /// Paragraph whose text changes per step.
    Body(StepValue<String>),
    Code {
        language: Option<String>,
        frames: StepValue<String>,
    },
    /// Quotation, usually growing one part per step.
    Quote(StepValue<String>),
    /// Takes up steps without drawing anything.
    Blank,
}

impl Slide {
    pub fn title(text: impl Into<String>) -> Self {
        Slide::Title {
            text: text.into(),
            centered: false,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Slide::Text(text.into())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Slide::Title { .. } => "title",
            Slide::Text(_) => "text",
            Slide::Body(_) => "body",
            Slide::Code { .. } => "code",
            Slide::Quote(_) => "quote",
            Slide::Blank => "blank",
        }
    }

    /// The text this slide shows at a local step.
    pub fn text_at(&self, step: usize) -> &str {
        match self {
            Slide::Title { text, .. } | Slide::Text(text) => text.as_str(),
            Slide::Body(frames) | Slide::Quote(frames) | Slide::Code { frames, .. } => {
                frames.get(step).as_str()
            }
            Slide::Blank => "",
        }
    }
}

impl StepContent for Slide {
    fn length(&self) -> usize {
        match self {
            Slide::Title { .. } | Slide::Text(_) | Slide::Blank => 1,
            Slide::Body(frames) | Slide::Quote(frames) | Slide::Code { frames, .. } => frames.len(),
        }
    }
}

impl fmt::Display for Slide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const PREVIEW: usize = 32;
        let text = self.text_at(0);
        let first_line = text.lines().next().unwrap_or("");
        if first_line.is_empty() {
            return f.write_str(self.kind());
        }
        let preview: String = first_line.chars().take(PREVIEW).collect();
        if first_line.chars().count() > PREVIEW {
            write!(f, "{} \"{}…\"", self.kind(), preview)
        } else {
            write!(f, "{} \"{}\"", self.kind(), preview)
        }
    }
}
