use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str = " ?: Help │ o: Outline ";
const FILLED: &str = "━";
const EMPTY: &str = "─";

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    /// Key hints, a progress bar through the deck and the version.
    pub fn widget(&self, area: Rect, step: usize, length: usize) -> Paragraph<'static> {
        let percent = format!(" {:>3}% ", progress_cells(100, step, length));
        let version = format!("v{} ", VERSION);

        // Box-drawing hints: width by chars, not bytes.
        let content_width = area.width.saturating_sub(2) as usize;
        let bar_width = content_width
            .saturating_sub(HINTS.chars().count())
            .saturating_sub(percent.len())
            .saturating_sub(version.len());
        let filled = progress_cells(bar_width, step, length);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let line = Line::from(vec![
            Span::styled(HINTS, text_style),
            Span::styled(FILLED.repeat(filled), Style::default().fg(ACCENT)),
            Span::styled(
                EMPTY.repeat(bar_width - filled),
                Style::default().fg(HEADER_SEPARATOR),
            ),
            Span::styled(percent, text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

/// Cells of `width` covered once the step at `step` has been shown.
///
/// Finished decks and empty decks fill the whole width.
fn progress_cells(width: usize, step: usize, length: usize) -> usize {
    if step >= length {
        return width;
    }
    let shown = step as u128 + 1;
    (width as u128 * shown / length as u128) as usize
}
