use crate::deck::{Arrangement, Decoration, Emphasis, Span as DeckSpan};
use crate::inspect::outline;
use crate::slide::Slide;
use crate::ui::app::{App, PopupKind};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{
    centered_rect_by_size, direction, framed_rect, inset_rect, layout_regions, split_even,
    split_separated,
};
use crate::ui::slide_view::SlideView;
use crate::ui::theme::{ACCENT, END_MARKER, GLOBAL_BORDER, HEADER_SEPARATOR, POPUP_BORDER};
use ratatui::layout::{Alignment, Direction, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const HELP_LINES: &[&str] = &[
    "→ ↓ Space Enter j l   next step",
    "← ↑ Backspace k h     previous step",
    "Shift + arrows        skip several steps",
    "Home g / End G        first / last step",
    "o                     outline",
    "?                     this help",
    "q Esc Ctrl+C          quit",
];

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let body = if app.config().show_chrome {
        let (header, body, footer) = layout_regions(area);
        let deck = app.deck();
        frame.render_widget(
            Header::new().widget(deck.title(), app.step(), deck.length()),
            header,
        );
        frame.render_widget(
            Footer::new().widget(footer, app.step(), deck.length()),
            footer,
        );
        body
    } else {
        area
    };

    frame.render_widget(Clear, body);
    if app.is_finished() {
        draw_end_marker(frame, body);
    } else {
        let span = app.deck().resolve(app.step());
        draw_span(frame, &span, body, Emphasis::default());
    }

    if let Some(kind) = app.popup_kind() {
        draw_popup(frame, app, kind, body);
    }
}

/// Draw a resolved span into `area`, inheriting `emphasis` from enclosing
/// transforms.
pub fn draw_span(frame: &mut Frame<'_>, span: &DeckSpan<'_, Slide>, area: Rect, emphasis: Emphasis) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    match span {
        DeckSpan::Empty => {}
        DeckSpan::Leaf { content, step } => {
            frame.render_widget(SlideView::new(content, *step).emphasis(emphasis), area);
        }
        DeckSpan::Sequence { child, .. } => draw_span(frame, child, area, emphasis),
        DeckSpan::Build {
            axis,
            total,
            children,
        } => {
            // Cells for every child, so revealed items never move.
            let cells = split_even(area, direction(*axis), *total);
            for active in children {
                if let Some(cell) = cells.get(active.index) {
                    draw_span(frame, &active.span, *cell, emphasis);
                }
            }
        }
        DeckSpan::Parallel {
            arrangement,
            children,
        } => {
            let cells = match arrangement {
                Arrangement::Horizontal => split_even(area, Direction::Horizontal, children.len()),
                Arrangement::Vertical => split_even(area, Direction::Vertical, children.len()),
                Arrangement::Separated(axis) => {
                    let direction = direction(*axis);
                    let (cells, gutters) = split_separated(area, direction, children.len());
                    for gutter in gutters {
                        draw_separator(frame, gutter, direction);
                    }
                    cells
                }
            };
            for (child, cell) in children.iter().zip(cells) {
                draw_span(frame, child, cell, emphasis);
            }
        }
        DeckSpan::Decorated {
            decoration,
            step,
            child,
        } => match decoration {
            Decoration::Padding(insets) => {
                draw_span(frame, child, inset_rect(area, insets), emphasis)
            }
            Decoration::Frame(spec) => draw_span(frame, child, framed_rect(area, spec), emphasis),
            Decoration::Transform(transform) => {
                let emphasis = combine(emphasis, transform.apply(*step));
                draw_span(frame, child, area, emphasis);
            }
            Decoration::Titled(title) => {
                let block = Block::default()
                    .title(Span::styled(
                        format!(" {title} "),
                        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                    ))
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(GLOBAL_BORDER));
                let inner = block.inner(area);
                frame.render_widget(block, area);
                draw_span(frame, child, inner, emphasis);
            }
            Decoration::Boxed => {
                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER));
                let inner = block.inner(area);
                frame.render_widget(block, area);
                draw_span(frame, child, inner, emphasis);
            }
        },
    }
}

fn combine(outer: Emphasis, inner: Emphasis) -> Emphasis {
    Emphasis {
        bold: outer.bold || inner.bold,
        dim: outer.dim || inner.dim,
        italic: outer.italic || inner.italic,
        accent: outer.accent || inner.accent,
    }
}

/// `direction` is the direction children are laid out in; the separator
/// runs across it.
fn draw_separator(frame: &mut Frame<'_>, gutter: Rect, direction: Direction) {
    let borders = match direction {
        Direction::Horizontal => Borders::LEFT,
        Direction::Vertical => Borders::TOP,
    };
    frame.render_widget(
        Block::default()
            .borders(borders)
            .border_style(Style::default().fg(HEADER_SEPARATOR)),
        gutter,
    );
}

fn draw_end_marker(frame: &mut Frame<'_>, area: Rect) {
    let rect = centered_rect_by_size(area, area.width, 1);
    let marker = Paragraph::new("end of deck")
        .style(Style::default().fg(END_MARKER).add_modifier(Modifier::DIM))
        .alignment(Alignment::Center);
    frame.render_widget(marker, rect);
}

fn draw_popup(frame: &mut Frame<'_>, app: &App, kind: PopupKind, body: Rect) {
    let (title, lines): (&str, Vec<Line>) = match kind {
        PopupKind::Help => ("Keys", HELP_LINES.iter().map(|l| Line::from(*l)).collect()),
        PopupKind::Outline => {
            let deck = app.deck();
            let mut lines = vec![Line::from(format!(
                "{} ({} steps)",
                deck.title(),
                deck.length()
            ))];
            lines.extend(outline(deck.root()).into_iter().map(Line::from));
            ("Outline", lines)
        }
    };

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let popup_width = content_width.saturating_add(4);
    let popup_height = (lines.len() as u16).saturating_add(2);
    let area = centered_rect_by_size(body, popup_width, popup_height);

    frame.render_widget(Clear, area);
    let popup = Block::default()
        .title(Span::styled(title, Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(popup), area);
}
