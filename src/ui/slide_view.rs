use crate::deck::Emphasis;
use crate::slide::Slide;
use crate::ui::theme::{ACCENT, BODY_TEXT, CODE_TEXT, GLOBAL_BORDER, HEADER_TEXT, QUOTE_TEXT};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

/// Draws one active leaf at its local step.
pub struct SlideView<'a> {
    slide: &'a Slide,
    step: usize,
    emphasis: Emphasis,
}

impl<'a> SlideView<'a> {
    pub fn new(slide: &'a Slide, step: usize) -> Self {
        Self {
            slide,
            step,
            emphasis: Emphasis::default(),
        }
    }

    pub fn emphasis(mut self, emphasis: Emphasis) -> Self {
        self.emphasis = emphasis;
        self
    }

    fn style(&self, base: Style) -> Style {
        apply_emphasis(base, self.emphasis)
    }
}

/// Layer `emphasis` over `base`. Accent replaces the foreground colour.
pub fn apply_emphasis(base: Style, emphasis: Emphasis) -> Style {
    let mut style = base;
    if emphasis.bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    if emphasis.dim {
        style = style.add_modifier(Modifier::DIM);
    }
    if emphasis.italic {
        style = style.add_modifier(Modifier::ITALIC);
    }
    if emphasis.accent {
        style = style.fg(ACCENT);
    }
    style
}

impl Widget for SlideView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let text = self.slide.text_at(self.step);
        match self.slide {
            Slide::Title { centered, .. } => {
                // Emphasised only while the title is the newest thing on screen.
                let base = if self.step == 0 {
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(HEADER_TEXT)
                };
                let alignment = if *centered {
                    Alignment::Center
                } else {
                    Alignment::Left
                };
                Paragraph::new(text.to_string())
                    .style(self.style(base))
                    .alignment(alignment)
                    .wrap(Wrap { trim: true })
                    .render(area, buf);
            }
            Slide::Text(_) | Slide::Body(_) => {
                Paragraph::new(text.to_string())
                    .style(self.style(Style::default().fg(BODY_TEXT)))
                    .wrap(Wrap { trim: false })
                    .render(area, buf);
            }
            Slide::Quote(_) => {
                Paragraph::new(text.to_string())
                    .style(self.style(
                        Style::default()
                            .fg(QUOTE_TEXT)
                            .add_modifier(Modifier::ITALIC),
                    ))
                    .wrap(Wrap { trim: true })
                    .block(
                        Block::default()
                            .borders(Borders::LEFT)
                            .border_style(Style::default().fg(ACCENT)),
                    )
                    .render(area, buf);
            }
            Slide::Code { language, .. } => {
                let mut block = Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER));
                if let Some(language) = language {
                    block = block.title(Span::styled(
                        format!(" {language} "),
                        Style::default().fg(HEADER_TEXT),
                    ));
                }
                let lines: Vec<Line> = text.lines().map(|l| Line::from(l.to_string())).collect();
                Paragraph::new(Text::from(lines))
                    .style(self.style(Style::default().fg(CODE_TEXT)))
                    .block(block)
                    .render(area, buf);
            }
            Slide::Blank => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::StepValue;

    fn rendered(view: SlideView<'_>, width: u16, height: u16) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf);
        buf
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn title_is_bold_only_on_first_step() {
        let slide = Slide::title("Intro");
        let first = rendered(SlideView::new(&slide, 0), 10, 1);
        let later = rendered(SlideView::new(&slide, 1), 10, 1);
        assert!(first[(0, 0)].modifier.contains(Modifier::BOLD));
        assert!(!later[(0, 0)].modifier.contains(Modifier::BOLD));
        assert!(row(&first, 0).starts_with("Intro"));
    }

    #[test]
    fn body_shows_frame_for_step() {
        let slide = Slide::Body(StepValue::new(vec!["first".into(), "second".into()]).unwrap());
        let buf = rendered(SlideView::new(&slide, 1), 10, 1);
        assert!(row(&buf, 0).starts_with("second"));
    }

    #[test]
    fn emphasis_adds_modifiers() {
        let style = apply_emphasis(
            Style::default(),
            Emphasis {
                italic: true,
                accent: true,
                ..Emphasis::default()
            },
        );
        assert!(style.add_modifier.contains(Modifier::ITALIC));
        assert_eq!(style.fg, Some(ACCENT));
    }
}
