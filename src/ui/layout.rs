use crate::deck::{Alignment, Axis, FrameSpec, Insets};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// A `width` x `height` rectangle centered in `area`, shrunk to fit.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    aligned_rect(area, width, height, Alignment::Center)
}

pub fn aligned_rect(area: Rect, width: u16, height: u16, alignment: Alignment) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let free_x = area.width - width;
    let free_y = area.height - height;
    let (dx, dy) = match alignment {
        Alignment::TopLeading => (0, 0),
        Alignment::Top => (free_x / 2, 0),
        Alignment::Leading => (0, free_y / 2),
        Alignment::Center => (free_x / 2, free_y / 2),
    };
    Rect {
        x: area.x + dx,
        y: area.y + dy,
        width,
        height,
    }
}

pub fn framed_rect(area: Rect, frame: &FrameSpec) -> Rect {
    let width = frame.max_width.unwrap_or(area.width);
    let height = frame.max_height.unwrap_or(area.height);
    aligned_rect(area, width, height, frame.alignment)
}

/// Shrinks `area` by `insets`, collapsing to an empty rectangle when the
/// insets do not fit.
pub fn inset_rect(area: Rect, insets: &Insets) -> Rect {
    let horizontal = insets.left.saturating_add(insets.right);
    let vertical = insets.top.saturating_add(insets.bottom);
    if horizontal >= area.width || vertical >= area.height {
        return Rect {
            x: area.x,
            y: area.y,
            width: 0,
            height: 0,
        };
    }
    Rect {
        x: area.x + insets.left,
        y: area.y + insets.top,
        width: area.width - horizontal,
        height: area.height - vertical,
    }
}

pub fn direction(axis: Axis) -> Direction {
    match axis {
        Axis::Vertical => Direction::Vertical,
        Axis::Horizontal => Direction::Horizontal,
    }
}

/// Equal cells for `count` children along `direction`.
pub fn split_even(area: Rect, direction: Direction, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let constraints = vec![Constraint::Ratio(1, count as u32); count];
    Layout::default()
        .direction(direction)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

/// Equal cells with a one-cell gutter between neighbours.
///
/// Returns the child cells and the gutters separately.
pub fn split_separated(area: Rect, direction: Direction, count: usize) -> (Vec<Rect>, Vec<Rect>) {
    if count == 0 {
        return (Vec::new(), Vec::new());
    }
    let mut constraints = Vec::with_capacity(count * 2 - 1);
    for i in 0..count {
        if i > 0 {
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Fill(1));
    }
    let rects = Layout::default()
        .direction(direction)
        .constraints(constraints)
        .split(area);

    let mut cells = Vec::with_capacity(count);
    let mut gutters = Vec::with_capacity(count - 1);
    for (i, rect) in rects.iter().enumerate() {
        if i % 2 == 0 {
            cells.push(*rect);
        } else {
            gutters.push(*rect);
        }
    }
    (cells, gutters)
}
