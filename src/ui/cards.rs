//! Card grid placement.
//!
//! Cards flow left to right, top to bottom, in 1 to 3 columns depending on
//! the available width. Only the rows that fit are placed, scrolled so the
//! selected card stays visible.

use ratatui::layout::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSlot {
    pub index: usize,
    pub area: Rect,
}

pub fn columns_for_width(width: u16) -> usize {
    if width >= 120 {
        3
    } else if width >= 80 {
        2
    } else {
        1
    }
}

pub fn grid(
    area: Rect,
    count: usize,
    columns: usize,
    card_height: u16,
    selected: usize,
) -> Vec<CardSlot> {
    if count == 0 || area.width == 0 || area.height == 0 || card_height == 0 {
        return Vec::new();
    }
    let columns = columns.max(1);
    let visible_rows = ((area.height / card_height) as usize).max(1);
    let selected_row = selected.min(count - 1) / columns;
    let first_row = (selected_row + 1).saturating_sub(visible_rows);

    let col_width = area.width / columns as u16;
    let mut slots = Vec::new();
    for row in first_row..first_row + visible_rows {
        let y = area.y + ((row - first_row) as u16) * card_height;
        let height = card_height.min(area.bottom().saturating_sub(y));
        if height == 0 {
            break;
        }
        for col in 0..columns {
            let index = row * columns + col;
            if index >= count {
                return slots;
            }
            let x = area.x + col as u16 * col_width;
            let width = if col + 1 == columns {
                area.right() - x
            } else {
                col_width
            };
            slots.push(CardSlot {
                index,
                area: Rect::new(x, y, width, height),
            });
        }
    }
    slots
}
