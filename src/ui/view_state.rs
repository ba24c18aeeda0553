//! Rendering shared by every async list view: the loading, failure and empty
//! states, plus the per-view copy they display.

use crate::app::state::Tab;
use crate::ui::icons::Icon;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

pub struct ViewCopy {
    pub loading: &'static str,
    pub failure: &'static str,
    pub empty_title: &'static str,
    pub empty_hint: &'static str,
}

pub fn copy(tab: Tab) -> ViewCopy {
    match tab {
        Tab::Upcoming => ViewCopy {
            loading: "Loading your upcoming trips...",
            failure: "Failed to load upcoming trips",
            empty_title: "No upcoming trips",
            empty_hint: "Start planning your next adventure!",
        },
        Tab::History => ViewCopy {
            loading: "Loading your booking history...",
            failure: "Failed to load booking history",
            empty_title: "No booking history",
            empty_hint: "Your past bookings will appear here",
        },
        Tab::Suggestions => ViewCopy {
            loading: "Finding perfect destinations for you...",
            failure: "Failed to load personalized suggestions",
            empty_title: "No suggestions yet",
            empty_hint: "Check back soon for destinations picked for you",
        },
    }
}

/// Place a block of `height` rows in the vertical middle of `area`.
fn centered(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    let y = area.y + (area.height - height) / 2;
    Rect::new(area.x, y, area.width, height)
}

pub fn render_loading(frame: &mut Frame, area: Rect, tab: Tab, spinner: &str) {
    let line = Line::from(vec![
        Span::styled(spinner.to_string(), Theme::spinner()),
        Span::raw(" "),
        Span::styled(copy(tab).loading, Theme::body()),
    ]);
    let paragraph = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(paragraph, centered(area, 1));
}

pub fn render_failure(frame: &mut Frame, area: Rect, tab: Tab) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::error_message());
    let paragraph = Paragraph::new(Line::from(Span::styled(
        format!(" {}", copy(tab).failure),
        Theme::error_message(),
    )))
    .block(block);
    let height = 3.min(area.height);
    frame.render_widget(paragraph, Rect::new(area.x, area.y, area.width, height));
}

pub fn render_empty(frame: &mut Frame, area: Rect, tab: Tab) {
    let text = copy(tab);
    let lines = vec![
        Line::from(Span::styled(Icon::Calendar.glyph(), Theme::muted())),
        Line::from(""),
        Line::from(Span::styled(text.empty_title, Theme::title())),
        Line::from(Span::styled(text.empty_hint, Theme::body())),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border());
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, centered(area, 6));
}

/// View title on the left, a caption (count or tagline) on the right.
pub fn render_header(frame: &mut Frame, area: Rect, title: &str, caption: &str) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(caption.width() as u16 + 1)])
        .split(area);
    frame.render_widget(
        Paragraph::new(Span::styled(format!(" {}", title), Theme::title())),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(caption.to_string(), Theme::muted()))
            .alignment(Alignment::Right),
        chunks[1],
    );
}

/// Split a view area into a one-row header and the card area below it.
pub fn split_header(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(area);
    (chunks[0], chunks[2])
}
