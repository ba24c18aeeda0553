use crate::app::state::{AppState, Tab};
use crate::app::view::{ListView, LoadState};
use crate::data::model::BookingHistoryEntry;
use crate::ui::cards::{self, CardSlot};
use crate::ui::format::{format_date, format_date_range, format_price, pluralize};
use crate::ui::icons::{booking_status_badge, Icon};
use crate::ui::theme::Theme;
use crate::ui::view_state;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

const ROW_HEIGHT: u16 = 4;

/// Booking history renders as a single-column list of rows.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    view: &ListView<BookingHistoryEntry>,
) {
    let bookings = match view.state() {
        LoadState::Loading => {
            return view_state::render_loading(frame, area, Tab::History, state.spinner())
        }
        LoadState::Failure(_) => return view_state::render_failure(frame, area, Tab::History),
        LoadState::Success(bookings) if bookings.is_empty() => {
            return view_state::render_empty(frame, area, Tab::History)
        }
        LoadState::Success(bookings) => bookings,
    };

    let (header, body) = view_state::split_header(area);
    view_state::render_header(
        frame,
        header,
        Tab::History.title(),
        &pluralize(bookings.len(), "booking"),
    );

    for CardSlot { index, area } in
        cards::grid(body, bookings.len(), 1, ROW_HEIGHT, view.selected())
    {
        render_row(frame, area, state, &bookings[index], index == view.selected());
    }
}

fn render_row(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    booking: &BookingHistoryEntry,
    selected: bool,
) {
    let (icon, status_style) = booking_status_badge(booking.status);
    let marker = if selected { "▌" } else { " " };

    let lines = vec![
        Line::from(vec![
            Span::styled(marker, Theme::border_focused()),
            Span::styled(booking.destination.clone(), Theme::title()),
            Span::raw("  "),
            Span::styled(format!("{} {}", icon.glyph(), booking.status.label()), status_style),
        ]),
        Line::from(vec![
            Span::styled(marker, Theme::border_focused()),
            Span::styled(format!("{} ", Icon::Calendar.glyph()), Theme::muted()),
            Span::styled(
                format_date_range(booking.start_date, booking.end_date),
                Theme::body(),
            ),
            Span::raw("   "),
            Span::styled(format!("{} ", Icon::Users.glyph()), Theme::muted()),
            Span::styled(pluralize(booking.guests as usize, "guest"), Theme::body()),
            Span::raw("   "),
            Span::styled(format!("{} ", Icon::CreditCard.glyph()), Theme::muted()),
            Span::styled(
                format_price(&state.config.ui.currency_symbol, booking.price),
                Theme::price(),
            ),
            Span::styled(" total", Theme::muted()),
        ]),
        Line::from(vec![
            Span::styled(marker, Theme::border_focused()),
            Span::styled(
                format!("Booked on {}", format_date(booking.booking_date)),
                Theme::muted(),
            ),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Theme::border());
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
