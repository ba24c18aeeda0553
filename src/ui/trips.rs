use crate::app::state::{AppState, Tab};
use crate::app::view::{ListView, LoadState};
use crate::data::model::UpcomingTrip;
use crate::ui::cards::{self, CardSlot};
use crate::ui::format::{format_date_range, format_price, pluralize, truncate_to_width};
use crate::ui::icons::{trip_status_style, Icon};
use crate::ui::theme::Theme;
use crate::ui::view_state;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

const CARD_HEIGHT: u16 = 7;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, view: &ListView<UpcomingTrip>) {
    let trips = match view.state() {
        LoadState::Loading => {
            return view_state::render_loading(frame, area, Tab::Upcoming, state.spinner())
        }
        LoadState::Failure(_) => return view_state::render_failure(frame, area, Tab::Upcoming),
        LoadState::Success(trips) if trips.is_empty() => {
            return view_state::render_empty(frame, area, Tab::Upcoming)
        }
        LoadState::Success(trips) => trips,
    };

    let (header, body) = view_state::split_header(area);
    view_state::render_header(
        frame,
        header,
        Tab::Upcoming.title(),
        &pluralize(trips.len(), "trip"),
    );

    let columns = cards::columns_for_width(body.width);
    for CardSlot { index, area } in
        cards::grid(body, trips.len(), columns, CARD_HEIGHT, view.selected())
    {
        let trip = &trips[index];
        render_card(frame, area, state, trip, index == view.selected());
    }
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    trip: &UpcomingTrip,
    selected: bool,
) {
    let badge = format!(" {} ", trip.status.label());
    let title_room = (area.width as usize).saturating_sub(badge.len() + 6);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if selected {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(if selected {
            Theme::border_focused()
        } else {
            Theme::border()
        })
        .title(Span::styled(
            format!(" {} ", truncate_to_width(&trip.destination, title_room)),
            Theme::title(),
        ))
        .title(
            Line::from(Span::styled(badge, trip_status_style(trip.status)))
                .alignment(Alignment::Right),
        );

    let price = format_price(&state.config.ui.currency_symbol, trip.price);
    let lines = vec![
        Line::from(vec![
            Span::styled(format!(" {} ", Icon::CreditCard.glyph()), Theme::muted()),
            Span::styled(price, Theme::price()),
            Span::styled(" total", Theme::muted()),
        ]),
        Line::from(vec![
            Span::styled(format!(" {} ", Icon::Calendar.glyph()), Theme::muted()),
            Span::styled(format_date_range(trip.start_date, trip.end_date), Theme::body()),
        ]),
        Line::from(vec![
            Span::styled(format!(" {} ", Icon::Users.glyph()), Theme::muted()),
            Span::styled(pluralize(trip.guests as usize, "guest"), Theme::body()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            " View Details ",
            if selected {
                Theme::button()
            } else {
                Theme::button_idle()
            },
        ))
        .alignment(Alignment::Center),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
