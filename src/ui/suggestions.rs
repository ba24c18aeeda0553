use crate::app::state::{AppState, Tab};
use crate::app::view::{ListView, LoadState};
use crate::data::model::Suggestion;
use crate::ui::cards::{self, CardSlot};
use crate::ui::format::truncate_to_width;
use crate::ui::icons::{category_icon, Icon};
use crate::ui::theme::Theme;
use crate::ui::view_state;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

const CARD_HEIGHT: u16 = 12;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, view: &ListView<Suggestion>) {
    let suggestions = match view.state() {
        LoadState::Loading => {
            return view_state::render_loading(frame, area, Tab::Suggestions, state.spinner())
        }
        LoadState::Failure(_) => {
            return view_state::render_failure(frame, area, Tab::Suggestions)
        }
        LoadState::Success(s) if s.is_empty() => {
            return view_state::render_empty(frame, area, Tab::Suggestions)
        }
        LoadState::Success(s) => s,
    };

    let (header, body) = view_state::split_header(area);
    view_state::render_header(
        frame,
        header,
        "Personalized Suggestions",
        "Based on your travel preferences",
    );

    let columns = cards::columns_for_width(body.width);
    for CardSlot { index, area } in
        cards::grid(body, suggestions.len(), columns, CARD_HEIGHT, view.selected())
    {
        render_card(frame, area, &suggestions[index], index == view.selected());
    }
}

fn render_card(frame: &mut Frame, area: Rect, suggestion: &Suggestion, selected: bool) {
    let icon = category_icon(&suggestion.category);
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
            format!(" {} {} ", icon.glyph(), suggestion.category),
            Theme::body(),
        ))
        .title(
            Line::from(Span::styled(
                format!(" {} {} ", Icon::Star.glyph(), suggestion.rating),
                Theme::rating(),
            ))
            .alignment(Alignment::Right),
        );

    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Destination + country
            Constraint::Min(1),    // Description
            Constraint::Length(1), // Price range
            Constraint::Length(1), // Reason
            Constraint::Length(1), // Action
        ])
        .split(inner);

    let width = inner.width as usize;
    let heading = vec![
        Line::from(Span::styled(
            format!(" {}", truncate_to_width(&suggestion.destination, width - 1)),
            Theme::title(),
        )),
        Line::from(vec![
            Span::styled(format!(" {} ", Icon::MapPin.glyph()), Theme::muted()),
            Span::styled(suggestion.country.clone(), Theme::body()),
        ]),
    ];
    frame.render_widget(Paragraph::new(heading), chunks[0]);

    frame.render_widget(
        Paragraph::new(Span::styled(suggestion.description.clone(), Theme::body()))
            .wrap(Wrap { trim: true })
            .block(Block::default().padding(Padding::horizontal(1))),
        chunks[1],
    );

    frame.render_widget(
        Paragraph::new(Span::styled(format!(" {}", suggestion.price_range), Theme::price())),
        chunks[2],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(" {}", truncate_to_width(&suggestion.reason, width - 1)),
            Theme::reason(),
        )),
        chunks[3],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            " Explore Destination ",
            if selected {
                Theme::button()
            } else {
                Theme::button_idle()
            },
        ))
        .alignment(Alignment::Center),
        chunks[4],
    );
}
