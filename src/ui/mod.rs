mod cards;
mod format;
mod header;
mod history;
mod icons;
mod layout;
mod status_bar;
mod suggestions;
mod tab_bar;
mod theme;
mod trips;
mod view_state;

use crate::app::state::AppState;
use crate::app::view::ActiveView;
use crate::session::Session;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState, session: &Session) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    header::render(frame, app_layout.header, session);
    tab_bar::render(frame, app_layout.tab_bar, state);
    match &state.view {
        ActiveView::Upcoming(view) => trips::render(frame, app_layout.content, state, view),
        ActiveView::History(view) => history::render(frame, app_layout.content, state, view),
        ActiveView::Suggestions(view) => {
            suggestions::render(frame, app_layout.content, state, view)
        }
    }
    status_bar::render(frame, app_layout.status_bar, state);
}
