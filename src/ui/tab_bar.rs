use crate::app::state::{AppState, Tab};
use crate::ui::icons::Icon;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Tabs};

fn tab_icon(tab: Tab) -> Icon {
    match tab {
        Tab::Upcoming => Icon::Calendar,
        Tab::History => Icon::CreditCard,
        Tab::Suggestions => Icon::Star,
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|tab| {
            Line::from(vec![
                Span::styled(format!("{}:", tab.shortcut()), Theme::muted()),
                Span::raw(format!("{} {}", tab_icon(*tab).glyph(), tab.title())),
            ])
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border()),
        )
        .select(state.active_tab.index())
        .style(Theme::body())
        .highlight_style(Theme::tab_active())
        .divider(" │ ");

    frame.render_widget(tabs, area);
}
