use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let text = format!(" {} ", state.status_line());
    let tab = format!(" [{}] ", state.active_tab.title().to_uppercase());

    // Pad to fill remaining space
    let remaining = (area.width as usize).saturating_sub(text.width() + tab.width());
    let line = Line::from(vec![
        Span::styled(text, Theme::status_bar()),
        Span::styled(" ".repeat(remaining), Theme::status_bar()),
        Span::styled(tab, Style::default().fg(Theme::ACCENT).bg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
