use crate::session::Session;
use crate::ui::icons::Icon;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

const LOGOUT_LABEL: &str = " [L] Logout ";

/// Brand on the left; the signed-in user and the sign-out control on the right.
pub fn render(frame: &mut Frame, area: Rect, session: &Session) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let welcome = match session.current_user() {
        Some(user) => format!("{} Welcome, {}! ", Icon::Users.glyph(), user.name),
        None => String::new(),
    };
    let right_width = (welcome.width() + LOGOUT_LABEL.len()) as u16;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(right_width)])
        .split(inner);

    let brand = Line::from(vec![
        Span::styled(format!(" {} ", Icon::Plane.glyph()), Theme::brand()),
        Span::styled("TravelHub", Theme::title()),
    ]);
    frame.render_widget(Paragraph::new(brand), chunks[0]);

    let user = Line::from(vec![
        Span::styled(welcome, Theme::body()),
        Span::styled(LOGOUT_LABEL, Theme::logout()),
    ]);
    frame.render_widget(Paragraph::new(user).alignment(Alignment::Right), chunks[1]);
}
