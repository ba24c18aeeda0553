use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub const ACCENT: Color = Color::Cyan;
    pub const ACCENT_ALT: Color = Color::Magenta;
    pub const TEXT_PRIMARY: Color = Color::White;
    pub const TEXT_MUTED: Color = Color::DarkGray;

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    pub fn title() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).add_modifier(Modifier::BOLD)
    }

    pub fn brand() -> Style {
        Style::default().fg(Self::ACCENT_ALT).add_modifier(Modifier::BOLD)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn body() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn price() -> Style {
        Style::default().fg(Color::LightBlue).add_modifier(Modifier::BOLD)
    }

    pub fn positive() -> Style {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    }

    pub fn neutral() -> Style {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }

    pub fn negative() -> Style {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    }

    pub fn error_message() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn spinner() -> Style {
        Style::default().fg(Color::LightBlue)
    }

    pub fn rating() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn reason() -> Style {
        Style::default().fg(Color::LightBlue).add_modifier(Modifier::ITALIC)
    }

    pub fn button() -> Style {
        Style::default().fg(Color::Black).bg(Self::ACCENT)
    }

    pub fn button_idle() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    pub fn logout() -> Style {
        Style::default().fg(Color::White).bg(Color::Red)
    }

    pub fn tab_active() -> Style {
        Style::default().fg(Self::ACCENT).add_modifier(Modifier::BOLD)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }
}
