//! Glyphs used in place of the dashboard's icons.

use crate::data::model::{BookingStatus, TripStatus};
use crate::ui::theme::Theme;
use ratatui::style::Style;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Heart,
    Star,
    Compass,
    Trending,
    MapPin,
    Calendar,
    Users,
    CreditCard,
    CheckCircle,
    XCircle,
    Plane,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Heart => "♥",
            Icon::Star => "★",
            Icon::Compass => "◈",
            Icon::Trending => "↗",
            Icon::MapPin => "⌖",
            Icon::Calendar => "◷",
            Icon::Users => "☺",
            Icon::CreditCard => "¤",
            Icon::CheckCircle => "✔",
            Icon::XCircle => "✘",
            Icon::Plane => "✈",
        }
    }
}

/// Suggestion categories with a dedicated icon. Anything else gets
/// [`Icon::MapPin`].
const CATEGORY_ICONS: &[(&str, Icon)] = &[
    ("Beach", Icon::Heart),
    ("Culture", Icon::Star),
    ("Adventure", Icon::Compass),
    ("Nature", Icon::Trending),
];

pub fn category_icon(category: &str) -> Icon {
    CATEGORY_ICONS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, icon)| *icon)
        .unwrap_or(Icon::MapPin)
}

pub fn trip_status_style(status: TripStatus) -> Style {
    match status {
        TripStatus::Confirmed => Theme::positive(),
        TripStatus::Pending => Theme::neutral(),
    }
}

pub fn booking_status_badge(status: BookingStatus) -> (Icon, Style) {
    match status {
        BookingStatus::Completed => (Icon::CheckCircle, Theme::positive()),
        BookingStatus::Canceled => (Icon::XCircle, Theme::negative()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_icon_lookup() {
        assert_eq!(category_icon("Beach"), Icon::Heart);
        assert_eq!(category_icon("Culture"), Icon::Star);
        assert_eq!(category_icon("Adventure"), Icon::Compass);
        assert_eq!(category_icon("Nature"), Icon::Trending);
        assert_eq!(category_icon("Desert"), Icon::MapPin);
        assert_eq!(category_icon("Hill Station"), Icon::MapPin);
        assert_eq!(category_icon("beach"), Icon::MapPin);
    }

    #[test]
    fn test_status_styles() {
        assert_eq!(trip_status_style(TripStatus::Confirmed), Theme::positive());
        assert_eq!(trip_status_style(TripStatus::Pending), Theme::neutral());
        assert_eq!(
            booking_status_badge(BookingStatus::Completed),
            (Icon::CheckCircle, Theme::positive())
        );
        assert_eq!(
            booking_status_badge(BookingStatus::Canceled),
            (Icon::XCircle, Theme::negative())
        );
    }
}
