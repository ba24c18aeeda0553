use crate::data::model::{BookingHistoryEntry, Suggestion, UpcomingTrip};
use crate::data::source::LoadError;
use crossterm::event::Event as CrosstermEvent;

/// Identifies one mounting of a view. Fetch results carry the id of the
/// mount that requested them so stale results can be dropped.
pub type MountId = u64;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// A view's fetch task resolved
    Loaded {
        mount_id: MountId,
        outcome: LoadOutcome,
    },

    /// Tick for UI refresh
    Tick,
}

/// Result of one fetch, tagged with the collection it belongs to.
#[derive(Debug)]
pub enum LoadOutcome {
    Trips(Result<Vec<UpcomingTrip>, LoadError>),
    Bookings(Result<Vec<BookingHistoryEntry>, LoadError>),
    Suggestions(Result<Vec<Suggestion>, LoadError>),
}
