//! Async list view lifecycle.
//!
//! A view starts in [`LoadState::Loading`] when mounted and resolves exactly
//! once, to either `Success` or `Failure`. Results for another mount, or for
//! a view that already resolved, are rejected.

use crate::app::event::{LoadOutcome, MountId};
use crate::app::state::Tab;
use crate::data::model::{BookingHistoryEntry, Suggestion, UpcomingTrip};
use crate::data::source::LoadError;

#[derive(Debug)]
pub enum LoadState<T> {
    Loading,
    Success(Vec<T>),
    Failure(LoadError),
}

#[derive(Debug)]
pub struct ListView<T> {
    mount_id: MountId,
    state: LoadState<T>,
    selected: usize,
}

impl<T> ListView<T> {
    pub fn mount(mount_id: MountId) -> Self {
        Self {
            mount_id,
            state: LoadState::Loading,
            selected: 0,
        }
    }

    pub fn mount_id(&self) -> MountId {
        self.mount_id
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    /// Loaded records; empty while loading or after a failure.
    pub fn records(&self) -> &[T] {
        match &self.state {
            LoadState::Success(records) => records,
            _ => &[],
        }
    }

    /// Apply a fetch result. Returns `false` and leaves the view untouched
    /// when the result belongs to another mount or the view already resolved.
    pub fn resolve(&mut self, mount_id: MountId, result: Result<Vec<T>, LoadError>) -> bool {
        if mount_id != self.mount_id || !self.is_loading() {
            return false;
        }
        self.state = match result {
            Ok(records) => LoadState::Success(records),
            Err(e) => LoadState::Failure(e),
        };
        self.selected = 0;
        true
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_record(&self) -> Option<&T> {
        self.records().get(self.selected)
    }

    pub fn select_next(&mut self) {
        let len = self.records().len();
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

/// The single mounted view, typed by tab.
#[derive(Debug)]
pub enum ActiveView {
    Upcoming(ListView<UpcomingTrip>),
    History(ListView<BookingHistoryEntry>),
    Suggestions(ListView<Suggestion>),
}

impl ActiveView {
    pub fn mount(tab: Tab, mount_id: MountId) -> Self {
        match tab {
            Tab::Upcoming => ActiveView::Upcoming(ListView::mount(mount_id)),
            Tab::History => ActiveView::History(ListView::mount(mount_id)),
            Tab::Suggestions => ActiveView::Suggestions(ListView::mount(mount_id)),
        }
    }

    pub fn tab(&self) -> Tab {
        match self {
            ActiveView::Upcoming(_) => Tab::Upcoming,
            ActiveView::History(_) => Tab::History,
            ActiveView::Suggestions(_) => Tab::Suggestions,
        }
    }

    pub fn mount_id(&self) -> MountId {
        match self {
            ActiveView::Upcoming(v) => v.mount_id(),
            ActiveView::History(v) => v.mount_id(),
            ActiveView::Suggestions(v) => v.mount_id(),
        }
    }

    pub fn is_loading(&self) -> bool {
        match self {
            ActiveView::Upcoming(v) => v.is_loading(),
            ActiveView::History(v) => v.is_loading(),
            ActiveView::Suggestions(v) => v.is_loading(),
        }
    }

    /// The load error, if this view failed.
    pub fn failure(&self) -> Option<&LoadError> {
        match self {
            ActiveView::Upcoming(v) => failure_of(v),
            ActiveView::History(v) => failure_of(v),
            ActiveView::Suggestions(v) => failure_of(v),
        }
    }

    /// Route a fetch outcome to the view. An outcome for a different
    /// collection is rejected like a stale mount id.
    pub fn apply(&mut self, mount_id: MountId, outcome: LoadOutcome) -> bool {
        match (self, outcome) {
            (ActiveView::Upcoming(v), LoadOutcome::Trips(result)) => v.resolve(mount_id, result),
            (ActiveView::History(v), LoadOutcome::Bookings(result)) => v.resolve(mount_id, result),
            (ActiveView::Suggestions(v), LoadOutcome::Suggestions(result)) => {
                v.resolve(mount_id, result)
            }
            _ => false,
        }
    }

    pub fn select_next(&mut self) {
        match self {
            ActiveView::Upcoming(v) => v.select_next(),
            ActiveView::History(v) => v.select_next(),
            ActiveView::Suggestions(v) => v.select_next(),
        }
    }

    pub fn select_prev(&mut self) {
        match self {
            ActiveView::Upcoming(v) => v.select_prev(),
            ActiveView::History(v) => v.select_prev(),
            ActiveView::Suggestions(v) => v.select_prev(),
        }
    }
}

fn failure_of<T>(view: &ListView<T>) -> Option<&LoadError> {
    match view.state() {
        LoadState::Failure(e) => Some(e),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::source::{parse_collection, FixtureRecord};

    fn trips() -> Vec<UpcomingTrip> {
        parse_collection(UpcomingTrip::EMBEDDED).unwrap()
    }

    #[test]
    fn test_mount_starts_loading_without_records() {
        let view: ListView<UpcomingTrip> = ListView::mount(3);
        assert!(view.is_loading());
        assert!(view.records().is_empty());
        assert!(view.selected_record().is_none());
    }

    #[test]
    fn test_success_keeps_records_in_order() {
        let mut view = ListView::mount(1);
        let expected = trips();
        assert!(view.resolve(1, Ok(expected.clone())));
        assert_eq!(view.records(), expected.as_slice());
        assert!(!view.is_loading());
    }

    #[test]
    fn test_failure_state() {
        let mut view: ListView<Suggestion> = ListView::mount(1);
        assert!(view.resolve(1, Err(LoadError::Parse("bad".into()))));
        assert!(matches!(view.state(), LoadState::Failure(_)));
        assert!(view.records().is_empty());
    }

    #[test]
    fn test_stale_mount_is_rejected() {
        let mut view: ListView<UpcomingTrip> = ListView::mount(2);
        assert!(!view.resolve(1, Ok(trips())));
        assert!(view.is_loading());
    }

    #[test]
    fn test_resolved_view_never_reloads() {
        let mut view = ListView::mount(1);
        assert!(view.resolve(1, Ok(trips())));
        assert!(!view.resolve(1, Err(LoadError::Parse("late".into()))));
        assert_eq!(view.records().len(), 3);
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut view = ListView::mount(1);
        view.resolve(1, Ok(trips()));
        view.select_prev();
        assert_eq!(view.selected(), 0);
        for _ in 0..10 {
            view.select_next();
        }
        assert_eq!(view.selected(), 2);
        assert_eq!(view.selected_record().map(|t| t.id.as_str()), Some("3"));
    }

    #[test]
    fn test_active_view_rejects_other_collection() {
        let mut view = ActiveView::mount(Tab::History, 4);
        assert!(!view.apply(4, LoadOutcome::Trips(Ok(trips()))));
        assert!(view.is_loading());
        assert_eq!(view.tab(), Tab::History);
    }

    #[test]
    fn test_active_view_failure_accessor() {
        let mut view = ActiveView::mount(Tab::Suggestions, 1);
        assert!(view.failure().is_none());
        view.apply(1, LoadOutcome::Suggestions(Err(LoadError::Parse("x".into()))));
        assert!(view.failure().is_some());
    }
}
