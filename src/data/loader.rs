//! Fetch task manager.
//!
//! Mounting a view spawns one background fetch for that view's data source.
//! The task posts its result back to the event loop tagged with the mount id.
//! Unmounting aborts the task so a dead view never receives data.

use crate::app::event::{AppEvent, LoadOutcome, MountId};
use crate::app::state::Tab;
use crate::config::DataConfig;
use crate::data::model::{BookingHistoryEntry, Suggestion, UpcomingTrip};
use crate::data::source::{FixtureSource, ListDataSource, LoadError};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// One data source per dashboard view.
#[derive(Clone)]
pub struct Sources {
    pub trips: Arc<dyn ListDataSource<Record = UpcomingTrip>>,
    pub bookings: Arc<dyn ListDataSource<Record = BookingHistoryEntry>>,
    pub suggestions: Arc<dyn ListDataSource<Record = Suggestion>>,
}

impl Sources {
    pub fn from_config(config: &DataConfig) -> Self {
        let latency = Duration::from_millis(config.latency_ms);
        let dir = config.fixtures_path();
        Self {
            trips: Arc::new(FixtureSource::<UpcomingTrip>::new(latency, dir.clone())),
            bookings: Arc::new(FixtureSource::<BookingHistoryEntry>::new(latency, dir.clone())),
            suggestions: Arc::new(FixtureSource::<Suggestion>::new(latency, dir)),
        }
    }
}

struct InFlight {
    tab: Tab,
    mount_id: MountId,
    handle: JoinHandle<()>,
}

/// Owns the fetch task of the currently mounted view.
pub struct FetchManager {
    sources: Sources,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    in_flight: Option<InFlight>,
}

impl FetchManager {
    pub fn new(sources: Sources, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            sources,
            event_tx,
            in_flight: None,
        }
    }

    /// Start the fetch for a freshly mounted view, cancelling whatever the
    /// previous view still had in flight.
    pub fn mount(&mut self, tab: Tab, mount_id: MountId) {
        self.unmount();
        info!(tab = tab.title(), mount_id, "mounting view");

        let tx = self.event_tx.clone();
        let handle = match tab {
            Tab::Upcoming => {
                spawn_fetch(self.sources.trips.clone(), mount_id, tx, LoadOutcome::Trips)
            }
            Tab::History => {
                spawn_fetch(self.sources.bookings.clone(), mount_id, tx, LoadOutcome::Bookings)
            }
            Tab::Suggestions => spawn_fetch(
                self.sources.suggestions.clone(),
                mount_id,
                tx,
                LoadOutcome::Suggestions,
            ),
        };
        self.in_flight = Some(InFlight {
            tab,
            mount_id,
            handle,
        });
    }

    /// Abort the current fetch, if it has not finished yet.
    pub fn unmount(&mut self) {
        if let Some(flight) = self.in_flight.take() {
            if !flight.handle.is_finished() {
                debug!(
                    tab = flight.tab.title(),
                    mount_id = flight.mount_id,
                    "cancelling in-flight fetch"
                );
                flight.handle.abort();
            }
        }
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight
            .as_ref()
            .map(|f| !f.handle.is_finished())
            .unwrap_or(false)
    }
}

impl Drop for FetchManager {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn spawn_fetch<T: Send + 'static>(
    source: Arc<dyn ListDataSource<Record = T>>,
    mount_id: MountId,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    wrap: fn(Result<Vec<T>, LoadError>) -> LoadOutcome,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let result = source.fetch().await;
        match &result {
            Ok(records) => debug!(mount_id, count = records.len(), "fetch resolved"),
            Err(e) => debug!(mount_id, error = %e, "fetch failed"),
        }
        let _ = event_tx.send(AppEvent::Loaded {
            mount_id,
            outcome: wrap(result),
        });
    })
}
