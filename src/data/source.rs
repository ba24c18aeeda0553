//! List data sources.
//!
//! Each dashboard view pulls its records from a [`ListDataSource`]. The
//! shipped implementation, [`FixtureSource`], waits out a fixed latency and
//! then serves a TOML fixture document, either embedded in the binary or read
//! from a configured directory. A networked backend would slot in behind the
//! same trait.

use crate::data::model::{BookingHistoryEntry, Suggestion, UpcomingTrip};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::borrow::Cow;
use std::marker::PhantomData;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse fixture document: {0}")]
    Parse(String),
}

/// Produces an ordered collection of records, all-or-nothing.
#[async_trait]
pub trait ListDataSource: Send + Sync {
    type Record: Send;

    async fn fetch(&self) -> Result<Vec<Self::Record>, LoadError>;
}

/// A record kind that can be served from a fixture document.
pub trait FixtureRecord: DeserializeOwned + Send + Sync + 'static {
    /// File name looked up inside the fixtures directory.
    const FILE_NAME: &'static str;
    /// Document served when no fixtures directory is configured.
    const EMBEDDED: &'static str;
}

impl FixtureRecord for UpcomingTrip {
    const FILE_NAME: &'static str = "trips.toml";
    const EMBEDDED: &'static str = include_str!("fixtures/trips.toml");
}

impl FixtureRecord for BookingHistoryEntry {
    const FILE_NAME: &'static str = "bookings.toml";
    const EMBEDDED: &'static str = include_str!("fixtures/bookings.toml");
}

impl FixtureRecord for Suggestion {
    const FILE_NAME: &'static str = "suggestions.toml";
    const EMBEDDED: &'static str = include_str!("fixtures/suggestions.toml");
}

/// Simulated data source: sleeps for `latency`, then parses its fixture.
pub struct FixtureSource<T> {
    latency: Duration,
    dir: Option<PathBuf>,
    _record: PhantomData<fn() -> T>,
}

impl<T: FixtureRecord> FixtureSource<T> {
    pub fn new(latency: Duration, dir: Option<PathBuf>) -> Self {
        Self {
            latency,
            dir,
            _record: PhantomData,
        }
    }

    async fn read_document(&self) -> Result<Cow<'static, str>, LoadError> {
        match &self.dir {
            Some(dir) => {
                let path = dir.join(T::FILE_NAME);
                match tokio::fs::read_to_string(&path).await {
                    Ok(contents) => Ok(Cow::Owned(contents)),
                    Err(source) => Err(LoadError::Read { path, source }),
                }
            }
            None => Ok(Cow::Borrowed(T::EMBEDDED)),
        }
    }
}

#[async_trait]
impl<T: FixtureRecord> ListDataSource for FixtureSource<T> {
    type Record = T;

    async fn fetch(&self) -> Result<Vec<T>, LoadError> {
        tokio::time::sleep(self.latency).await;
        let document = self.read_document().await?;
        parse_collection(&document)
    }
}

/// Parse a `[[records]]` document. A missing `records` key is an empty
/// collection.
pub fn parse_collection<T: DeserializeOwned>(document: &str) -> Result<Vec<T>, LoadError> {
    #[derive(Deserialize)]
    struct Collection<R> {
        #[serde(default = "Vec::new")]
        records: Vec<R>,
    }

    let collection: Collection<T> =
        toml::from_str(document).map_err(|e| LoadError::Parse(e.to_string()))?;
    Ok(collection.records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{BookingStatus, TripStatus};

    #[test]
    fn test_embedded_trips_keep_document_order() {
        let trips: Vec<UpcomingTrip> = parse_collection(UpcomingTrip::EMBEDDED).unwrap();
        let ids: Vec<_> = trips.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(trips[0].destination, "Alleppey, Kerala");
        assert_eq!(trips[1].status, TripStatus::Pending);
    }

    #[test]
    fn test_embedded_bookings_and_suggestions() {
        let bookings: Vec<BookingHistoryEntry> =
            parse_collection(BookingHistoryEntry::EMBEDDED).unwrap();
        assert_eq!(bookings.len(), 4);
        assert_eq!(bookings[2].status, BookingStatus::Canceled);

        let suggestions: Vec<Suggestion> = parse_collection(Suggestion::EMBEDDED).unwrap();
        assert_eq!(suggestions.len(), 6);
        assert_eq!(suggestions[0].category, "Hill Station");
        assert_eq!(suggestions[5].category, "Beach");
    }

    #[test]
    fn test_missing_records_key_is_empty() {
        let trips: Vec<UpcomingTrip> = parse_collection("").unwrap();
        assert!(trips.is_empty());
    }

    #[test]
    fn test_malformed_document_is_parse_error() {
        let result: Result<Vec<UpcomingTrip>, _> = parse_collection("[[records]]\nid = 1");
        assert!(matches!(result, Err(LoadError::Parse(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_waits_for_latency() {
        let source = FixtureSource::<UpcomingTrip>::new(Duration::from_millis(1000), None);
        let start = tokio::time::Instant::now();
        let trips = source.fetch().await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(1000));
        assert_eq!(trips.len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bookings.toml"), "").unwrap();
        let source = FixtureSource::<BookingHistoryEntry>::new(
            Duration::from_millis(10),
            Some(dir.path().to_path_buf()),
        );
        assert!(source.fetch().await.unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FixtureSource::<Suggestion>::new(
            Duration::from_millis(10),
            Some(dir.path().to_path_buf()),
        );
        match source.fetch().await {
            Err(LoadError::Read { path, .. }) => {
                assert_eq!(path, dir.path().join("suggestions.toml"));
            }
            other => panic!("expected read error, got {:?}", other.map(|v| v.len())),
        }
    }
}
