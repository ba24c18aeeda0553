//! Domain records served by the data sources.
//!
//! Records are read-only once fetched. Prices on trips and bookings are the
//! total cost of the stay in whole currency units.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    Confirmed,
    Pending,
}

impl TripStatus {
    pub fn label(self) -> &'static str {
        match self {
            TripStatus::Confirmed => "Confirmed",
            TripStatus::Pending => "Pending",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Completed,
    Canceled,
}

impl BookingStatus {
    pub fn label(self) -> &'static str {
        match self {
            BookingStatus::Completed => "Completed",
            BookingStatus::Canceled => "Canceled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpcomingTrip {
    pub id: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub guests: u32,
    pub price: u32,
    pub image_url: String,
    pub status: TripStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingHistoryEntry {
    pub id: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub guests: u32,
    pub price: u32,
    pub image_url: String,
    pub status: BookingStatus,
    pub booking_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: String,
    pub destination: String,
    pub country: String,
    pub description: String,
    pub rating: f32,
    pub price_range: String,
    pub image_url: String,
    /// Open set: unknown categories are displayed with the default icon.
    pub category: String,
    pub reason: String,
}
