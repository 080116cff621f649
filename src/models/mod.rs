use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Display address of a property as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub display: String,
}

/// A rental property with its reservations attached.
///
/// The API does not nest reservations under properties; the fetcher fills
/// `reservations` in a second pass, so the field defaults to empty on decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub address: Address,
    #[serde(default)]
    pub reservations: Vec<Reservation>,
}

/// Guest counts nested under a reservation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guests {
    pub total: u32,
}

/// A booking as the API reports it.
///
/// Arrival and departure stay textual here; the scheduler parses them with a
/// fixed format and treats a mismatch as a fatal input error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub arrival_date: String,
    pub departure_date: String,
    pub guests: Guests,
    pub status: String,
}

/// One check-in on the schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub address: String,
    pub guests_count: u32,
    pub departure_date: NaiveDate,
    pub status: String,
}

impl ScheduleEntry {
    /// Whether `today` falls within the stay starting on `check_in`,
    /// both bounds inclusive. Used by renderers to mark occupied rows.
    pub fn occupied_on(&self, check_in: NaiveDate, today: NaiveDate) -> bool {
        check_in <= today && today <= self.departure_date
    }
}

/// Check-in schedule: arrival date -> entries for that day
pub type Schedule = BTreeMap<NaiveDate, Vec<ScheduleEntry>>;
