use crate::models::{Property, Schedule, ScheduleEntry};
use chrono::{DateTime, NaiveDate};
use thiserror::Error;
use tracing::debug;

/// A reservation whose status contains any of these substrings is skipped.
/// Substring match, not exact, so variants like "cancelled_by_guest" are
/// caught too. Case-sensitive.
const EXCLUDED_STATUS_FRAGMENTS: [&str; 4] = ["cancel", "void", "denied", "payment_request_sent"];

/// Timestamp format the API uses for arrival and departure
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Fatal scheduling failures. Unlike fetch hiccups, corrupt input has no
/// partial-success mode: a malformed timestamp aborts the whole batch.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("timestamp {value:?} is not in YYYY-MM-DDTHH:MM:SS±HH:MM form")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

fn is_actionable(status: &str) -> bool {
    EXCLUDED_STATUS_FRAGMENTS
        .iter()
        .all(|fragment| !status.contains(fragment))
}

fn parse_calendar_date(value: &str) -> Result<NaiveDate, ScheduleError> {
    DateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .map(|dt| dt.date_naive())
        .map_err(|source| ScheduleError::InvalidTimestamp {
            value: value.to_string(),
            source,
        })
}

/// Build the check-in schedule from fetched property data.
///
/// Per property: keep actionable reservations, sort them ascending by
/// arrival (stable, so equal arrivals keep their input order), then bucket
/// one entry per reservation under its arrival calendar date. Sorting
/// compares the raw arrival strings, so ties are byte-equal timestamps and
/// no extra tie-break key is introduced.
pub fn build_checkin_schedule(properties: &[Property]) -> Result<Schedule, ScheduleError> {
    let mut schedule = Schedule::new();

    for property in properties {
        let mut actionable: Vec<_> = property
            .reservations
            .iter()
            .filter(|reservation| is_actionable(&reservation.status))
            .collect();
        actionable.sort_by(|a, b| a.arrival_date.cmp(&b.arrival_date));

        debug!(
            "property {}: {} of {} reservation(s) actionable",
            property.id,
            actionable.len(),
            property.reservations.len()
        );

        for reservation in actionable {
            let arrival = parse_calendar_date(&reservation.arrival_date)?;
            let departure = parse_calendar_date(&reservation.departure_date)?;

            schedule.entry(arrival).or_default().push(ScheduleEntry {
                address: property.address.display.clone(),
                guests_count: reservation.guests.total,
                departure_date: departure,
                status: reservation.status.clone(),
            });
        }
    }

    Ok(schedule)
}
