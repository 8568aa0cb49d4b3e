// Derived views over the fetched schedule. Pure functions of the record
// list and "now"; nothing here holds state.
use crate::model::Performance;
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// Event timestamps are bucketed and displayed in the theater's zone,
/// regardless of the offset the feed happens to ship.
pub const LOCAL_ZONE: Tz = chrono_tz::Europe::Berlin;

const DATE_FORMAT_DE: &str = "%d.%m.%Y - %H:%M Uhr";

/// The current calendar date in [`LOCAL_ZONE`].
pub fn local_today() -> NaiveDate {
    Utc::now().with_timezone(&LOCAL_ZONE).date_naive()
}

/// Indices of the performances taking place on `today`, sorted ascending by
/// local time-of-day. A record belongs to a day by its date in
/// [`LOCAL_ZONE`], not by the calendar date of its source offset. Records
/// whose timestamp cannot be parsed are excluded.
pub fn today_indices(performances: &[Performance], today: NaiveDate) -> Vec<usize> {
    let mut rows: Vec<(usize, DateTime<Tz>)> = performances
        .iter()
        .enumerate()
        .filter_map(|(i, p)| p.local_start().map(|start| (i, start)))
        .filter(|(_, start)| start.date_naive() == today)
        .collect();
    rows.sort_by_key(|&(_, start)| start);
    rows.into_iter().map(|(i, _)| i).collect()
}

/// German display form of a feed timestamp, e.g. `10.05.2025 - 20:00 Uhr`.
/// Falls back to the raw string when it does not parse.
pub fn format_local(iso: &str) -> String {
    match DateTime::parse_from_rfc3339(iso) {
        Ok(dt) => dt
            .with_timezone(&LOCAL_ZONE)
            .format(DATE_FORMAT_DE)
            .to_string(),
        Err(_) => iso.to_string(),
    }
}
