use crate::model::schedule::LOCAL_ZONE;
use chrono::DateTime;
use chrono_tz::Tz;
use serde::Deserialize;

/// One scheduled event as returned by the remote feed.
///
/// Field names follow the wire format; the record is an immutable value once
/// fetched. The feed carries no identity, so no uniqueness is enforced.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Performance {
    /// ISO-8601 timestamp including the source offset, e.g.
    /// `2025-05-10T20:00:00+02:00`.
    pub date: String,
    pub theatre_name: String,
    pub title: String,
    #[serde(default)]
    pub subtitle1: Option<String>,
    #[serde(default)]
    pub subtitle2: Option<String>,
    pub location: String,
    pub genre: String,
    #[serde(default)]
    pub descr_uri: Option<String>,
    #[serde(default)]
    pub tickets_uri: Option<String>,
}

impl Performance {
    /// Start time converted to the display zone. `None` when the feed sent
    /// something that is not a valid offset timestamp.
    pub fn local_start(&self) -> Option<DateTime<Tz>> {
        DateTime::parse_from_rfc3339(&self.date)
            .ok()
            .map(|dt| dt.with_timezone(&LOCAL_ZONE))
    }

    /// The detail page link. The feed ships `descr_uri` without a scheme.
    pub fn details_url(&self) -> Option<String> {
        self.descr_uri.as_ref().map(|uri| format!("https://{}", uri))
    }
}
