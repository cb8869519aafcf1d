//! Calendar capability interface and its data types.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::CalendarError;
use crate::core::access::AccessStatus;

/// Where a calendar lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarKind {
    Local,
    CalDav,
    Other,
}

impl CalendarKind {
    /// Short label used in tool output.
    pub fn label(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::CalDav => "CalDAV",
            Self::Other => "other",
        }
    }
}

/// A calendar known to the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarInfo {
    pub name: String,
    pub kind: CalendarKind,
    /// Whether new events land here when no calendar is named.
    #[serde(default)]
    pub default: bool,
}

/// A stored event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Name of the calendar the event belongs to.
    pub calendar: String,
    #[serde(default)]
    pub all_day: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CalendarEvent {
    /// Whether this event intersects the half-open window `[start, end)`.
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.start < end && self.end > start
    }
}

/// Everything needed to create an event.
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Target calendar name; `None` targets the default calendar.
    pub calendar: Option<String>,
    pub all_day: bool,
    pub location: Option<String>,
    pub notes: Option<String>,
}

/// Calendar capability.
///
/// Handlers only ever see this trait; the store behind it may be a JSON
/// file, an in-memory table, or a platform calendar service.
#[async_trait]
pub trait CalendarStore: Send + Sync {
    /// Probe whether the store is usable at all.
    async fn request_access(&self) -> AccessStatus;

    /// Events overlapping the half-open window `[start, end)`, optionally
    /// restricted to one calendar by exact name.
    async fn events_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        calendar: Option<&str>,
    ) -> Result<Vec<CalendarEvent>, CalendarError>;

    /// Persist a new event and return it as stored.
    async fn create_event(&self, draft: EventDraft) -> Result<CalendarEvent, CalendarError>;

    /// All calendars known to the store.
    async fn calendars(&self) -> Result<Vec<CalendarInfo>, CalendarError>;
}

/// Resolve a requested calendar name against the known calendars.
///
/// An unknown or absent name resolves to the default calendar; when no
/// calendar is flagged default, the first one stands in.
pub(crate) fn resolve_calendar(
    calendars: &[CalendarInfo],
    requested: Option<&str>,
) -> Result<String, CalendarError> {
    if let Some(name) = requested {
        if let Some(calendar) = calendars.iter().find(|c| c.name == name) {
            return Ok(calendar.name.clone());
        }
    }
    calendars
        .iter()
        .find(|c| c.default)
        .or_else(|| calendars.first())
        .map(|c| c.name.clone())
        .ok_or(CalendarError::NoDefaultCalendar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn event(start_hour: u32, end_hour: u32) -> CalendarEvent {
        CalendarEvent {
            title: "t".to_string(),
            start: Utc.with_ymd_and_hms(2026, 3, 1, start_hour, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2026, 3, 1, end_hour, 0, 0).unwrap(),
            calendar: "Personal".to_string(),
            all_day: false,
            location: None,
            notes: None,
        }
    }

    #[test]
    fn test_overlap_inside_window() {
        let window_start = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
        let window_end = Utc.with_ymd_and_hms(2026, 3, 1, 17, 0, 0).unwrap();
        assert!(event(10, 11).overlaps(window_start, window_end));
        assert!(event(8, 18).overlaps(window_start, window_end));
    }

    #[test]
    fn test_overlap_excludes_touching_edges() {
        let window_start = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
        let window_end = Utc.with_ymd_and_hms(2026, 3, 1, 17, 0, 0).unwrap();
        // Ends exactly at the window start.
        assert!(!event(7, 9).overlaps(window_start, window_end));
        // Starts exactly at the window end.
        assert!(!event(17, 18).overlaps(window_start, window_end));
    }

    #[test]
    fn test_resolve_calendar_prefers_exact_match() {
        let calendars = vec![
            CalendarInfo {
                name: "Personal".to_string(),
                kind: CalendarKind::Local,
                default: true,
            },
            CalendarInfo {
                name: "Work".to_string(),
                kind: CalendarKind::CalDav,
                default: false,
            },
        ];
        assert_eq!(resolve_calendar(&calendars, Some("Work")).unwrap(), "Work");
    }

    #[test]
    fn test_resolve_calendar_unknown_falls_back_to_default() {
        let calendars = vec![
            CalendarInfo {
                name: "Personal".to_string(),
                kind: CalendarKind::Local,
                default: true,
            },
            CalendarInfo {
                name: "Work".to_string(),
                kind: CalendarKind::CalDav,
                default: false,
            },
        ];
        assert_eq!(
            resolve_calendar(&calendars, Some("Nope")).unwrap(),
            "Personal"
        );
        assert_eq!(resolve_calendar(&calendars, None).unwrap(), "Personal");
    }

    #[test]
    fn test_resolve_calendar_empty_store_fails() {
        let err = resolve_calendar(&[], None).unwrap_err();
        assert!(matches!(err, CalendarError::NoDefaultCalendar));
    }
}
