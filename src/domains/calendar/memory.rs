//! In-memory calendar store.
//!
//! Backs tests and embedded use; state lives behind an `RwLock` and is
//! gone with the process.

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::error::CalendarError;
use super::store::{
    CalendarEvent, CalendarInfo, CalendarKind, CalendarStore, EventDraft, resolve_calendar,
};
use crate::core::access::AccessStatus;

/// Calendar store holding everything in process memory.
pub struct MemoryCalendarStore {
    inner: RwLock<Inner>,
}

struct Inner {
    calendars: Vec<CalendarInfo>,
    events: Vec<CalendarEvent>,
}

impl MemoryCalendarStore {
    /// Create a store with a single default local calendar named "Personal".
    pub fn new() -> Self {
        Self::with_calendars(vec![CalendarInfo {
            name: "Personal".to_string(),
            kind: CalendarKind::Local,
            default: true,
        }])
    }

    /// Create a store with the given calendars and no events.
    pub fn with_calendars(calendars: Vec<CalendarInfo>) -> Self {
        Self {
            inner: RwLock::new(Inner {
                calendars,
                events: Vec::new(),
            }),
        }
    }

    /// Insert an event directly, bypassing draft resolution.
    pub fn insert_event(&self, event: CalendarEvent) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .events
            .push(event);
    }

    /// Number of stored events.
    pub fn event_count(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .events
            .len()
    }
}

impl Default for MemoryCalendarStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CalendarStore for MemoryCalendarStore {
    async fn request_access(&self) -> AccessStatus {
        AccessStatus::Granted
    }

    async fn events_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        calendar: Option<&str>,
    ) -> Result<Vec<CalendarEvent>, CalendarError> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(inner
            .events
            .iter()
            .filter(|e| e.overlaps(start, end))
            .filter(|e| calendar.map_or(true, |name| e.calendar == name))
            .cloned()
            .collect())
    }

    async fn create_event(&self, draft: EventDraft) -> Result<CalendarEvent, CalendarError> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let calendar = resolve_calendar(&inner.calendars, draft.calendar.as_deref())?;
        let event = CalendarEvent {
            title: draft.title,
            start: draft.start,
            end: draft.end,
            calendar,
            all_day: draft.all_day,
            location: draft.location,
            notes: draft.notes,
        };
        inner.events.push(event.clone());
        Ok(event)
    }

    async fn calendars(&self) -> Result<Vec<CalendarInfo>, CalendarError> {
        Ok(self
            .inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .calendars
            .clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn draft(title: &str, calendar: Option<&str>) -> EventDraft {
        EventDraft {
            title: title.to_string(),
            start: Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap(),
            calendar: calendar.map(str::to_string),
            all_day: false,
            location: None,
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let store = MemoryCalendarStore::new();
        store.create_event(draft("Standup", None)).await.unwrap();

        let window_start = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
        let window_end = Utc.with_ymd_and_hms(2026, 3, 2, 0, 0, 0).unwrap();
        let events = store
            .events_between(window_start, window_end, None)
            .await
            .unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Standup");
        assert_eq!(events[0].calendar, "Personal");
    }

    #[tokio::test]
    async fn test_unknown_calendar_falls_back_to_default() {
        let store = MemoryCalendarStore::new();
        let event = store
            .create_event(draft("Review", Some("Nonexistent")))
            .await
            .unwrap();
        assert_eq!(event.calendar, "Personal");
    }

    #[tokio::test]
    async fn test_filter_by_calendar_name() {
        let store = MemoryCalendarStore::with_calendars(vec![
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
        ]);
        store.create_event(draft("Home", None)).await.unwrap();
        store
            .create_event(draft("Office", Some("Work")))
            .await
            .unwrap();

        let window_start = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
        let window_end = Utc.with_ymd_and_hms(2026, 3, 2, 0, 0, 0).unwrap();
        let events = store
            .events_between(window_start, window_end, Some("Work"))
            .await
            .unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Office");
    }

    #[tokio::test]
    async fn test_window_excludes_outside_events() {
        let store = MemoryCalendarStore::new();
        store.create_event(draft("Inside", None)).await.unwrap();

        let window_start = Utc.with_ymd_and_hms(2026, 3, 2, 0, 0, 0).unwrap();
        let window_end = Utc.with_ymd_and_hms(2026, 3, 3, 0, 0, 0).unwrap();
        let events = store
            .events_between(window_start, window_end, None)
            .await
            .unwrap();
        assert!(events.is_empty());
    }
}
