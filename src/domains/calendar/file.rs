//! JSON-file-backed calendar store.
//!
//! The whole store is one JSON document, read on every query and
//! rewritten on every mutation. A missing file behaves as a fresh store
//! with one default calendar; the document is created on first write.
//! Loads and saves run behind a mutex so a read-modify-write never
//! interleaves.

use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::CalendarError;
use super::store::{
    CalendarEvent, CalendarInfo, CalendarKind, CalendarStore, EventDraft, resolve_calendar,
};
use crate::core::access::AccessStatus;

/// On-disk document layout.
#[derive(Debug, Serialize, Deserialize)]
struct CalendarDocument {
    #[serde(default)]
    calendars: Vec<CalendarInfo>,
    #[serde(default)]
    events: Vec<CalendarEvent>,
}

/// Calendar store persisted as a single JSON file.
pub struct FileCalendarStore {
    path: PathBuf,
    io: Mutex<()>,
}

impl FileCalendarStore {
    /// Create a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            io: Mutex::new(()),
        }
    }

    fn load(&self) -> Result<CalendarDocument, CalendarError> {
        if !self.path.exists() {
            return Ok(CalendarDocument {
                calendars: vec![CalendarInfo {
                    name: "Personal".to_string(),
                    kind: CalendarKind::Local,
                    default: true,
                }],
                events: Vec::new(),
            });
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn save(&self, document: &CalendarDocument) -> Result<(), CalendarError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(document)?)?;
        Ok(())
    }
}

#[async_trait]
impl CalendarStore for FileCalendarStore {
    async fn request_access(&self) -> AccessStatus {
        AccessStatus::probe_path(&self.path)
    }

    async fn events_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        calendar: Option<&str>,
    ) -> Result<Vec<CalendarEvent>, CalendarError> {
        let _guard = self.io.lock().unwrap_or_else(PoisonError::into_inner);
        let document = self.load()?;
        Ok(document
            .events
            .into_iter()
            .filter(|e| e.overlaps(start, end))
            .filter(|e| calendar.map_or(true, |name| e.calendar == name))
            .collect())
    }

    async fn create_event(&self, draft: EventDraft) -> Result<CalendarEvent, CalendarError> {
        let _guard = self.io.lock().unwrap_or_else(PoisonError::into_inner);
        let mut document = self.load()?;
        let calendar = resolve_calendar(&document.calendars, draft.calendar.as_deref())?;
        let event = CalendarEvent {
            title: draft.title,
            start: draft.start,
            end: draft.end,
            calendar,
            all_day: draft.all_day,
            location: draft.location,
            notes: draft.notes,
        };
        document.events.push(event.clone());
        self.save(&document)?;
        debug!("saved event '{}' to {}", event.title, self.path.display());
        Ok(event)
    }

    async fn calendars(&self) -> Result<Vec<CalendarInfo>, CalendarError> {
        let _guard = self.io.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(self.load()?.calendars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn draft(title: &str) -> EventDraft {
        EventDraft {
            title: title.to_string(),
            start: Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap(),
            calendar: None,
            all_day: false,
            location: None,
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_missing_file_has_default_calendar() {
        let dir = TempDir::new().unwrap();
        let store = FileCalendarStore::new(dir.path().join("calendar.json"));
        let calendars = store.calendars().await.unwrap();
        assert_eq!(calendars.len(), 1);
        assert_eq!(calendars[0].name, "Personal");
        assert!(calendars[0].default);
    }

    #[tokio::test]
    async fn test_created_event_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("calendar.json");

        let store = FileCalendarStore::new(&path);
        store.create_event(draft("Dentist")).await.unwrap();

        let reopened = FileCalendarStore::new(&path);
        let window_start = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
        let window_end = Utc.with_ymd_and_hms(2026, 3, 2, 0, 0, 0).unwrap();
        let events = reopened
            .events_between(window_start, window_end, None)
            .await
            .unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Dentist");
    }

    #[tokio::test]
    async fn test_first_write_creates_parent_dir() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("calendar.json");
        let store = FileCalendarStore::new(&path);
        store.create_event(draft("Kickoff")).await.unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_corrupt_document_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("calendar.json");
        fs::write(&path, "{ not json").unwrap();

        let store = FileCalendarStore::new(&path);
        let err = store.calendars().await.unwrap_err();
        assert!(matches!(err, CalendarError::Corrupt(_)));
    }

    #[tokio::test]
    async fn test_request_access_denied_for_directory() {
        let dir = TempDir::new().unwrap();
        let store = FileCalendarStore::new(dir.path());
        assert!(matches!(
            store.request_access().await,
            AccessStatus::Denied(_)
        ));
    }
}
