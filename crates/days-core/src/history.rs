use chrono::{Local, NaiveDateTime};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Timestamp format of history entries, `DD/MM/YYYY HH:MM`.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M";

/// One handled request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub method: String,
    #[serde(rename = "at")]
    pub timestamp: String,
    pub route: String,
}

impl HistoryRecord {
    /// Record stamped with the current local time.
    pub fn now(method: impl Into<String>, route: impl Into<String>) -> Self {
        Self::at(method, route, Local::now().naive_local())
    }

    pub fn at(method: impl Into<String>, route: impl Into<String>, time: NaiveDateTime) -> Self {
        Self {
            method: method.into(),
            timestamp: time.format(TIMESTAMP_FORMAT).to_string(),
            route: route.into(),
        }
    }
}

/// Number of most recent history entries to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(usize);

impl PageSize {
    pub const MIN: usize = 1;
    pub const MAX: usize = 20;
    pub const DEFAULT: PageSize = PageSize(5);

    pub fn new(n: usize) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&n) {
            Ok(Self(n))
        } else {
            Err(Error::Range(n.to_string()))
        }
    }

    /// Parse the optional `number` query value. Absent means the default
    /// page size; present must be an integer in `1..=20`.
    pub fn parse(raw: Option<&str>) -> Result<Self> {
        let Some(raw) = raw else {
            return Ok(Self::DEFAULT);
        };

        let n: i64 = raw
            .trim()
            .parse()
            .map_err(|_| Error::Range(raw.to_string()))?;

        if n < Self::MIN as i64 || n > Self::MAX as i64 {
            return Err(Error::Range(raw.to_string()));
        }

        Ok(Self(n as usize))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// In-memory request history, oldest first.
///
/// All access goes through one mutex, so appends are never lost and a slice
/// is always taken from a consistent sequence.
#[derive(Debug, Default)]
pub struct Ledger {
    records: Mutex<Vec<HistoryRecord>>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    pub fn record(&self, entry: HistoryRecord) {
        tracing::debug!("Recording {} {} at {}", entry.method, entry.route, entry.timestamp);
        self.records.lock().push(entry);
    }

    /// Last `n` records, most recent first. Returns everything when fewer
    /// than `n` are stored. Bounds on `n` are the caller's concern.
    pub fn recent(&self, n: usize) -> Vec<HistoryRecord> {
        let records = self.records.lock();
        latest(&records, n)
    }

    /// Append `entry`, then take the last `n` records, holding the lock for
    /// both steps so the slice always includes `entry`'s position.
    pub fn record_then_recent(&self, entry: HistoryRecord, n: usize) -> Vec<HistoryRecord> {
        tracing::debug!("Recording {} {} at {}", entry.method, entry.route, entry.timestamp);
        let mut records = self.records.lock();
        records.push(entry);
        latest(&records, n)
    }

    /// Drop every record.
    pub fn clear(&self) {
        let mut records = self.records.lock();
        let dropped = records.len();
        records.clear();
        tracing::info!("History cleared ({} records dropped)", dropped);
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

fn latest(records: &[HistoryRecord], n: usize) -> Vec<HistoryRecord> {
    records.iter().rev().take(n).cloned().collect()
}
