use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const HOURS_PER_DAY: u8 = 24;

/// Label for the hour slot starting at `hour` (0..=23), e.g. `"09:00 - 10:00"`.
/// Lexicographic order of these labels matches hour order.
pub fn slot_label(hour: u8) -> String {
    format!("{:02}:00 - {:02}:00", hour, hour + 1)
}

pub fn slot_labels() -> Vec<String> {
    (0..HOURS_PER_DAY).map(slot_label).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    pub tasks: BTreeMap<String, String>,
    pub notes: String,
    pub whiteboard_present: bool,
}

impl DayRecord {
    pub fn new() -> Self {
        Self {
            tasks: slot_labels()
                .into_iter()
                .map(|slot| (slot, String::new()))
                .collect(),
            notes: String::new(),
            whiteboard_present: false,
        }
    }

    /// Copy of the record with exactly the 24 canonical slot keys: missing
    /// slots come back empty, unknown keys are dropped.
    pub fn with_canonical_slots(&self) -> Self {
        let mut record = Self::new();
        for (slot, text) in record.tasks.iter_mut() {
            if let Some(existing) = self.tasks.get(slot) {
                *text = existing.clone();
            }
        }
        record.notes = self.notes.clone();
        record.whiteboard_present = self.whiteboard_present;
        record
    }
}

impl Default for DayRecord {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PlannerData {
    pub days: BTreeMap<String, DayRecord>,
}

impl PlannerData {
    /// Record for `date` as the UI should see it. Unknown dates yield a fresh
    /// record; nothing is inserted until an explicit save.
    pub fn day(&self, date: &str) -> DayRecord {
        match self.days.get(date) {
            Some(record) => record.with_canonical_slots(),
            None => DayRecord::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SleepRange {
    pub start: u8,
    pub end: u8,
}

#[derive(Debug, Deserialize)]
pub struct SaveDayRequest {
    #[serde(default)]
    pub tasks: BTreeMap<String, String>,
    #[serde(default)]
    pub notes: String,
    pub sleep: Option<SleepRange>,
    #[serde(default)]
    pub fun: Vec<String>,
    #[serde(default)]
    pub work: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DayResponse {
    pub date: String,
    pub tasks: BTreeMap<String, String>,
    pub notes: String,
    pub whiteboard_present: bool,
}

#[derive(Debug, Serialize)]
pub struct DatesResponse {
    pub dates: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct IndexQuery {
    pub date: Option<String>,
}
