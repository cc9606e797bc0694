use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Frequency, Medication};

use super::labels;

// ---------------------------------------------------------------------------
// DoseSlot
// ---------------------------------------------------------------------------

/// Position of a dose within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoseSlot {
    /// Single daily dose, no time-of-day label.
    Once,
    Morning,
    Noon,
    Evening,
    /// Taken at the patient's discretion.
    AsNeeded,
}

// ---------------------------------------------------------------------------
// DoseEvent
// ---------------------------------------------------------------------------

/// One administration of a medication on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoseEvent {
    pub medication_name: String,
    pub dose: String,
    pub frequency: Frequency,
    pub is_as_needed: bool,
    pub slot: DoseSlot,
    pub label: Option<String>,
}

impl DoseEvent {
    pub fn new(med: &Medication, slot: DoseSlot) -> Self {
        Self {
            medication_name: med.name.clone(),
            dose: med.dose.clone(),
            frequency: med.frequency,
            is_as_needed: med.frequency.is_as_needed(),
            slot,
            label: labels::slot_label(slot).map(String::from),
        }
    }
}

// ---------------------------------------------------------------------------
// DayPlan / WeekPlan
// ---------------------------------------------------------------------------

/// Dose events for one calendar day, in medication-list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub date: NaiveDate,
    pub events: Vec<DoseEvent>,
}

impl DayPlan {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            events: Vec::new(),
        }
    }

    /// Doses that count toward the day's schedule (PRN excluded).
    pub fn scheduled_dose_count(&self) -> usize {
        self.events.iter().filter(|e| !e.is_as_needed).count()
    }

    pub fn as_needed_count(&self) -> usize {
        self.events.iter().filter(|e| e.is_as_needed).count()
    }

    pub fn events_for<'a>(&'a self, medication_name: &'a str) -> impl Iterator<Item = &'a DoseEvent> {
        self.events
            .iter()
            .filter(move |e| e.medication_name == medication_name)
    }
}

/// Seven consecutive day buckets in ascending date order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekPlan {
    pub days: Vec<DayPlan>,
}

impl WeekPlan {
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.days.first().map(|d| d.date)
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.days.iter().map(|d| d.date).collect()
    }

    pub fn total_scheduled(&self) -> usize {
        self.days.iter().map(DayPlan::scheduled_dose_count).sum()
    }

    /// Split into parallel `(days, plan)` vectors.
    pub fn into_parts(self) -> (Vec<NaiveDate>, Vec<Vec<DoseEvent>>) {
        self.days.into_iter().map(|d| (d.date, d.events)).unzip()
    }
}
