//! Display text for the calendar. Nothing here affects which doses exist.

use chrono::NaiveDate;

use super::types::DoseSlot;

pub fn slot_label(slot: DoseSlot) -> Option<&'static str> {
    match slot {
        DoseSlot::Morning => Some("AM"),
        DoseSlot::Noon => Some("Noon"),
        DoseSlot::Evening => Some("PM"),
        DoseSlot::Once | DoseSlot::AsNeeded => None,
    }
}

/// Short weekday, e.g. "Mon".
pub fn weekday_label(date: NaiveDate) -> String {
    date.format("%a").to_string()
}

/// Month and day, e.g. "Oct 6".
pub fn month_day_label(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

pub fn dose_count_label(count: usize) -> String {
    if count == 1 {
        "1 scheduled dose".to_string()
    } else {
        format!("{count} scheduled doses")
    }
}
