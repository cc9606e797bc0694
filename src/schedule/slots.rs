use chrono::NaiveDate;

use crate::models::{Frequency, Medication};

use super::types::DoseSlot;

const ONCE: &[DoseSlot] = &[DoseSlot::Once];
const TWICE: &[DoseSlot] = &[DoseSlot::Morning, DoseSlot::Evening];
const THRICE: &[DoseSlot] = &[DoseSlot::Morning, DoseSlot::Noon, DoseSlot::Evening];
const AS_NEEDED: &[DoseSlot] = &[DoseSlot::AsNeeded];
const NONE: &[DoseSlot] = &[];

/// Slots a frequency occupies on a day where it doses at all.
pub fn daily_slots(frequency: Frequency) -> &'static [DoseSlot] {
    match frequency {
        Frequency::Qd | Frequency::Am | Frequency::Pm | Frequency::Hs | Frequency::Qod => ONCE,
        Frequency::Bid => TWICE,
        Frequency::Tid => THRICE,
        Frequency::Prn => AS_NEEDED,
    }
}

/// QOD counts from the start date when there is one, otherwise from the
/// reference date of the current plan.
pub fn qod_anchor(med: &Medication, reference: NaiveDate) -> NaiveDate {
    med.start_date.unwrap_or(reference)
}

/// Every other calendar day, counting the anchor itself as a dose day.
pub fn is_qod_dose_day(anchor: NaiveDate, day: NaiveDate) -> bool {
    (day - anchor).num_days().rem_euclid(2) == 0
}

/// Slots `med` occupies on `day`, or nothing if it is inactive or (for QOD)
/// off-cycle.
pub fn slots_on(med: &Medication, day: NaiveDate, reference: NaiveDate) -> &'static [DoseSlot] {
    if !med.is_active_on(day) {
        return NONE;
    }
    if med.frequency == Frequency::Qod && !is_qod_dose_day(qod_anchor(med, reference), day) {
        return NONE;
    }
    daily_slots(med.frequency)
}
