use chrono::{Days, Local, NaiveDate};

use crate::config::WEEK_LENGTH_DAYS;
use crate::models::Medication;

use super::slots::slots_on;
use super::types::{DayPlan, DoseEvent, WeekPlan};

/// Builds the seven-day dosing calendar anchored at a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekScheduleBuilder {
    reference_date: NaiveDate,
}

impl WeekScheduleBuilder {
    /// A reference date closer than a week to `NaiveDate::MAX` is pulled
    /// back so the plan still has seven representable days.
    pub fn new(reference_date: NaiveDate) -> Self {
        Self {
            reference_date: reference_date.min(latest_reference_date()),
        }
    }

    /// Anchored at today's local calendar date.
    pub fn for_today() -> Self {
        Self::new(Local::now().date_naive())
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Expand `medications` over the week. Always seven days; within a day,
    /// events follow the medication list order, then slot order.
    pub fn build(&self, medications: &[Medication]) -> WeekPlan {
        let mut days: Vec<DayPlan> = self
            .reference_date
            .iter_days()
            .take(WEEK_LENGTH_DAYS)
            .map(DayPlan::new)
            .collect();

        for med in medications {
            for day in &mut days {
                let slots = slots_on(med, day.date, self.reference_date);
                day.events
                    .extend(slots.iter().map(|slot| DoseEvent::new(med, *slot)));
            }
        }

        tracing::debug!(
            reference_date = %self.reference_date,
            medications = medications.len(),
            scheduled = days.iter().map(DayPlan::scheduled_dose_count).sum::<usize>(),
            "Week plan built"
        );

        WeekPlan { days }
    }
}

fn latest_reference_date() -> NaiveDate {
    NaiveDate::MAX
        .checked_sub_days(Days::new(WEEK_LENGTH_DAYS as u64 - 1))
        .unwrap_or(NaiveDate::MAX)
}

impl Default for WeekScheduleBuilder {
    fn default() -> Self {
        Self::for_today()
    }
}

/// Build a week plan from `reference_date`, or from today when `None`.
pub fn build_week_plan(medications: &[Medication], reference_date: Option<NaiveDate>) -> WeekPlan {
    reference_date
        .map(WeekScheduleBuilder::new)
        .unwrap_or_default()
        .build(medications)
}
