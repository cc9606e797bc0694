//! Patient dashboard payload: interaction alerts and the weekly calendar,
//! computed together from one medication list.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::intelligence::{InteractionChecker, InteractionMessages, InteractionPair};
use crate::models::Medication;
use crate::schedule::{WeekPlan, WeekScheduleBuilder};

/// Header counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub active: usize,
    pub risky: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardView {
    pub stats: DashboardStats,
    pub conflicts: Vec<InteractionPair>,
    /// One message per conflict, same order.
    pub alerts: Vec<String>,
    /// Advisory line under the alerts, or the all-clear text when there are none.
    pub notice: String,
    pub week: WeekPlan,
}

pub fn build_dashboard(
    checker: &InteractionChecker,
    medications: &[Medication],
    reference_date: NaiveDate,
) -> DashboardView {
    let conflicts = checker.find_conflicts(medications);
    let week = WeekScheduleBuilder::new(reference_date).build(medications);

    let stats = DashboardStats {
        active: medications.len(),
        risky: conflicts.len(),
    };

    tracing::debug!(
        active = stats.active,
        risky = stats.risky,
        scheduled = week.total_scheduled(),
        "Dashboard assembled"
    );

    let notice = if conflicts.is_empty() {
        InteractionMessages::NONE_FOUND
    } else {
        InteractionMessages::ADVISORY
    };

    DashboardView {
        stats,
        alerts: InteractionMessages::all(&conflicts),
        notice: notice.to_string(),
        conflicts,
        week,
    }
}
