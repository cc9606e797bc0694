//! Medication engine for the PILLARS prescription dashboard: drug
//! interaction checks and the weekly dosing calendar.

pub mod config;
pub mod dashboard;
pub mod intelligence; // Interaction table + pairwise checker
pub mod medications; // Name catalog + list search
pub mod models;
pub mod schedule; // Week plan expansion

pub use dashboard::{build_dashboard, DashboardStats, DashboardView};
pub use intelligence::{find_conflicts, InteractionChecker, InteractionPair, InteractionTable};
pub use models::{Frequency, Medication, MedicationRecord};
pub use schedule::{build_week_plan, DoseEvent, WeekPlan, WeekScheduleBuilder};

use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber. Honors `RUST_LOG`, otherwise
/// `config::default_log_filter()`. Returns false if a global subscriber was
/// already set.
pub fn init_tracing() -> bool {
    let initialized = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init()
        .is_ok();

    if initialized {
        tracing::info!("{} engine v{}", config::APP_NAME, config::APP_VERSION);
    }
    initialized
}
