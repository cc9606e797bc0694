use std::path::Path;
use std::sync::Arc;

use crate::models::Medication;

use super::helpers::canonical_name;
use super::reference::InteractionTable;
use super::types::{InteractionError, InteractionPair};

/// Pairwise interaction check over a medication list.
///
/// The scan is deliberately quadratic: lists are short, and a flat loop is
/// easy to audit.
#[derive(Debug, Clone)]
pub struct InteractionChecker {
    table: Arc<InteractionTable>,
}

impl InteractionChecker {
    pub fn new(table: impl Into<Arc<InteractionTable>>) -> Self {
        Self {
            table: table.into(),
        }
    }

    /// Use `interactions.json` from the configured resources directory,
    /// or the builtin table when none is installed.
    pub fn from_resources() -> Result<Self, InteractionError> {
        Self::from_resources_dir(&crate::config::resources_dir())
    }

    pub fn from_resources_dir(resources_dir: &Path) -> Result<Self, InteractionError> {
        let table = InteractionTable::load_or_builtin(resources_dir)?;
        Ok(Self::new(table))
    }

    pub fn table(&self) -> &InteractionTable {
        &self.table
    }

    /// Every interacting pair, ordered by the first drug's position and then
    /// the second's. Empty names never match and two entries with the same
    /// canonical name are never paired with each other.
    pub fn find_conflicts(&self, medications: &[Medication]) -> Vec<InteractionPair> {
        let names: Vec<String> = medications.iter().map(|m| canonical_name(&m.name)).collect();
        let mut conflicts = Vec::new();

        for (i, a) in names.iter().enumerate() {
            if a.is_empty() {
                continue;
            }
            for (j, b) in names.iter().enumerate().skip(i + 1) {
                if b.is_empty() || a == b {
                    continue;
                }
                if self.table.lists(a, b) || self.table.lists(b, a) {
                    conflicts.push(InteractionPair::new(
                        medications[i].name.clone(),
                        medications[j].name.clone(),
                    ));
                }
            }
        }

        tracing::debug!(
            medications = medications.len(),
            conflicts = conflicts.len(),
            "Interaction check complete"
        );
        conflicts
    }
}

impl Default for InteractionChecker {
    fn default() -> Self {
        Self::new(InteractionTable::builtin())
    }
}

/// Check against the builtin table.
pub fn find_conflicts(medications: &[Medication]) -> Vec<InteractionPair> {
    InteractionChecker::default().find_conflicts(medications)
}
