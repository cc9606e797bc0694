//! Medication list helpers: the name catalog behind the autocomplete picker
//! and the list search box.

use serde::{Deserialize, Serialize};

use crate::models::Medication;

/// Maximum suggestions returned by the autocomplete picker.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;

/// De-duplicated medication names offered when adding a medication, full list first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicationCatalog {
    names: Vec<String>,
}

impl MedicationCatalog {
    /// Merge the full and over-the-counter name lists. Each list is cleaned
    /// and sorted case-insensitively on its own, then the OTC list is appended
    /// after the full list, so OTC-only names come last. Names are trimmed;
    /// blanks, combination products (`"A + B"`) and exact repeats are skipped.
    pub fn from_sources<A, O, S, T>(all: A, otc: O) -> Self
    where
        A: IntoIterator<Item = S>,
        O: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let mut names = sorted_source(all);
        for name in sorted_source(otc) {
            if !names.contains(&name) {
                names.push(name);
            }
        }

        tracing::debug!(names = names.len(), "Medication catalog built");
        Self { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Case-insensitive substring match, in catalog order. A blank query
    /// suggests nothing.
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<&str> {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return Vec::new();
        }
        self.names
            .iter()
            .filter(|name| name.to_lowercase().contains(&q))
            .take(limit)
            .map(String::as_str)
            .collect()
    }
}

fn sorted_source<I, S>(source: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut names: Vec<String> = Vec::new();
    for name in source.into_iter().map(|n| n.as_ref().trim().to_string()) {
        if name.is_empty() || name.contains('+') || names.contains(&name) {
            continue;
        }
        names.push(name);
    }
    names.sort_by(|a, b| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });
    names
}

/// Medications whose name starts with `filter` (trimmed, case-insensitive).
/// A blank filter keeps the whole list.
pub fn filter_by_prefix<'a>(medications: &'a [Medication], filter: &str) -> Vec<&'a Medication> {
    let prefix = filter.trim().to_lowercase();
    medications
        .iter()
        .filter(|m| m.name.to_lowercase().starts_with(&prefix))
        .collect()
}
