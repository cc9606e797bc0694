use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::{Arc, LazyLock};

use super::helpers::canonical_name;
use super::types::InteractionError;

/// File name of the interaction table inside the resources directory.
pub const INTERACTIONS_FILE: &str = "interactions.json";

/// Demo knowledge base. Intentionally partial and not stored symmetrically.
const BUILTIN_INTERACTIONS: &[(&str, &[&str])] = &[
    (
        "warfarin",
        &["ibuprofen", "naproxen", "aspirin", "amiodarone", "fluconazole"],
    ),
    ("ibuprofen", &["warfarin"]),
    ("simvastatin", &["clarithromycin", "erythromycin", "grapefruit"]),
    (
        "sildenafil",
        &["nitroglycerin", "isosorbide mononitrate", "isosorbide dinitrate"],
    ),
    ("metformin", &["cimetidine"]),
];

static BUILTIN: LazyLock<Arc<InteractionTable>> = LazyLock::new(|| {
    Arc::new(InteractionTable::from_entries(
        BUILTIN_INTERACTIONS
            .iter()
            .map(|(drug, others)| (*drug, others.iter().copied())),
    ))
});

/// Known adverse interactions, keyed by canonical drug name.
///
/// An entry `X -> {Y}` documents that X interacts with Y. The reverse entry
/// may or may not exist, so lookups check both directions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionTable {
    entries: HashMap<String, HashSet<String>>,
}

impl InteractionTable {
    /// Build a table from `(drug, [interacting drugs])` entries. Names are
    /// canonicalized; empty names are dropped. Repeated keys are merged.
    pub fn from_entries<K, I, V>(entries: impl IntoIterator<Item = (K, I)>) -> Self
    where
        K: AsRef<str>,
        I: IntoIterator<Item = V>,
        V: AsRef<str>,
    {
        let mut table: HashMap<String, HashSet<String>> = HashMap::new();
        for (drug, others) in entries {
            let key = canonical_name(drug.as_ref());
            if key.is_empty() {
                continue;
            }
            let set = table.entry(key).or_default();
            set.extend(
                others
                    .into_iter()
                    .map(|o| canonical_name(o.as_ref()))
                    .filter(|o| !o.is_empty()),
            );
        }
        Self { entries: table }
    }

    /// The bundled demo table, built once per process.
    pub fn builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN)
    }

    /// Load a table from a JSON object of the form
    /// `{ "warfarin": ["ibuprofen", "aspirin"], ... }`.
    pub fn load(path: &Path) -> Result<Self, InteractionError> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            InteractionError::ReferenceDataLoad(path.display().to_string(), e.to_string())
        })?;
        let table = Self::from_json(&json).map_err(|e| match e {
            InteractionError::ReferenceDataParse(_, reason) => {
                InteractionError::ReferenceDataParse(path.display().to_string(), reason)
            }
            other => other,
        })?;

        tracing::info!(
            path = %path.display(),
            entries = table.len(),
            "Loaded interaction table"
        );
        Ok(table)
    }

    pub fn from_json(json: &str) -> Result<Self, InteractionError> {
        let raw: HashMap<String, Vec<String>> = serde_json::from_str(json).map_err(|e| {
            InteractionError::ReferenceDataParse(INTERACTIONS_FILE.into(), e.to_string())
        })?;
        Ok(Self::from_entries(raw))
    }

    /// Load `interactions.json` from `resources_dir`, or fall back to the
    /// builtin table when the file is absent. A present but unreadable or
    /// malformed file is an error.
    pub fn load_or_builtin(resources_dir: &Path) -> Result<Arc<Self>, InteractionError> {
        let path = crate::config::interactions_path(resources_dir);
        if !path.exists() {
            tracing::info!(
                path = %path.display(),
                "No interaction table on disk, using builtin table"
            );
            return Ok(Self::builtin());
        }
        Self::load(&path).map(Arc::new)
    }

    /// One-directional lookup: does `drug`'s entry list `other`?
    /// Both arguments must already be canonical.
    pub fn lists(&self, drug: &str, other: &str) -> bool {
        self.entries
            .get(drug)
            .is_some_and(|set| set.contains(other))
    }

    /// Bidirectional lookup on canonical names.
    pub fn interacts(&self, a: &str, b: &str) -> bool {
        self.lists(a, b) || self.lists(b, a)
    }

    /// Number of drugs with a forward entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const BUNDLED_JSON: &str = include_str!("../../resources/interactions.json");

    #[test]
    fn builtin_has_demo_entries() {
        let table = InteractionTable::builtin();
        assert_eq!(table.len(), 5);
        assert!(table.lists("warfarin", "aspirin"));
        assert!(table.lists("sildenafil", "isosorbide dinitrate"));
        assert!(!table.lists("aspirin", "warfarin"));
    }

    #[test]
    fn builtin_is_shared() {
        let a = InteractionTable::builtin();
        let b = InteractionTable::builtin();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn interacts_checks_both_directions() {
        let table = InteractionTable::builtin();
        assert!(table.interacts("warfarin", "aspirin"));
        assert!(table.interacts("aspirin", "warfarin"));
        assert!(table.interacts("cimetidine", "metformin"));
        assert!(!table.interacts("aspirin", "ibuprofen"));
    }

    #[test]
    fn from_entries_canonicalizes_and_merges() {
        let table = InteractionTable::from_entries(vec![
            (" Digoxin ", vec!["AMIODARONE", ""]),
            ("digoxin", vec!["Verapamil"]),
            ("  ", vec!["anything"]),
        ]);
        assert_eq!(table.len(), 1);
        assert!(table.lists("digoxin", "amiodarone"));
        assert!(table.lists("digoxin", "verapamil"));
        assert!(!table.lists("digoxin", ""));
    }

    #[test]
    fn bundled_resource_matches_builtin() {
        let parsed = InteractionTable::from_json(BUNDLED_JSON).unwrap();
        assert_eq!(&parsed, InteractionTable::builtin().as_ref());
    }

    #[test]
    fn load_reads_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"lithium": ["Ibuprofen"]}}"#).unwrap();

        let table = InteractionTable::load(file.path()).unwrap();
        assert!(table.interacts("ibuprofen", "lithium"));
    }

    #[test]
    fn load_missing_file_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = InteractionTable::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, InteractionError::ReferenceDataLoad(..)));
    }

    #[test]
    fn load_malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"["warfarin", "ibuprofen"]"#).unwrap();

        let err = InteractionTable::load(file.path()).unwrap_err();
        assert!(matches!(err, InteractionError::ReferenceDataParse(..)));
    }

    #[test]
    fn load_or_builtin_falls_back_when_absent() {
        let dir = tempfile::tempdir().unwrap();
        let table = InteractionTable::load_or_builtin(dir.path()).unwrap();
        assert!(Arc::ptr_eq(&table, &InteractionTable::builtin()));
    }

    #[test]
    fn load_or_builtin_prefers_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(INTERACTIONS_FILE),
            r#"{"clopidogrel": ["omeprazole"]}"#,
        )
        .unwrap();

        let table = InteractionTable::load_or_builtin(dir.path()).unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.interacts("omeprazole", "clopidogrel"));
        assert!(!table.interacts("warfarin", "ibuprofen"));
    }

    #[test]
    fn load_or_builtin_propagates_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(INTERACTIONS_FILE), "not json").unwrap();

        assert!(InteractionTable::load_or_builtin(dir.path()).is_err());
    }
}
