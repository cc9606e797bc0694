use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::enums::{Frequency, MedicationKind};
use super::ModelError;

/// A medication as seen by the interaction checker and the week planner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medication {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub dose: String,
    #[serde(default, deserialize_with = "lenient_frequency")]
    pub frequency: Frequency,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub route: String,
    #[serde(default)]
    pub kind: Option<MedicationKind>,
    #[serde(default)]
    pub notes: String,
}

impl Medication {
    pub fn new(name: impl Into<String>, dose: impl Into<String>, frequency: Frequency) -> Self {
        Self {
            name: name.into(),
            dose: dose.into(),
            frequency,
            start_date: None,
            end_date: None,
            route: String::new(),
            kind: None,
            notes: String::new(),
        }
    }

    pub fn with_start_date(mut self, start: NaiveDate) -> Self {
        self.start_date = Some(start);
        self
    }

    pub fn with_end_date(mut self, end: NaiveDate) -> Self {
        self.end_date = Some(end);
        self
    }

    /// Lower-cased, trimmed name used for matching.
    pub fn canonical_name(&self) -> String {
        crate::intelligence::canonical_name(&self.name)
    }

    /// Both bounds are inclusive; a missing bound is open.
    pub fn is_active_on(&self, day: NaiveDate) -> bool {
        self.start_date.map_or(true, |start| day >= start)
            && self.end_date.map_or(true, |end| day <= end)
    }
}

/// Frequency codes arrive in any case; unknown or null codes become `QD`.
fn lenient_frequency<'de, D>(deserializer: D) -> Result<Frequency, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(Frequency::normalize(raw.as_deref()))
}

// ---------------------------------------------------------------------------
// MedicationRecord
// ---------------------------------------------------------------------------

/// Loosely-typed medication document as stored by the dashboard.
///
/// Older documents use `dose`/`freq`, newer ones `dosage`/`frequency`; both
/// spellings are accepted. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MedicationRecord {
    pub name: Option<String>,
    pub dosage: Option<String>,
    pub dose: Option<String>,
    pub frequency: Option<String>,
    pub freq: Option<String>,
    pub started: Option<String>,
    pub ends: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
    pub route: Option<String>,
    pub kind: Option<String>,
    pub notes: Option<String>,
}

impl MedicationRecord {
    /// Normalize into a `Medication`. Never fails: missing or malformed
    /// fields fall back to empty text, `QD`, or an open date bound.
    pub fn into_medication(self) -> Medication {
        let start_date = non_empty(self.started.as_deref())
            .and_then(parse_record_date)
            .or_else(|| non_empty(self.created_at.as_deref()).and_then(creation_date));

        Medication {
            name: self.name.unwrap_or_default(),
            dose: first_non_empty(&[self.dosage.as_deref(), self.dose.as_deref()]),
            frequency: Frequency::normalize(
                non_empty(self.frequency.as_deref()).or(non_empty(self.freq.as_deref())),
            ),
            start_date,
            end_date: non_empty(self.ends.as_deref()).and_then(parse_record_date),
            route: self.route.unwrap_or_default(),
            kind: MedicationKind::normalize(self.kind.as_deref()),
            notes: self.notes.unwrap_or_default(),
        }
    }
}

impl From<MedicationRecord> for Medication {
    fn from(record: MedicationRecord) -> Self {
        record.into_medication()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn first_non_empty(candidates: &[Option<&str>]) -> String {
    candidates
        .iter()
        .find_map(|c| non_empty(*c))
        .unwrap_or_default()
        .to_string()
}

/// Parse a stored date: `YYYY-MM-DD`, or an RFC 3339 timestamp reduced to
/// its local calendar date. Unparseable input is an open bound.
pub fn parse_record_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Local).date_naive());
    }
    tracing::warn!(value = %raw, "Unparseable medication date, treating as unbounded");
    None
}

/// Creation timestamps are reduced to their UTC date, the way the dashboard
/// backfills a missing start date.
fn creation_date(raw: &str) -> Option<NaiveDate> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => Some(ts.with_timezone(&Utc).date_naive()),
        Err(_) => parse_record_date(raw),
    }
}

// ---------------------------------------------------------------------------
// OtcDraft
// ---------------------------------------------------------------------------

/// Over-the-counter medication entered by the patient.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OtcDraft {
    pub name: String,
    pub dose: String,
    #[serde(default, deserialize_with = "lenient_frequency")]
    pub frequency: Frequency,
    #[serde(default)]
    pub route: String,
    #[serde(default)]
    pub notes: String,
}

impl OtcDraft {
    /// `created_on` is the day the entry is saved; it becomes the start date,
    /// the same way stored records backfill a missing start from `createdAt`.
    pub fn into_medication(self, created_on: Option<NaiveDate>) -> Result<Medication, ModelError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ModelError::EmptyName);
        }
        Ok(Medication {
            name: name.to_string(),
            dose: self.dose.trim().to_string(),
            frequency: self.frequency,
            start_date: created_on,
            end_date: None,
            route: self.route.trim().to_string(),
            kind: Some(MedicationKind::Otc),
            notes: self.notes.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(json: &str) -> Medication {
        serde_json::from_str::<MedicationRecord>(json)
            .unwrap()
            .into_medication()
    }

    #[test]
    fn active_range_is_inclusive() {
        let med = Medication::new("Lisinopril", "10 mg", Frequency::Qd)
            .with_start_date(date(2025, 3, 1))
            .with_end_date(date(2025, 3, 5));

        assert!(!med.is_active_on(date(2025, 2, 28)));
        assert!(med.is_active_on(date(2025, 3, 1)));
        assert!(med.is_active_on(date(2025, 3, 5)));
        assert!(!med.is_active_on(date(2025, 3, 6)));
    }

    #[test]
    fn open_bounds_are_always_active() {
        let med = Medication::new("Lisinopril", "10 mg", Frequency::Qd);
        assert!(med.is_active_on(NaiveDate::MIN));
        assert!(med.is_active_on(NaiveDate::MAX));
    }

    #[test]
    fn canonical_name_trims_and_lowercases() {
        let med = Medication::new("  WarFarin ", "5 mg", Frequency::Qd);
        assert_eq!(med.canonical_name(), "warfarin");
    }

    #[test]
    fn record_prefers_dosage_and_frequency() {
        let med = record(
            r#"{"name":"Metformin","dosage":"500 mg","dose":"250 mg","frequency":"bid","freq":"TID"}"#,
        );
        assert_eq!(med.name, "Metformin");
        assert_eq!(med.dose, "500 mg");
        assert_eq!(med.frequency, Frequency::Bid);
    }

    #[test]
    fn record_falls_back_to_legacy_fields() {
        let med = record(r#"{"name":"Metformin","dosage":"","dose":"250 mg","freq":"tid"}"#);
        assert_eq!(med.dose, "250 mg");
        assert_eq!(med.frequency, Frequency::Tid);
    }

    #[test]
    fn empty_record_gets_defaults() {
        let med = record("{}");
        assert_eq!(med.name, "");
        assert_eq!(med.dose, "");
        assert_eq!(med.frequency, Frequency::Qd);
        assert_eq!(med.start_date, None);
        assert_eq!(med.end_date, None);
        assert_eq!(med.kind, None);
    }

    #[test]
    fn record_parses_dates() {
        let med = record(r#"{"name":"Amoxicillin","started":"2025-01-10","ends":"2025-01-17"}"#);
        assert_eq!(med.start_date, Some(date(2025, 1, 10)));
        assert_eq!(med.end_date, Some(date(2025, 1, 17)));
    }

    #[test]
    fn malformed_dates_are_unbounded() {
        let med = record(r#"{"name":"Amoxicillin","started":"next week","ends":"2025-13-45"}"#);
        assert_eq!(med.start_date, None);
        assert_eq!(med.end_date, None);
    }

    #[test]
    fn missing_start_uses_creation_date() {
        let med = record(r#"{"name":"Aspirin","createdAt":"2025-04-02T23:30:00Z"}"#);
        assert_eq!(med.start_date, Some(date(2025, 4, 2)));

        let med = record(
            r#"{"name":"Aspirin","started":"2025-04-01","createdAt":"2025-04-02T23:30:00Z"}"#,
        );
        assert_eq!(med.start_date, Some(date(2025, 4, 1)));
    }

    #[test]
    fn record_kind_is_normalized() {
        assert_eq!(record(r#"{"kind":"OTC"}"#).kind, Some(MedicationKind::Otc));
        assert_eq!(record(r#"{"kind":"herbal"}"#).kind, None);
    }

    #[test]
    fn otc_draft_trims_fields() {
        let draft = OtcDraft {
            name: "  Ibuprofen ".into(),
            dose: " 200 mg ".into(),
            frequency: Frequency::Prn,
            route: " PO".into(),
            notes: "".into(),
        };
        let med = draft.into_medication(None).unwrap();
        assert_eq!(med.name, "Ibuprofen");
        assert_eq!(med.dose, "200 mg");
        assert_eq!(med.route, "PO");
        assert_eq!(med.kind, Some(MedicationKind::Otc));
        assert_eq!(med.frequency, Frequency::Prn);
    }

    #[test]
    fn otc_draft_requires_name() {
        let draft = OtcDraft {
            name: "   ".into(),
            ..OtcDraft::default()
        };
        assert_eq!(draft.into_medication(None), Err(ModelError::EmptyName));
    }

    #[test]
    fn otc_draft_starts_on_creation_day() {
        let draft = OtcDraft {
            name: "Loratadine".into(),
            dose: "10 mg".into(),
            ..OtcDraft::default()
        };
        let med = draft.into_medication(Some(date(2025, 4, 2))).unwrap();
        assert_eq!(med.start_date, Some(date(2025, 4, 2)));
        assert_eq!(med.end_date, None);
        assert!(!med.is_active_on(date(2025, 4, 1)));
    }

    #[test]
    fn medication_json_normalizes_frequency() {
        let med: Medication =
            serde_json::from_str(r#"{"name":"Metformin","dose":"500 mg","frequency":"bid"}"#)
                .unwrap();
        assert_eq!(med.frequency, Frequency::Bid);

        let med: Medication =
            serde_json::from_str(r#"{"name":"Metformin","frequency":" Qod "}"#).unwrap();
        assert_eq!(med.frequency, Frequency::Qod);

        let med: Medication =
            serde_json::from_str(r#"{"name":"Metformin","frequency":"QID"}"#).unwrap();
        assert_eq!(med.frequency, Frequency::Qd);

        let med: Medication =
            serde_json::from_str(r#"{"name":"Metformin","frequency":null}"#).unwrap();
        assert_eq!(med.frequency, Frequency::Qd);
    }

    #[test]
    fn medication_json_defaults_missing_fields() {
        let med: Medication = serde_json::from_str(r#"{"dose":"500 mg"}"#).unwrap();
        assert_eq!(med.name, "");
        assert_eq!(med.dose, "500 mg");
        assert_eq!(med.frequency, Frequency::Qd);

        let med: Medication = serde_json::from_str("{}").unwrap();
        assert_eq!(med, Medication::new("", "", Frequency::Qd));
    }

    #[test]
    fn medication_json_round_trips() {
        let med = Medication::new("Warfarin", "5 mg", Frequency::Hs)
            .with_start_date(date(2025, 1, 2));
        let json = serde_json::to_string(&med).unwrap();
        assert_eq!(serde_json::from_str::<Medication>(&json).unwrap(), med);
    }

    #[test]
    fn otc_draft_json_accepts_lowercase_frequency() {
        let draft: OtcDraft =
            serde_json::from_str(r#"{"name":"Ibuprofen","dose":"200 mg","frequency":"prn"}"#)
                .unwrap();
        assert_eq!(draft.frequency, Frequency::Prn);
    }
}
