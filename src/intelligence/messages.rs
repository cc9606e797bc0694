use super::types::InteractionPair;

/// Message templates for interaction alerts.
/// Wording stays calm and points the patient at their care team.
pub struct InteractionMessages;

impl InteractionMessages {
    /// Shown under every alert: the table is a demo, not a clinical source.
    pub const ADVISORY: &'static str = "Demo rules. Consult your provider or pharmacist.";

    /// Shown when the list has no known interactions.
    pub const NONE_FOUND: &'static str = "No known interactions in this list.";

    pub fn pair(pair: &InteractionPair) -> String {
        format!("{} may interact with {}.", pair.a.trim(), pair.b.trim())
    }

    pub fn all(pairs: &[InteractionPair]) -> Vec<String> {
        pairs.iter().map(Self::pair).collect()
    }
}
