/// Normalize a medication name for matching: surrounding whitespace removed,
/// lower-cased. Display always uses the original spelling.
pub fn canonical_name(name: &str) -> String {
    name.trim().to_lowercase()
}
