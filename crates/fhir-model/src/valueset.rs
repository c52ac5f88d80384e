use serde::{Deserialize, Serialize};

/// The legal codes for one coded field.
///
/// Membership is case-insensitive: `"Female"` satisfies a set declaring
/// `female`. Sets are small (a handful to a few dozen codes), so a linear
/// scan beats maintaining a normalized index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValueSet {
    /// Short name the definitions bind fields with (e.g. "administrative-gender").
    pub name: String,
    /// Canonical URL from the standard, kept for diagnostics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Legal codes in declaration order.
    pub codes: Vec<String>,
}

impl ValueSet {
    pub fn new(name: impl Into<String>, codes: Vec<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
            codes,
        }
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, code: &str) -> bool {
        self.codes.iter().any(|legal| legal.eq_ignore_ascii_case(code))
    }

    /// The full legal set, rendered for error messages.
    pub fn allowed_list(&self) -> String {
        self.codes.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::ValueSet;

    fn gender() -> ValueSet {
        ValueSet::new(
            "administrative-gender",
            vec![
                "male".to_string(),
                "female".to_string(),
                "other".to_string(),
                "unknown".to_string(),
            ],
        )
    }

    #[test]
    fn membership_ignores_case() {
        let set = gender();
        assert!(set.contains("female"));
        assert!(set.contains("FEMALE"));
        assert!(set.contains("Male"));
        assert!(!set.contains("F"));
    }

    #[test]
    fn allowed_list_preserves_declaration_order() {
        assert_eq!(gender().allowed_list(), "male, female, other, unknown");
    }
}
