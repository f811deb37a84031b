//! Error types for the plan-generation library.
//!
//! Plan generation itself cannot fail: every table lookup is an exhaustive
//! match over a closed enum. The only fallible surface is parsing enum labels
//! at the input boundary (`FromStr` on the request enums), which rejects
//! out-of-domain labels before any template is expanded.

use thiserror::Error;

/// Error type for request-boundary validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// A request field was given a value outside its accepted domain
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
}

impl PlanError {
    /// Creates an invalid-input error for an enum field with an
    /// out-of-domain label, listing the accepted labels.
    pub fn unknown_label(field: &str, label: &str, accepted: &[&str]) -> Self {
        PlanError::InvalidInput {
            field: field.to_string(),
            reason: format!(
                "Invalid {field}: {label}. Must be one of {}",
                accepted
                    .iter()
                    .map(|l| format!("'{l}'"))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        }
    }
}

/// Result type alias for plan-generation operations
pub type Result<T> = std::result::Result<T, PlanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_label_lists_accepted_values() {
        let err = PlanError::unknown_label("tone", "casual", &["educational", "story"]);
        let message = err.to_string();
        assert!(message.contains("Invalid input for field 'tone'"));
        assert!(message.contains("Invalid tone: casual"));
        assert!(message.contains("'educational', 'story'"));
    }
}
