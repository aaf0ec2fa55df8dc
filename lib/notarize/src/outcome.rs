//! Discriminated results returned by resource operations.

use serde::Deserialize;

/// Outcome of a resource operation.
///
/// `success` always mirrors the transport-level ok flag, independent of
/// whether a domain object or an error was extracted from the payload.
/// At most one of `error` / `errors` is populated, per the endpoint's
/// own status-code policy.
#[derive(Debug, Clone)]
pub struct Outcome<T> {
    /// Transport-level ok flag (status was 2xx).
    pub success: bool,
    /// Domain object decoded from the payload, when one was present
    /// and matched the expected shape.
    pub value: Option<T>,
    /// Single error description (not-found style failures).
    pub error: Option<String>,
    /// Validation error list (422 style failures).
    pub errors: Option<Vec<String>>,
}

impl<T> Outcome<T> {
    /// Outcome carrying a decoded domain object (or nothing).
    #[must_use]
    pub const fn with_value(success: bool, value: Option<T>) -> Self {
        Self {
            success,
            value,
            error: None,
            errors: None,
        }
    }

    /// Outcome carrying a single error description.
    #[must_use]
    pub fn with_error(success: bool, error: impl Into<String>) -> Self {
        Self {
            success,
            value: None,
            error: Some(error.into()),
            errors: None,
        }
    }

    /// Outcome carrying a validation error list, when the payload had one.
    #[must_use]
    pub const fn with_errors(success: bool, errors: Option<Vec<String>>) -> Self {
        Self {
            success,
            value: None,
            error: None,
            errors,
        }
    }

    /// Whether the call succeeded at the transport level.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.success
    }

    /// Consume into the domain object, if one was extracted.
    #[must_use]
    pub fn into_value(self) -> Option<T> {
        self.value
    }
}

/// Acknowledgement payload returned by delete endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteAck {
    /// Optional server-side message accompanying the deletion.
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_value_sets_no_errors() {
        let outcome = Outcome::with_value(true, Some(42));
        assert!(outcome.is_success());
        assert_eq!(outcome.value, Some(42));
        assert!(outcome.error.is_none());
        assert!(outcome.errors.is_none());
    }

    #[test]
    fn with_error_keeps_transport_flag() {
        // A 404 keeps success=false from the transport, plus the description.
        let outcome: Outcome<()> = Outcome::with_error(false, "does not exist");
        assert!(!outcome.is_success());
        assert_eq!(outcome.error.as_deref(), Some("does not exist"));
    }

    #[test]
    fn with_errors_may_be_empty() {
        let outcome: Outcome<()> = Outcome::with_errors(false, None);
        assert!(outcome.errors.is_none());

        let outcome: Outcome<()> =
            Outcome::with_errors(false, Some(vec!["name is required".to_owned()]));
        assert_eq!(outcome.errors.as_deref(), Some(&["name is required".to_owned()][..]));
    }

    #[test]
    fn into_value_consumes() {
        let outcome = Outcome::with_value(true, Some("doc".to_owned()));
        assert_eq!(outcome.into_value().as_deref(), Some("doc"));
    }
}
