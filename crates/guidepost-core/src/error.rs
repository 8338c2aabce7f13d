use thiserror::Error;

/// Core error type for the Guidepost workflow engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Workflow session not found in the registry. Covers both never-existed
    /// and already-completed identifiers; the engine treats completed as
    /// equivalent to absent.
    #[error("Workflow not found: {0}")]
    WorkflowNotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Session store error
    #[error("Session store error: {0}")]
    StateStoreError(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::SerializationError(err.to_string())
    }
}

impl From<String> for CoreError {
    fn from(err: String) -> Self {
        CoreError::Other(err)
    }
}

impl From<&str> for CoreError {
    fn from(err: &str) -> Self {
        CoreError::Other(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let errors = vec![
            (
                CoreError::WorkflowNotFound("wf_alice_retail_1".to_string()),
                "Workflow not found: wf_alice_retail_1",
            ),
            (
                CoreError::ValidationError("invalid".to_string()),
                "Validation error: invalid",
            ),
            (
                CoreError::StateStoreError("map_err".to_string()),
                "Session store error: map_err",
            ),
            (
                CoreError::SerializationError("ser_err".to_string()),
                "Serialization error: ser_err",
            ),
            (CoreError::Other("other_err".to_string()), "other_err"),
        ];

        for (error, expected_msg) in errors {
            assert_eq!(error.to_string(), expected_msg);
        }
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error: CoreError = json_error.into();

        match error {
            CoreError::SerializationError(msg) => {
                assert!(msg.contains("expected value"));
            }
            _ => panic!("Expected SerializationError variant"),
        }
    }

    #[test]
    fn test_from_string() {
        let error: CoreError = "test error message".to_string().into();

        match error {
            CoreError::Other(msg) => {
                assert_eq!(msg, "test error message");
            }
            _ => panic!("Expected Other variant"),
        }
    }

    #[test]
    fn test_error_clone_and_eq() {
        let original = CoreError::WorkflowNotFound("wf_1".to_string());
        let cloned = original.clone();

        assert_eq!(original, cloned);
    }
}
