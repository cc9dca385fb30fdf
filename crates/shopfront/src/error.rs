use std::fmt;

/// Unified error type for the shopfront crate.
#[derive(Debug, Clone)]
pub enum CoreError {
    /// The category-listing collaborator failed.
    CategoryFetch(String),
    /// The product-listing collaborator failed.
    ProductFetch(String),
    /// Invalid input provided by the caller.
    InvalidInput(String),
    /// Internal error.
    Internal(String),
    /// Functionality that is not implemented yet.
    NotImplemented,
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::CategoryFetch(msg) => write!(f, "category fetch failed: {msg}"),
            CoreError::ProductFetch(msg) => write!(f, "product fetch failed: {msg}"),
            CoreError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            CoreError::Internal(msg) => write!(f, "internal error: {msg}"),
            CoreError::NotImplemented => write!(f, "not implemented"),
        }
    }
}

impl std::error::Error for CoreError {}

/// Result type alias using [`CoreError`].
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_collaborator_detail() {
        let error = CoreError::ProductFetch("connection refused".to_string());
        assert_eq!(
            error.to_string(),
            "product fetch failed: connection refused"
        );
        let error = CoreError::CategoryFetch("timeout".to_string());
        assert_eq!(error.to_string(), "category fetch failed: timeout");
    }
}
