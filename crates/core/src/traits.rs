//! Core traits for pgspec

use crate::error::EngineResult;

// ============================================================================
// Validatable Trait
// ============================================================================

/// Trait for types that can be validated
///
/// Spec entities implement this to check their structural consistency
/// (non-empty column lists, matching foreign-key arity, ...). Identifier
/// rules are enforced separately, at the point an identifier is rendered.
///
/// # Example
///
/// ```rust,ignore
/// use pgspec_core::{EngineError, EngineResult, Validatable};
///
/// struct Index {
///     columns: Vec<String>,
/// }
///
/// impl Validatable for Index {
///     fn validate(&self) -> EngineResult<()> {
///         if self.columns.is_empty() {
///             return Err(EngineError::malformed("index", "no columns"));
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Validatable {
    /// Validate the current state of the object
    ///
    /// Returns `Ok(())` if valid, or an `EngineError` describing the problem.
    fn validate(&self) -> EngineResult<()>;

    /// Check if the object is valid without returning error details
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    struct TestValidatable {
        valid: bool,
    }

    impl Validatable for TestValidatable {
        fn validate(&self) -> EngineResult<()> {
            if self.valid {
                Ok(())
            } else {
                Err(EngineError::malformed("test", "Invalid state"))
            }
        }
    }

    #[test]
    fn test_validatable_trait() {
        let valid = TestValidatable { valid: true };
        assert!(valid.is_valid());

        let invalid = TestValidatable { valid: false };
        assert!(!invalid.is_valid());
        assert!(invalid.validate().unwrap_err().is_spec_error());
    }
}
