//! Identifier rules for PostgreSQL objects
//!
//! Schema, table, column, constraint and index names all pass through this
//! module: free-form labels are turned into identifiers, identifiers are
//! checked against the server's length limit and quoted before they are
//! written into SQL.

use crate::error::{EngineError, EngineResult};

/// Maximum identifier length accepted by PostgreSQL (NAMEDATALEN - 1)
pub const MAX_IDENTIFIER_LEN: usize = 63;

/// Prefix used when a derived identifier would not start with a letter
const FALLBACK_PREFIX: &str = "app";

/// Derive a valid identifier from free-form text.
///
/// The text is lower-cased, every run of characters outside `[a-z0-9]`
/// becomes a single `_`, and leading/trailing underscores are trimmed.
/// Results that are empty or start with a digit get an `app` prefix.
/// Never fails.
///
/// # Example
///
/// ```rust
/// use pgspec_core::derive_identifier;
///
/// assert_eq!(derive_identifier("Acme CRM!!"), "acme_crm");
/// assert_eq!(derive_identifier("42 things"), "app_42_things");
/// assert_eq!(derive_identifier(""), "app");
/// ```
pub fn derive_identifier(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let mut base = String::with_capacity(lowered.len());

    for c in lowered.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            base.push(c);
        } else if !base.ends_with('_') {
            base.push('_');
        }
    }

    let base = base.trim_matches('_');

    let mut ident = if base.is_empty() {
        FALLBACK_PREFIX.to_string()
    } else if !base.starts_with(|c: char| c.is_ascii_lowercase()) {
        format!("{}_{}", FALLBACK_PREFIX, base)
    } else {
        base.to_string()
    };

    // Only ASCII remains, so byte truncation is safe
    ident.truncate(MAX_IDENTIFIER_LEN);
    ident
}

/// Wrap an identifier in double quotes, doubling any embedded quote.
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Wrap text in single quotes as a SQL string literal, doubling any
/// embedded single quote.
pub fn quote_literal(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

/// Check that an identifier is non-empty and within the length limit.
pub fn validate_identifier(name: &str) -> EngineResult<()> {
    if name.is_empty() {
        return Err(EngineError::invalid_identifier(
            name,
            "identifier cannot be empty",
        ));
    }

    let len = name.chars().count();
    if len > MAX_IDENTIFIER_LEN {
        return Err(EngineError::invalid_identifier(
            name,
            format!(
                "identifier exceeds {} characters ({})",
                MAX_IDENTIFIER_LEN, len
            ),
        ));
    }

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn unquote(quoted: &str) -> String {
        quoted[1..quoted.len() - 1].replace("\"\"", "\"")
    }

    #[test]
    fn test_derive_identifier_examples() {
        assert_eq!(derive_identifier("Acme CRM!!"), "acme_crm");
        assert_eq!(derive_identifier(""), "app");
        assert_eq!(derive_identifier("   "), "app");
        assert_eq!(derive_identifier("!!!"), "app");
        assert_eq!(derive_identifier("My--Cool__App"), "my_cool_app");
        assert_eq!(derive_identifier("2024 Budget"), "app_2024_budget");
        assert_eq!(derive_identifier("_leading and trailing_"), "leading_and_trailing");
        assert_eq!(derive_identifier("Café Müller"), "caf_m_ller");
    }

    #[test]
    fn test_derive_identifier_truncates() {
        let long = "a".repeat(100);
        let ident = derive_identifier(&long);
        assert_eq!(ident.len(), MAX_IDENTIFIER_LEN);

        let long_digits = "9".repeat(100);
        let ident = derive_identifier(&long_digits);
        assert_eq!(ident.len(), MAX_IDENTIFIER_LEN);
        assert!(ident.starts_with("app_9"));
    }

    #[test]
    fn test_derive_identifier_properties() {
        let inputs = [
            "",
            "Acme CRM!!",
            "123",
            "___",
            "日本語のアプリ",
            "Hello, World",
            "x",
            "9lives",
            "a b c d e f g h i j k l m n o p q r s t u v w x y z 0 1 2 3 4 5 6 7 8 9",
            "\"quoted\" name",
            "tab\tseparated\nlines",
        ];

        for input in inputs {
            let ident = derive_identifier(input);
            assert!(!ident.is_empty(), "empty for {:?}", input);
            assert!(ident.len() <= MAX_IDENTIFIER_LEN, "too long for {:?}", input);
            assert!(
                ident.starts_with(|c: char| c.is_ascii_lowercase()),
                "bad start for {:?}: {}",
                input,
                ident
            );
            assert!(
                ident
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
                "bad chars for {:?}: {}",
                input,
                ident
            );
            assert!(validate_identifier(&ident).is_ok());
        }
    }

    #[test]
    fn test_quote_identifier() {
        assert_eq!(quote_identifier("users"), "\"users\"");
        assert_eq!(quote_identifier("we\"ird"), "\"we\"\"ird\"");
        assert_eq!(quote_identifier(""), "\"\"");
    }

    #[test]
    fn test_quote_identifier_round_trip() {
        for name in ["a\"b", "\"", "\"\"", "plain", "x\"y\"z", "say \"hi\""] {
            let quoted = quote_identifier(name);
            assert!(quoted.starts_with('"') && quoted.ends_with('"'));
            assert_eq!(unquote(&quoted), name);
        }
    }

    #[test]
    fn test_quote_literal() {
        assert_eq!(quote_literal("acme"), "'acme'");
        assert_eq!(quote_literal("o'brien"), "'o''brien'");
    }

    #[test]
    fn test_validate_identifier() {
        assert!(validate_identifier("users").is_ok());
        assert!(validate_identifier(&"a".repeat(63)).is_ok());

        let err = validate_identifier("").unwrap_err();
        assert!(matches!(err, EngineError::InvalidIdentifier { .. }));

        let err = validate_identifier(&"a".repeat(64)).unwrap_err();
        assert!(err.to_string().contains("exceeds 63 characters"));
    }
}
