//! Core types used throughout pgspec
//!
//! Column type aliases, referential actions for foreign keys, and
//! formatting of JSON scalar values as SQL literals.

use serde_json::Value;

use crate::identifier::quote_literal;

// ============================================================================
// Column Types
// ============================================================================

/// Map a friendly type alias onto its canonical PostgreSQL type name.
///
/// Lookup is case-insensitive and ignores surrounding whitespace. Anything
/// not in the alias table is returned unchanged, on the assumption that the
/// caller wrote a literal SQL type (`varchar(32)`, `text[]`, `citext`, ...).
pub fn normalize_type(raw: &str) -> String {
    let canonical = match raw.trim().to_lowercase().as_str() {
        "string" | "text" => "text",
        "shorttext" => "varchar(255)",
        "uuid" => "uuid",
        "int" | "integer" => "integer",
        "bigint" => "bigint",
        "float" | "double" => "double precision",
        "decimal" => "decimal",
        "numeric" => "numeric",
        "bool" | "boolean" => "boolean",
        "date" => "date",
        "timestamp" | "timestamptz" => "timestamp with time zone",
        "json" | "jsonb" => "jsonb",
        _ => return raw.to_string(),
    };
    canonical.to_string()
}

// ============================================================================
// Referential Actions
// ============================================================================

/// Action taken on referencing rows when a referenced row changes
///
/// The five standard keywords are recognized; any other text is kept as
/// `Raw` and rendered verbatim, so clauses such as `SET NULL (author_id)`
/// still reach the server. Like column defaults, raw actions are the
/// caller's SQL and are not sanitized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReferentialAction {
    /// Delete or update the referencing rows as well
    Cascade,
    /// Set the referencing columns to NULL
    SetNull,
    /// Set the referencing columns to their defaults
    SetDefault,
    /// Reject the change immediately
    Restrict,
    /// Reject the change at the end of the statement
    NoAction,
    /// Any other action text, trimmed
    Raw(String),
}

impl ReferentialAction {
    /// Convert to SQL keyword(s)
    pub fn to_sql(&self) -> &str {
        match self {
            ReferentialAction::Cascade => "CASCADE",
            ReferentialAction::SetNull => "SET NULL",
            ReferentialAction::SetDefault => "SET DEFAULT",
            ReferentialAction::Restrict => "RESTRICT",
            ReferentialAction::NoAction => "NO ACTION",
            ReferentialAction::Raw(text) => text,
        }
    }

    /// Parse an action as written in a spec document.
    ///
    /// Keywords are case-insensitive and words may be separated by spaces
    /// or underscores, so `"SET NULL"`, `"set_null"` and `"Set Null"` are
    /// all `SetNull`. Blank text is `None`; anything else is `Raw`.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let words: Vec<String> = text
            .split(|c: char| c.is_whitespace() || c == '_')
            .filter(|w| !w.is_empty())
            .map(|w| w.to_ascii_uppercase())
            .collect();

        let action = match words.join(" ").as_str() {
            "CASCADE" => ReferentialAction::Cascade,
            "SET NULL" => ReferentialAction::SetNull,
            "SET DEFAULT" => ReferentialAction::SetDefault,
            "RESTRICT" => ReferentialAction::Restrict,
            "NO ACTION" => ReferentialAction::NoAction,
            _ => ReferentialAction::Raw(text.to_string()),
        };
        Some(action)
    }
}

impl std::fmt::Display for ReferentialAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_sql())
    }
}

// ============================================================================
// SQL Literals
// ============================================================================

/// Format a JSON value as a SQL literal.
///
/// `null` becomes `NULL`, booleans become `TRUE`/`FALSE`, numbers keep their
/// JSON text, and strings are single-quoted with `'` doubled. Arrays and
/// objects are written as a quoted JSON string, which PostgreSQL casts
/// implicitly when the target column is `json`/`jsonb`.
pub fn format_sql_value(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Bool(true) => "TRUE".to_string(),
        Value::Bool(false) => "FALSE".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => quote_literal(s),
        Value::Array(_) | Value::Object(_) => quote_literal(&value.to_string()),
    }
}

// ============================================================================
// Tests
// ============================================================================
