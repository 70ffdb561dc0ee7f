//! Foreign keys and indexes
//!
//! Both are rendered after the owning table is created, so they live
//! beside the table definition rather than inside a column.

use pgspec_core::{EngineError, EngineResult, ReferentialAction, Validatable};

// ============================================================================
// ForeignKeySpec
// ============================================================================

/// A (possibly composite) foreign key from the owning table to another table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeySpec {
    /// Local column names, in order
    pub columns: Vec<String>,

    /// Referenced table name
    pub references_table: String,

    /// Referenced column names, positionally matching `columns`
    pub references_columns: Vec<String>,

    /// Schema of the referenced table; `None` means the schema being generated
    pub references_schema: Option<String>,

    /// ON DELETE action
    pub on_delete: Option<ReferentialAction>,

    /// ON UPDATE action
    pub on_update: Option<ReferentialAction>,
}

impl ForeignKeySpec {
    /// Create a foreign key without referential actions
    pub fn new<C, R>(columns: C, references_table: impl Into<String>, references_columns: R) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            references_table: references_table.into(),
            references_columns: references_columns.into_iter().map(Into::into).collect(),
            references_schema: None,
            on_delete: None,
            on_update: None,
        }
    }

    /// Reference a table in another schema
    pub fn in_schema(mut self, schema: impl Into<String>) -> Self {
        self.references_schema = Some(schema.into());
        self
    }

    /// Set the ON DELETE action
    pub fn on_delete(mut self, action: ReferentialAction) -> Self {
        self.on_delete = Some(action);
        self
    }

    /// Set the ON UPDATE action
    pub fn on_update(mut self, action: ReferentialAction) -> Self {
        self.on_update = Some(action);
        self
    }

    /// Schema of the referenced table, falling back to `default_schema`
    pub fn target_schema<'a>(&'a self, default_schema: &'a str) -> &'a str {
        self.references_schema.as_deref().unwrap_or(default_schema)
    }
}

impl Validatable for ForeignKeySpec {
    fn validate(&self) -> EngineResult<()> {
        let path = format!("foreign key -> {}", self.references_table);

        if self.columns.is_empty() {
            return Err(EngineError::malformed(path, "columns cannot be empty"));
        }
        if self.references_columns.len() != self.columns.len() {
            return Err(EngineError::malformed(
                path,
                format!(
                    "{} local column(s) but {} referenced column(s)",
                    self.columns.len(),
                    self.references_columns.len()
                ),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// IndexSpec
// ============================================================================

/// A secondary index on the owning table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSpec {
    /// Explicit index name; derived from table and columns when `None`
    pub name: Option<String>,

    /// Indexed column names, in order
    pub columns: Vec<String>,

    /// Whether the index is UNIQUE
    pub unique: bool,
}

impl IndexSpec {
    /// Create a non-unique index with a derived name
    pub fn new<C>(columns: C) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            name: None,
            columns: columns.into_iter().map(Into::into).collect(),
            unique: false,
        }
    }

    /// Give the index an explicit name
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Make the index UNIQUE
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Index name: the explicit one, or `<table>_<col1>_..._<coln>_idx`
    pub fn resolved_name(&self, table: &str) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("{}_{}_idx", table, self.columns.join("_")),
        }
    }
}

impl Validatable for IndexSpec {
    fn validate(&self) -> EngineResult<()> {
        if self.columns.is_empty() {
            let path = match &self.name {
                Some(name) => format!("index '{}'", name),
                None => "index".to_string(),
            };
            return Err(EngineError::malformed(path, "columns cannot be empty"));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foreign_key_builder() {
        let fk = ForeignKeySpec::new(["org_id"], "orgs", ["id"])
            .on_delete(ReferentialAction::Cascade)
            .on_update(ReferentialAction::NoAction);

        assert_eq!(fk.columns, vec!["org_id"]);
        assert_eq!(fk.references_table, "orgs");
        assert_eq!(fk.on_delete, Some(ReferentialAction::Cascade));
        assert_eq!(fk.on_update, Some(ReferentialAction::NoAction));
        assert!(fk.is_valid());
    }

    #[test]
    fn test_foreign_key_target_schema() {
        let fk = ForeignKeySpec::new(["user_id"], "users", ["id"]);
        assert_eq!(fk.target_schema("acme"), "acme");

        let fk = fk.in_schema("auth");
        assert_eq!(fk.target_schema("acme"), "auth");
    }

    #[test]
    fn test_foreign_key_arity_mismatch() {
        let fk = ForeignKeySpec::new(["a", "b"], "other", ["x"]);
        let err = fk.validate().unwrap_err();
        assert!(err.to_string().contains("2 local column(s) but 1 referenced"));
    }

    #[test]
    fn test_foreign_key_empty_columns() {
        let fk = ForeignKeySpec::new(Vec::<String>::new(), "other", Vec::<String>::new());
        assert!(!fk.is_valid());
    }

    #[test]
    fn test_index_resolved_name() {
        let idx = IndexSpec::new(["org_id", "created_at"]);
        assert_eq!(idx.resolved_name("users"), "users_org_id_created_at_idx");

        let idx = IndexSpec::new(["email"]).named("users_by_email").unique();
        assert_eq!(idx.resolved_name("users"), "users_by_email");
        assert!(idx.unique);
    }

    #[test]
    fn test_index_validation() {
        assert!(IndexSpec::new(["a"]).is_valid());
        assert!(!IndexSpec::new(Vec::<String>::new()).is_valid());
    }
}
