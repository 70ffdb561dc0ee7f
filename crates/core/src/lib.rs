//! # pgspec Core
//!
//! Core rules, traits, and error handling for pgspec.
//!
//! This crate provides the foundational building blocks used throughout
//! the workspace, including:
//!
//! - **Identifiers**: deriving, quoting and validating PostgreSQL identifiers
//! - **Types**: column type aliases, referential actions, SQL literals
//! - **Traits**: `Validatable` for spec entities
//! - **Errors**: Unified error handling with `EngineError` and `EngineResult`
//!

pub mod error;
pub mod identifier;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{EngineError, EngineResult};
pub use identifier::{
    MAX_IDENTIFIER_LEN, derive_identifier, quote_identifier, quote_literal, validate_identifier,
};
pub use traits::Validatable;
pub use types::{ReferentialAction, format_sql_value, normalize_type};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
