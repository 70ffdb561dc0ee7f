//! # pgspec CLI
//!
//! Command-line interface for pgspec.
//!
//! ## Commands
//!
//! - `generate` - Render a spec file to SQL; write, print or apply it
//! - `validate` - Check a spec file renders cleanly, print a summary
//! - `derive-name` - Show the schema name derived from a label
//!

pub mod apply;
pub mod args;
pub mod commands;
pub mod config;

pub use args::{Cli, Commands};
pub use commands::run;
pub use config::DbConfig;

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert_eq!(NAME, "pgspec_cli");
    }
}
