// Bank Ledger - Core Library
// Exposes the account entity for use in the CLI and tests

pub mod entities;

// Re-export commonly used types
pub use entities::{BankAccount, OutOfRange};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
