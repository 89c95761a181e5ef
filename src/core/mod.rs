// Public modules
pub mod error;
pub mod fix;
pub mod migration;
pub mod rewrite;
pub mod walk;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use fix::{fix_tree, FixReport, FixedFile};
pub use migration::{Migration, Rewrite, Target};
