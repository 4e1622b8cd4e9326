//! Command implementations
//!
//! Each command is a module with an execute function that takes the
//! collected file list and parsed CLI args and runs the operation.

pub mod auto;
pub mod cleanup;
pub mod delete;
pub mod grep;
pub mod list;
pub mod rename;
pub mod wipeout;
pub mod write;

// Re-export execute functions for convenience
pub use auto::execute as auto;
pub use cleanup::execute as cleanup;
pub use delete::execute as delete;
pub use grep::execute as grep;
pub use list::execute as list;
pub use rename::execute as rename;
pub use wipeout::execute as wipeout;
pub use write::execute as write;
