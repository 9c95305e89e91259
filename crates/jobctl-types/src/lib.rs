//! Pure data types for jobctl — job snapshots, exit statuses, tool schemas.
//!
//! This crate is a leaf dependency with no async runtime and no I/O. It exists
//! so that embedders can talk about jobs and builtin results without pulling
//! in jobctl-kernel.

pub mod job;
pub mod result;
pub mod status;
pub mod tool;
pub mod value;

// Flat re-exports for convenience
pub use job::*;
pub use result::*;
pub use status::*;
pub use tool::*;
pub use value::*;
