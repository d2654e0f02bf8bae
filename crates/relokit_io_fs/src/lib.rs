//! `relokit_io_fs` v1:
//! Rust-side directory child-copy engine.
//!
//! Module layout:
//! - `copy`   : validation and child-copy orchestration
//! - `spec`   : options and error types
//! - `util`   : filesystem item primitives

pub mod copy;
pub mod spec;
mod util;

pub use copy::copy_all_children;
pub use spec::{CopyChildrenError, SpecCopyChildrenOptions};
