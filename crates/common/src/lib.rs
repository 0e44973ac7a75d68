//! Pieces shared by every crate in the workspace: small response types and
//! the tracing subscriber setup.

pub mod types;
pub mod utils;
