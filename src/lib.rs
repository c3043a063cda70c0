//! Tilematch (workspace facade crate).
//!
//! This package keeps the public `tilematch::{core,term,types}` API in
//! one place while the implementation lives in dedicated crates under
//! `crates/`.

pub use tilematch_core as core;
pub use tilematch_term as term;
pub use tilematch_types as types;
