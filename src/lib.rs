//! Grid block puzzle (workspace facade crate).
//!
//! This package exposes the `gridblock::{core,store,types}` public API while the
//! implementation lives in dedicated crates under `crates/`.

pub use gridblock_core as core;
pub use gridblock_store as store;
pub use gridblock_types as types;
