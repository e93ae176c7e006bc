//! Domain vocabulary shared by the persistence and HTTP layers.
//!
//! Nothing in this crate performs I/O.

pub mod error;
pub mod item_type;
pub mod pagination;
pub mod search;
pub mod types;
