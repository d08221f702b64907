//! Cluster bootstrap flow
//!
//! Readiness polling, role construction, and the two-phase layout commit
//! (stage then apply).

mod initializer;

pub use initializer::{all_nodes_up, build_roles, InitOutcome, Initializer, DEFAULT_ZONE};
