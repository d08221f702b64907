//! Garage admin API
//!
//! Wire types for the three `/v2` endpoints this tool uses, and a thin
//! reqwest client that sends the optional bearer token.

mod client;
mod types;

pub use client::AdminClient;
pub use types::{ApplyLayoutResponse, ClusterStatus, NodeInfo, RoleAssignment};
