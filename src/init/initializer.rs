use crate::admin::{AdminClient, ClusterStatus, RoleAssignment};
use crate::error::InitError;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info};

/// Zone assigned to every node in the initial layout.
pub const DEFAULT_ZONE: &str = "garage";

/// Version committed for a fresh cluster's first layout.
const INITIAL_LAYOUT_VERSION: u64 = 1;

/// Outcome of a bootstrap run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    /// The cluster already had a committed layout; nothing was changed.
    AlreadyInitialized,
    /// A layout covering `nodes` nodes was staged and applied.
    Applied { nodes: usize, messages: Vec<String> },
}

/// Drives the bootstrap sequence: wait for readiness, guard against
/// double-init, stage one role per node, commit the layout.
pub struct Initializer {
    client: AdminClient,
    capacity_bytes: u64,
    poll_interval: Duration,
}

impl Initializer {
    pub fn new(client: AdminClient, capacity_bytes: u64, poll_interval: Duration) -> Self {
        Self {
            client,
            capacity_bytes,
            poll_interval,
        }
    }

    /// Poll the cluster until every known node reports up, sleeping the
    /// full interval between attempts. Returns the snapshot that
    /// satisfied readiness.
    ///
    /// There is no upper bound: a cluster that never converges keeps this
    /// waiting until the operator kills the process.
    pub async fn wait_until_ready(&self) -> Result<ClusterStatus, InitError> {
        loop {
            let status = self.client.get_cluster_status().await?;
            if all_nodes_up(&status) {
                return Ok(status);
            }

            let down = status.nodes.iter().filter(|n| !n.is_up).count();
            info!(
                "Waiting for all nodes to be up... ({} of {} down)",
                down,
                status.nodes.len()
            );
            sleep(self.poll_interval).await;
        }
    }

    /// Stage the roles, then commit layout version 1. Both calls must
    /// succeed; a failure after staging leaves the cluster with a pending
    /// layout, which is out of this tool's control.
    pub async fn commit_layout(
        &self,
        roles: Vec<RoleAssignment>,
    ) -> Result<Vec<String>, InitError> {
        self.client.update_cluster_layout(roles).await?;
        let resp = self.client.apply_cluster_layout(INITIAL_LAYOUT_VERSION).await?;
        Ok(resp.message)
    }

    /// Full bootstrap flow.
    pub async fn run(&self) -> Result<InitOutcome, InitError> {
        let status = self.wait_until_ready().await?;

        if status.layout_version != 0 {
            info!(
                "Cluster layout already at version {}, nothing to do",
                status.layout_version
            );
            return Ok(InitOutcome::AlreadyInitialized);
        }

        let roles = build_roles(&status, self.capacity_bytes);
        let nodes = roles.len();
        debug!("Staging roles for {} nodes", nodes);

        let messages = self.commit_layout(roles).await?;
        Ok(InitOutcome::Applied { nodes, messages })
    }
}

/// Readiness predicate: every known node reports up. An empty node list is
/// vacuously ready; in practice the admin API always lists at least the
/// node that answered.
pub fn all_nodes_up(status: &ClusterStatus) -> bool {
    status.nodes.iter().all(|n| n.is_up)
}

/// One role per node, in status order: singleton hostname tag, fixed zone,
/// uniform capacity.
pub fn build_roles(status: &ClusterStatus, capacity_bytes: u64) -> Vec<RoleAssignment> {
    status
        .nodes
        .iter()
        .map(|node| RoleAssignment {
            id: node.id.clone(),
            tags: vec![node.hostname.clone()],
            zone: DEFAULT_ZONE.to_string(),
            capacity: capacity_bytes,
        })
        .collect()
}
