use serde::{Deserialize, Serialize};

/// Cluster snapshot returned by `GET /v2/GetClusterStatus`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterStatus {
    /// Known nodes, in the order the admin API reports them.
    #[serde(default)]
    pub nodes: Vec<NodeInfo>,

    /// Version of the committed layout; 0 means uninitialized.
    pub layout_version: u64,
}

/// One known node as reported by the admin API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeInfo {
    pub id: String,
    pub hostname: String,
    #[serde(default)]
    pub is_up: bool,
}

/// Storage role staged for a node in the cluster layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    pub id: String,
    pub tags: Vec<String>,
    pub zone: String,
    /// Capacity in bytes.
    pub capacity: u64,
}

/// Body of `POST /v2/UpdateClusterLayout`.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateLayoutRequest {
    pub roles: Vec<RoleAssignment>,
}

/// Body of `POST /v2/ApplyClusterLayout`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApplyLayoutRequest {
    pub version: u64,
}

/// Response of `POST /v2/ApplyClusterLayout`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApplyLayoutResponse {
    #[serde(default)]
    pub message: Vec<String>,
}
