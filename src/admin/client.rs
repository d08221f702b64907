use crate::admin::types::{
    ApplyLayoutRequest, ApplyLayoutResponse, ClusterStatus, RoleAssignment, UpdateLayoutRequest,
};
use crate::error::InitError;
use reqwest::{Client, RequestBuilder};
use std::time::Duration;
use tracing::debug;

const STATUS_TIMEOUT: Duration = Duration::from_secs(10);
const LAYOUT_TIMEOUT: Duration = Duration::from_secs(30);

/// Thin client for the Garage admin HTTP API.
///
/// Each call is independent and stateless; non-2xx responses and transport
/// failures surface as [`InitError::Http`].
pub struct AdminClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl AdminClient {
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        Self {
            http: Client::new(),
            // no trailing slash, endpoints are joined with one
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn endpoint(&self, name: &str) -> String {
        format!("{}/v2/{}", self.base_url, name)
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// `GET /v2/GetClusterStatus`
    pub async fn get_cluster_status(&self) -> Result<ClusterStatus, InitError> {
        let url = self.endpoint("GetClusterStatus");
        debug!("GET {}", url);

        let resp = self
            .authorize(self.http.get(&url).timeout(STATUS_TIMEOUT))
            .send()
            .await?
            .error_for_status()?;

        Ok(resp.json().await?)
    }

    /// `POST /v2/UpdateClusterLayout` — stage the given roles.
    pub async fn update_cluster_layout(
        &self,
        roles: Vec<RoleAssignment>,
    ) -> Result<(), InitError> {
        let url = self.endpoint("UpdateClusterLayout");
        debug!("POST {} ({} roles)", url, roles.len());

        self.authorize(self.http.post(&url).timeout(LAYOUT_TIMEOUT))
            .json(&UpdateLayoutRequest { roles })
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }

    /// `POST /v2/ApplyClusterLayout` — commit the staged layout at `version`.
    pub async fn apply_cluster_layout(
        &self,
        version: u64,
    ) -> Result<ApplyLayoutResponse, InitError> {
        let url = self.endpoint("ApplyClusterLayout");
        debug!("POST {} (version {})", url, version);

        let resp = self
            .authorize(self.http.post(&url).timeout(LAYOUT_TIMEOUT))
            .json(&ApplyLayoutRequest { version })
            .send()
            .await?
            .error_for_status()?;

        Ok(resp.json().await?)
    }
}
