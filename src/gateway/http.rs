use super::wire::{LoadResponse, PublishRequest, PublishResponse, SaveLayoutRequest, SaveLayoutResponse};
use super::FlowStore;
use crate::error::GatewayError;
use async_trait::async_trait;
use reqwest::Client;

/// [`FlowStore`] over a single HTTP endpoint: loads via `GET ?id=`, writes
/// via `POST` bodies discriminated by their `action` field, matching the
/// server's dispatch convention.
#[derive(Debug, Clone)]
pub struct HttpFlowStore {
    client: Client,
    endpoint: String,
}

impl HttpFlowStore {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    /// Uses a caller-provided client (shared connection pool, custom TLS or
    /// timeout configuration).
    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl FlowStore for HttpFlowStore {
    async fn load(&self, flow_id: &str) -> Result<LoadResponse, GatewayError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("id", flow_id)])
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    async fn save_layout(
        &self,
        request: &SaveLayoutRequest,
    ) -> Result<SaveLayoutResponse, GatewayError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    async fn publish(&self, flow_id: &str) -> Result<PublishResponse, GatewayError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&PublishRequest::new(flow_id))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}
