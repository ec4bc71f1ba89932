//! Persistence Gateway: the editor side of the JSON-over-HTTP flow API.
//!
//! The editor is a pure client here — load a flow's nodes and edges, push
//! the full layout back, publish a version. [`FlowStore`] is the seam the
//! session talks through; production code uses [`HttpFlowStore`], tests
//! substitute an in-memory implementation.

mod http;
pub mod wire;

use crate::error::GatewayError;
use async_trait::async_trait;

pub use http::HttpFlowStore;
pub use wire::{
    FlowStatus, LoadResponse, LoadedEdge, LoadedNode, PublishRequest, PublishResponse,
    SaveLayoutRequest, SaveLayoutResponse, SavedEdge, SavedNode,
};

/// Asynchronous access to flow persistence. None of the operations are
/// cancellable mid-flight and no retry policy is applied; a failed call is
/// reported once and left to the caller.
#[async_trait]
pub trait FlowStore: Send + Sync {
    async fn load(&self, flow_id: &str) -> Result<LoadResponse, GatewayError>;

    async fn save_layout(
        &self,
        request: &SaveLayoutRequest,
    ) -> Result<SaveLayoutResponse, GatewayError>;

    async fn publish(&self, flow_id: &str) -> Result<PublishResponse, GatewayError>;
}
