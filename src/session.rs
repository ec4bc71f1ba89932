//! The editor session: one object owning the graph model, the canvas
//! controller, and the load/save/publish orchestration for a single flow.
//!
//! All mutation happens through this object (or the model/canvas it hands
//! out); there is no ambient global state. The session assumes exclusive
//! single-editor ownership of its flow for its lifetime.

use crate::canvas::CanvasController;
use crate::error::{GatewayError, SessionError};
use crate::gateway::{FlowStatus, FlowStore, SaveLayoutRequest};
use crate::graph::{Edge, GraphModel, Node};

/// An open flow in the editor.
#[derive(Debug)]
pub struct EditorSession {
    flow_id: String,
    name: String,
    status: FlowStatus,
    version: Option<u64>,
    model: GraphModel,
    canvas: CanvasController,
    save_in_flight: bool,
}

impl EditorSession {
    /// Starts an editing session for a flow that has never been persisted.
    /// The model immediately satisfies the single-start invariant.
    pub fn new(flow_id: impl Into<String>, name: impl Into<String>) -> Self {
        let mut model = GraphModel::new();
        model.ensure_start_node();
        Self {
            flow_id: flow_id.into(),
            name: name.into(),
            status: FlowStatus::Draft,
            version: None,
            model,
            canvas: CanvasController::new(),
            save_in_flight: false,
        }
    }

    /// Loads a persisted flow into a fresh session. A flow persisted with
    /// zero nodes gains its start node here; edges that arrive pointing at
    /// missing nodes are logged and carried as-is (they are invisible but
    /// harmless, and dropping them would lose data on the next save).
    pub async fn load(store: &dyn FlowStore, flow_id: &str) -> Result<Self, SessionError> {
        let response = store.load(flow_id).await?;
        if !response.success {
            return Err(GatewayError::Rejected {
                action: "load".to_string(),
                flow_id: flow_id.to_string(),
            }
            .into());
        }

        let name = response.name.unwrap_or_default();
        let status = response.status.unwrap_or_default();
        let nodes: Vec<Node> = response
            .nodes
            .into_iter()
            .map(|n| n.into_node())
            .collect::<Result<_, _>>()?;
        let edges: Vec<Edge> = response.edges.into_iter().map(|e| e.into_edge()).collect();

        let mut model = GraphModel::from_parts(nodes, edges);
        model.ensure_start_node();
        let dangling = model.dangling_edges().len();
        if dangling > 0 {
            log::warn!("flow '{flow_id}': {dangling} edge(s) reference missing nodes");
        }

        Ok(Self {
            flow_id: flow_id.to_string(),
            name,
            status,
            version: None,
            model,
            canvas: CanvasController::new(),
            save_in_flight: false,
        })
    }

    pub fn flow_id(&self) -> &str {
        &self.flow_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> FlowStatus {
        self.status
    }

    pub fn published_version(&self) -> Option<u64> {
        self.version
    }

    pub fn save_in_flight(&self) -> bool {
        self.save_in_flight
    }

    pub fn model(&self) -> &GraphModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut GraphModel {
        &mut self.model
    }

    pub fn canvas(&self) -> &CanvasController {
        &self.canvas
    }

    /// Splits the session into the canvas controller and the model it drives,
    /// since pointer handlers need both mutably.
    pub fn canvas_and_model(&mut self) -> (&mut CanvasController, &mut GraphModel) {
        (&mut self.canvas, &mut self.model)
    }

    /// Persists the full node/edge layout. Guarded by an in-flight flag so a
    /// second save cannot race the first; a failed save leaves the in-memory
    /// graph untouched and must be retried explicitly by the user.
    ///
    /// On success the server's `id_map` is applied to node ids and edge
    /// endpoints alike, so provisional client ids disappear consistently.
    pub async fn save(&mut self, store: &dyn FlowStore) -> Result<(), SessionError> {
        if self.save_in_flight {
            return Err(SessionError::SaveInFlight {
                flow_id: self.flow_id.clone(),
            });
        }
        let request = SaveLayoutRequest::from_model(&self.flow_id, &self.model);

        self.save_in_flight = true;
        let result = store.save_layout(&request).await;
        self.save_in_flight = false;

        let response = result?;
        if !response.success {
            return Err(GatewayError::Rejected {
                action: "save_layout".to_string(),
                flow_id: self.flow_id.clone(),
            }
            .into());
        }
        self.model.apply_id_map(&response.id_map);
        Ok(())
    }

    /// Publishes the flow: saves the layout first (publish implies persist),
    /// then posts the publish action and records the returned version.
    pub async fn publish(&mut self, store: &dyn FlowStore) -> Result<Option<u64>, SessionError> {
        self.save(store).await?;

        let response = store.publish(&self.flow_id).await?;
        if !response.success {
            return Err(GatewayError::Rejected {
                action: "publish".to_string(),
                flow_id: self.flow_id.clone(),
            }
            .into());
        }
        self.version = response.version;
        self.status = FlowStatus::Published;
        Ok(response.version)
    }
}
