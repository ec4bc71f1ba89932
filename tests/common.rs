//! Common test utilities: model builders and a canned in-memory flow store.
use async_trait::async_trait;
use fluxo::error::GatewayError;
use fluxo::gateway::{
    FlowStore, LoadResponse, PublishResponse, SaveLayoutRequest, SaveLayoutResponse,
};
use fluxo::prelude::*;
use std::sync::Mutex;

/// A model with a start node, one text bubble, and an edge between them.
#[allow(dead_code)]
pub fn small_model() -> (GraphModel, String, String) {
    let mut model = GraphModel::new();
    model.ensure_start_node();
    let start_id = model.start_node().unwrap().id.clone();
    let text_id = model.add_node(NodeType::Text, 300, 80).id.clone();
    assert!(model.add_edge(&start_id, &text_id));
    (model, start_id, text_id)
}

/// A `FlowStore` that answers from canned JSON bodies and records every
/// save request it sees, so tests can assert on the exact wire shape.
#[allow(dead_code)]
pub struct CannedStore {
    pub load_body: Mutex<String>,
    pub save_body: Mutex<String>,
    pub publish_body: Mutex<String>,
    pub save_requests: Mutex<Vec<serde_json::Value>>,
    pub publish_calls: Mutex<Vec<String>>,
}

impl Default for CannedStore {
    fn default() -> Self {
        Self {
            load_body: Mutex::new(r#"{"success": true, "nodes": [], "edges": []}"#.to_string()),
            save_body: Mutex::new(r#"{"success": true}"#.to_string()),
            publish_body: Mutex::new(r#"{"success": true, "version": 1}"#.to_string()),
            save_requests: Mutex::new(Vec::new()),
            publish_calls: Mutex::new(Vec::new()),
        }
    }
}

#[allow(dead_code)]
impl CannedStore {
    pub fn with_load_body(body: &str) -> Self {
        let store = Self::default();
        *store.load_body.lock().unwrap() = body.to_string();
        store
    }

    pub fn set_save_body(&self, body: &str) {
        *self.save_body.lock().unwrap() = body.to_string();
    }

    pub fn last_save_request(&self) -> serde_json::Value {
        self.save_requests.lock().unwrap().last().cloned().unwrap()
    }
}

#[async_trait]
impl FlowStore for CannedStore {
    async fn load(&self, _flow_id: &str) -> std::result::Result<LoadResponse, GatewayError> {
        Ok(serde_json::from_str(&self.load_body.lock().unwrap()).unwrap())
    }

    async fn save_layout(
        &self,
        request: &SaveLayoutRequest,
    ) -> std::result::Result<SaveLayoutResponse, GatewayError> {
        self.save_requests
            .lock()
            .unwrap()
            .push(serde_json::to_value(request).unwrap());
        Ok(serde_json::from_str(&self.save_body.lock().unwrap()).unwrap())
    }

    async fn publish(&self, flow_id: &str) -> std::result::Result<PublishResponse, GatewayError> {
        self.publish_calls.lock().unwrap().push(flow_id.to_string());
        Ok(serde_json::from_str(&self.publish_body.lock().unwrap()).unwrap())
    }
}
