//! Wire types for the JSON persistence API, with the exact field names the
//! server speaks (`pos_x`, `from_node_id`, `id_map`, `action`), plus the
//! conversions between wire shapes and the in-memory graph model.

use crate::error::FlowConversionError;
use crate::graph::{Edge, GraphModel, Node};
use crate::registry::{self, ConfigMap, NodeType};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a flow, owned by the server and tracked read-only by
/// the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowStatus {
    #[default]
    Draft,
    Published,
    Paused,
}

/// Response to a `GET` load by flow id.
#[derive(Debug, Clone, Deserialize)]
pub struct LoadResponse {
    pub success: bool,
    #[serde(default)]
    pub nodes: Vec<LoadedNode>,
    #[serde(default)]
    pub edges: Vec<LoadedEdge>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<FlowStatus>,
}

/// A node as persisted: the config arrives as a JSON-encoded string and has
/// to be parsed before use.
#[derive(Debug, Clone, Deserialize)]
pub struct LoadedNode {
    pub id: String,
    #[serde(rename = "type")]
    pub type_tag: String,
    pub label: String,
    pub config: String,
    pub pos_x: i32,
    pub pos_y: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoadedEdge {
    pub id: String,
    pub from_node_id: String,
    pub to_node_id: String,
    #[serde(default)]
    pub condition: ConfigMap,
}

impl LoadedNode {
    /// Materializes a model node. An unknown type tag is unrecoverable (the
    /// editor could neither render nor re-save the node faithfully); a
    /// config string that fails to parse degrades to registry defaults.
    pub fn into_node(self) -> Result<Node, FlowConversionError> {
        let node_type = NodeType::from_tag(&self.type_tag).ok_or_else(|| {
            FlowConversionError::UnknownNodeType {
                node_id: self.id.clone(),
                type_tag: self.type_tag.clone(),
            }
        })?;
        let config = match serde_json::from_str::<ConfigMap>(&self.config) {
            Ok(config) => config,
            Err(err) => {
                log::warn!(
                    "node '{}': unparseable config string ({err}), falling back to defaults",
                    self.id
                );
                registry::default_config(node_type)
            }
        };
        Ok(Node {
            id: self.id,
            node_type,
            label: self.label,
            config,
            x: self.pos_x,
            y: self.pos_y,
        })
    }
}

impl LoadedEdge {
    pub fn into_edge(self) -> Edge {
        Edge {
            id: self.id,
            from: self.from_node_id,
            to: self.to_node_id,
            condition: self.condition,
        }
    }
}

/// Body of a `POST save_layout`: the full node/edge layout, replacing
/// whatever the server holds for this flow.
#[derive(Debug, Clone, Serialize)]
pub struct SaveLayoutRequest {
    pub action: &'static str,
    pub id: String,
    pub nodes: Vec<SavedNode>,
    pub edges: Vec<SavedEdge>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SavedNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub label: String,
    pub config: ConfigMap,
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SavedEdge {
    pub from: String,
    pub to: String,
    pub condition: ConfigMap,
}

impl SaveLayoutRequest {
    pub fn from_model(flow_id: &str, model: &GraphModel) -> Self {
        Self {
            action: "save_layout",
            id: flow_id.to_string(),
            nodes: model
                .nodes()
                .iter()
                .map(|n| SavedNode {
                    id: n.id.clone(),
                    node_type: n.node_type,
                    label: n.label.clone(),
                    config: n.config.clone(),
                    x: n.x,
                    y: n.y,
                })
                .collect(),
            edges: model
                .edges()
                .iter()
                .map(|e| SavedEdge {
                    from: e.from.clone(),
                    to: e.to.clone(),
                    condition: e.condition.clone(),
                })
                .collect(),
        }
    }
}

/// Response to `save_layout`. `id_map` rewrites provisional client ids
/// (`{type}_{millis}`) to the permanent ids the server assigned.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveLayoutResponse {
    pub success: bool,
    #[serde(default)]
    pub id_map: AHashMap<String, String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PublishRequest {
    pub action: &'static str,
    pub id: String,
}

impl PublishRequest {
    pub fn new(flow_id: &str) -> Self {
        Self {
            action: "publish",
            id: flow_id.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PublishResponse {
    pub success: bool,
    #[serde(default)]
    pub version: Option<u64>,
}
