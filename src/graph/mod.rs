//! The in-memory graph model: nodes, edges, and the structural operations
//! the canvas and property panel mutate it through.
//!
//! The model favors silent degradation over crashing: operations referencing
//! unknown ids log and no-op, and redundant edge insertions are ignored,
//! because in a visual editor losing user state is worse than missing a
//! redraw.

mod ids;

use crate::error::GraphError;
use crate::registry::{self, ConfigMap, NodeType};
use serde::{Deserialize, Serialize};

pub use ids::IdGenerator;

/// Canvas position a freshly created start node is placed at.
pub const START_NODE_POSITION: (i32, i32) = (80, 80);

/// A single node in the flow graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Opaque id, stable for the session. Client-generated as
    /// `{type}_{millis}` until the first save assigns a permanent one.
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub label: String,
    pub config: ConfigMap,
    pub x: i32,
    pub y: i32,
}

/// A directed edge between two nodes. `condition` tags which branch the
/// edge represents for branching node types; the graph model treats it as
/// opaque data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub condition: ConfigMap,
}

/// The mutable node/edge collections for one flow, loaded once at editor
/// start and persisted explicitly via the gateway.
#[derive(Debug, Default)]
pub struct GraphModel {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    ids: IdGenerator,
}

impl GraphModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a model from already-materialized collections (the load
    /// path). Caller is responsible for id uniqueness.
    pub fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self {
            nodes,
            edges,
            ids: IdGenerator::default(),
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    fn node_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    pub fn start_node(&self) -> Option<&Node> {
        self.nodes.iter().find(|n| n.node_type == NodeType::Start)
    }

    /// Places a new node with registry defaults. Always succeeds.
    pub fn add_node(&mut self, node_type: NodeType, x: i32, y: i32) -> &Node {
        let node = Node {
            id: self.ids.next_node_id(node_type),
            node_type,
            label: registry::default_label(node_type).to_string(),
            config: registry::default_config(node_type),
            x,
            y,
        };
        self.nodes.push(node);
        self.nodes.last().expect("node was just pushed")
    }

    /// Updates a node's position. Unknown ids are tolerated (a drag can race
    /// an async reload) and only logged.
    pub fn move_node(&mut self, id: &str, x: i32, y: i32) {
        match self.node_mut(id) {
            Some(node) => {
                node.x = x;
                node.y = y;
            }
            None => log::warn!("move_node: unknown node id '{id}', ignoring"),
        }
    }

    /// Removes a node and every edge touching it. The sole start node is
    /// protected; unknown ids log and no-op.
    pub fn delete_node(&mut self, id: &str) -> Result<(), GraphError> {
        let Some(node) = self.node(id) else {
            log::warn!("delete_node: unknown node id '{id}', ignoring");
            return Ok(());
        };
        if !node.node_type.is_deletable() {
            return Err(GraphError::StartNodeProtected {
                node_id: id.to_string(),
            });
        }
        self.nodes.retain(|n| n.id != id);
        self.edges.retain(|e| e.from != id && e.to != id);
        Ok(())
    }

    /// Connects two nodes. Self-loops, duplicate (from, to) pairs, unknown
    /// endpoints, and edges into the start node are silently ignored —
    /// intentional idempotence, the gesture layer never surfaces these as
    /// errors. Returns whether an edge was appended.
    pub fn add_edge(&mut self, from: &str, to: &str) -> bool {
        self.add_edge_tagged(from, to, ConfigMap::new())
    }

    /// `add_edge` with a branch tag (used by condition / A/B-test outputs).
    pub fn add_edge_tagged(&mut self, from: &str, to: &str, condition: ConfigMap) -> bool {
        if from == to {
            log::debug!("add_edge: self-loop on '{from}' ignored");
            return false;
        }
        if self.edges.iter().any(|e| e.from == from && e.to == to) {
            log::debug!("add_edge: duplicate edge '{from}' -> '{to}' ignored");
            return false;
        }
        let (Some(_), Some(target)) = (self.node(from), self.node(to)) else {
            log::warn!("add_edge: unknown endpoint in '{from}' -> '{to}', ignoring");
            return false;
        };
        if !target.node_type.accepts_incoming() {
            log::debug!("add_edge: '{to}' does not accept incoming edges, ignoring");
            return false;
        }
        self.edges.push(Edge {
            id: self.ids.next_edge_id(),
            from: from.to_string(),
            to: to.to_string(),
            condition,
        });
        true
    }

    /// Shallow-merges `patch` into a node's config. Keys outside the type's
    /// schema are stored as-is; the schema is advisory for the form, not a
    /// hard constraint on the model.
    pub fn update_node_config(&mut self, id: &str, patch: ConfigMap) {
        match self.node_mut(id) {
            Some(node) => node.config.extend(patch),
            None => log::warn!("update_node_config: unknown node id '{id}', ignoring"),
        }
    }

    pub fn rename_node(&mut self, id: &str, label: &str) {
        match self.node_mut(id) {
            Some(node) => node.label = label.to_string(),
            None => log::warn!("rename_node: unknown node id '{id}', ignoring"),
        }
    }

    /// Guarantees the single-start invariant for freshly created flows: an
    /// empty model gains one start node at the default position.
    pub fn ensure_start_node(&mut self) {
        if self.nodes.is_empty() {
            let (x, y) = START_NODE_POSITION;
            self.add_node(NodeType::Start, x, y);
        }
    }

    /// Rewrites provisional node ids to server-assigned ones after a save,
    /// consistently across nodes and edge endpoints so no edge is left
    /// pointing at a stale client id.
    pub fn apply_id_map(&mut self, id_map: &ahash::AHashMap<String, String>) {
        if id_map.is_empty() {
            return;
        }
        for node in &mut self.nodes {
            if let Some(new_id) = id_map.get(&node.id) {
                node.id = new_id.clone();
            }
        }
        for edge in &mut self.edges {
            if let Some(new_from) = id_map.get(&edge.from) {
                edge.from = new_from.clone();
            }
            if let Some(new_to) = id_map.get(&edge.to) {
                edge.to = new_to.clone();
            }
        }
    }

    /// Edges whose endpoints no longer resolve to a node. Always empty under
    /// normal operation; exposed as a diagnostic for load-path sanity checks.
    pub fn dangling_edges(&self) -> Vec<&Edge> {
        self.edges
            .iter()
            .filter(|e| self.node(&e.from).is_none() || self.node(&e.to).is_none())
            .collect()
    }
}
