//! # Fluxo - Headless Chatbot Flow-Editor Core
//!
//! **Fluxo** is the state-management core of a drag-and-drop chatbot flow
//! builder: the node-type registry, the in-memory graph of nodes and edges,
//! the schema-driven property form generator, and the pointer-gesture state
//! machine for the canvas. It owns no rendering and no persistence — a
//! frontend feeds it pointer events and form submissions, and a
//! [`gateway::FlowStore`] implementation carries the graph to and from the
//! server.
//!
//! ## Core Workflow
//!
//! 1. **Open a session**: [`EditorSession::load`] fetches a flow through a
//!    `FlowStore` and materializes the graph model (creating the start node
//!    for empty flows), or [`EditorSession::new`] starts an unsaved one.
//! 2. **Edit**: the canvas controller translates pointer gestures into
//!    model mutations (drag, pan, zoom, edge drawing); selecting a node and
//!    submitting its property form updates the node's config.
//! 3. **Persist**: [`EditorSession::save`] pushes the full layout and
//!    applies the server's id remap; [`EditorSession::publish`] saves and
//!    stamps a version.
//!
//! ## Quick Start
//!
//! ```rust
//! use fluxo::prelude::*;
//!
//! // A brand-new flow starts with its single start node in place.
//! let mut session = EditorSession::new("flow_42", "Welcome bot");
//!
//! // Drop a "wait" template onto the canvas and wire it up.
//! let start_id = session.model().start_node().unwrap().id.clone();
//! let wait_id = session.model_mut().add_node(NodeType::Wait, 320, 80).id.clone();
//! session.model_mut().add_edge(&start_id, &wait_id);
//!
//! // Registry defaults are in effect until the property form edits them.
//! let wait = session.model().node(&wait_id).unwrap();
//! assert_eq!(wait.config["seconds"], 3);
//! assert_eq!(wait.config["showTyping"], true);
//!
//! // Render the property panel, take an (unedited) submission, parse it
//! // back: the config round-trips exactly.
//! let form = form::render(wait);
//! let parsed = form::parse(NodeType::Wait, &form.submitted_values());
//! assert_eq!(parsed, wait.config);
//! ```

pub mod canvas;
pub mod error;
pub mod form;
pub mod gateway;
pub mod graph;
pub mod prelude;
pub mod registry;
pub mod session;
