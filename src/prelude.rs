//! Prelude module for convenient imports
//!
//! Re-exports the types an embedding frontend touches most: the session,
//! the graph model and its node/edge types, the registry vocabulary, the
//! canvas event types, and the gateway seam.
//!
//! # Example
//!
//! ```rust
//! use fluxo::prelude::*;
//!
//! let mut session = EditorSession::new("flow_1", "Support bot");
//! let id = session.model_mut().add_node(NodeType::Text, 200, 120).id.clone();
//! session.model_mut().update_node_config(
//!     &id,
//!     [("text".to_string(), serde_json::json!("Hello!"))].into_iter().collect(),
//! );
//! ```

// Session and model
pub use crate::graph::{Edge, GraphModel, Node};
pub use crate::session::EditorSession;

// Node type vocabulary and schemas
pub use crate::registry::{
    ALL_NODE_TYPES, ConfigMap, FieldDescriptor, FieldKind, NodeCategory, NodeType,
};

// Property forms
pub use crate::form::{self, PropertyForm, SubmittedValues};

// Canvas events
pub use crate::canvas::{CanvasController, ModeKind, PointerPos, PointerTarget, WheelDirection};

// Persistence
pub use crate::gateway::{FlowStatus, FlowStore, HttpFlowStore};

// Error types
pub use crate::error::{FlowConversionError, GatewayError, GraphError, SessionError};

/// Convenience alias for fallible editor operations.
pub type Result<T> = std::result::Result<T, SessionError>;
