use thiserror::Error;

/// Errors that can occur while mutating the in-memory graph model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("The start node '{node_id}' cannot be deleted")]
    StartNodeProtected { node_id: String },
}

/// Errors that can occur while talking to the persistence gateway.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("The server rejected the '{action}' request for flow '{flow_id}'")]
    Rejected { action: String, flow_id: String },
}

/// Errors that can occur when converting a persisted flow payload into the
/// in-memory graph model.
#[derive(Error, Debug, Clone)]
pub enum FlowConversionError {
    #[error("Node '{node_id}' has an unknown node type tag: '{type_tag}'")]
    UnknownNodeType { node_id: String, type_tag: String },
}

/// Errors surfaced by an editor session's load/save/publish orchestration.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Conversion(#[from] FlowConversionError),

    #[error("A save for flow '{flow_id}' is already in flight")]
    SaveInFlight { flow_id: String },
}
