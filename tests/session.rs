//! Session orchestration tests: load materialization, the save wire shape,
//! id remapping across nodes and edges, failure semantics, and publish.
mod common;

use common::CannedStore;
use fluxo::error::SessionError;
use fluxo::prelude::*;
use serde_json::json;

const LOADED_FLOW: &str = r#"{
    "success": true,
    "name": "Support bot",
    "status": "draft",
    "nodes": [
        {
            "id": "n_1",
            "type": "start",
            "label": "Start",
            "config": "{}",
            "pos_x": 80,
            "pos_y": 80
        },
        {
            "id": "n_2",
            "type": "wait",
            "label": "Wait",
            "config": "{\"seconds\": 10, \"showTyping\": false}",
            "pos_x": 320,
            "pos_y": 80
        }
    ],
    "edges": [
        {"id": "e_1", "from_node_id": "n_1", "to_node_id": "n_2", "condition": {}}
    ]
}"#;

#[tokio::test]
async fn load_materializes_nodes_edges_and_parses_config_strings() {
    let store = CannedStore::with_load_body(LOADED_FLOW);
    let session = EditorSession::load(&store, "flow_7").await.unwrap();

    assert_eq!(session.flow_id(), "flow_7");
    assert_eq!(session.name(), "Support bot");
    assert_eq!(session.status(), FlowStatus::Draft);
    assert_eq!(session.model().nodes().len(), 2);
    assert_eq!(session.model().edges().len(), 1);

    let wait = session.model().node("n_2").unwrap();
    assert_eq!(wait.node_type, NodeType::Wait);
    assert_eq!(wait.config["seconds"], json!(10));
    assert_eq!(wait.config["showTyping"], json!(false));
    assert_eq!((wait.x, wait.y), (320, 80));
}

#[tokio::test]
async fn an_empty_flow_gains_exactly_one_start_node() {
    let store = CannedStore::default();
    let session = EditorSession::load(&store, "flow_new").await.unwrap();

    let starts: Vec<_> = session
        .model()
        .nodes()
        .iter()
        .filter(|n| n.node_type == NodeType::Start)
        .collect();
    assert_eq!(starts.len(), 1);
    assert_eq!(
        (starts[0].x, starts[0].y),
        fluxo::graph::START_NODE_POSITION
    );
}

#[tokio::test]
async fn an_unparseable_config_string_degrades_to_defaults() {
    let body = r#"{
        "success": true,
        "nodes": [
            {"id": "n_9", "type": "rating", "label": "Rating",
             "config": "{not json", "pos_x": 0, "pos_y": 0}
        ],
        "edges": []
    }"#;
    let store = CannedStore::with_load_body(body);
    let session = EditorSession::load(&store, "flow_9").await.unwrap();
    assert_eq!(session.model().node("n_9").unwrap().config["max"], json!(5));
}

#[tokio::test]
async fn an_unknown_node_type_fails_the_load() {
    let body = r#"{
        "success": true,
        "nodes": [
            {"id": "n_1", "type": "hologram", "label": "?",
             "config": "{}", "pos_x": 0, "pos_y": 0}
        ],
        "edges": []
    }"#;
    let store = CannedStore::with_load_body(body);
    let err = EditorSession::load(&store, "flow_x").await.unwrap_err();
    assert!(matches!(err, SessionError::Conversion(_)), "got {err:?}");
}

#[tokio::test]
async fn save_sends_the_full_layout_with_the_action_discriminator() {
    let store = CannedStore::default();
    let mut session = EditorSession::load(&store, "flow_1").await.unwrap();
    let start_id = session.model().start_node().unwrap().id.clone();
    let text_id = session
        .model_mut()
        .add_node(NodeType::Text, 300, 80)
        .id
        .clone();
    session.model_mut().add_edge(&start_id, &text_id);

    session.save(&store).await.unwrap();

    let request = store.last_save_request();
    assert_eq!(request["action"], json!("save_layout"));
    assert_eq!(request["id"], json!("flow_1"));
    assert_eq!(request["nodes"].as_array().unwrap().len(), 2);
    let edge = &request["edges"][0];
    assert_eq!(edge["from"], json!(start_id));
    assert_eq!(edge["to"], json!(text_id));
    // Node wire entries carry the serde-tagged type and open config.
    let node = &request["nodes"][1];
    assert_eq!(node["type"], json!("text"));
    assert_eq!(node["x"], json!(300));
    assert!(node["config"].is_object());
}

#[tokio::test]
async fn save_applies_the_id_map_to_nodes_and_edges() {
    // After a remap no edge may point at a stale provisional id.
    let store = CannedStore::default();
    let mut session = EditorSession::new("flow_1", "New flow");
    let start_id = session.model().start_node().unwrap().id.clone();
    let text_id = session
        .model_mut()
        .add_node(NodeType::Text, 300, 80)
        .id
        .clone();
    session.model_mut().add_edge(&start_id, &text_id);

    store.set_save_body(&format!(
        r#"{{"success": true, "id_map": {{"{start_id}": "n_100", "{text_id}": "n_101"}}}}"#
    ));
    session.save(&store).await.unwrap();

    assert!(session.model().node("n_100").is_some());
    assert!(session.model().node("n_101").is_some());
    assert!(session.model().node(&text_id).is_none());
    let edge = &session.model().edges()[0];
    assert_eq!(edge.from, "n_100");
    assert_eq!(edge.to, "n_101");
    assert!(session.model().dangling_edges().is_empty());
}

#[tokio::test]
async fn a_rejected_save_leaves_the_graph_untouched() {
    let store = CannedStore::default();
    let mut session = EditorSession::new("flow_1", "New flow");
    let text_id = session
        .model_mut()
        .add_node(NodeType::Text, 300, 80)
        .id
        .clone();

    store.set_save_body(r#"{"success": false}"#);
    let err = session.save(&store).await.unwrap_err();
    assert!(matches!(err, SessionError::Gateway(_)), "got {err:?}");

    // Provisional ids and layout are exactly as before the attempt.
    assert!(session.model().node(&text_id).is_some());
    assert!(!session.save_in_flight());
}

#[tokio::test]
async fn publish_persists_the_layout_first_and_records_the_version() {
    let store = CannedStore::default();
    let mut session = EditorSession::new("flow_5", "Launch bot");
    session.model_mut().add_node(NodeType::Text, 300, 80);

    let version = session.publish(&store).await.unwrap();

    assert_eq!(version, Some(1));
    assert_eq!(session.published_version(), Some(1));
    assert_eq!(session.status(), FlowStatus::Published);
    // The implicit save happened before the publish action.
    assert_eq!(store.save_requests.lock().unwrap().len(), 1);
    assert_eq!(store.publish_calls.lock().unwrap().as_slice(), ["flow_5"]);
}

#[tokio::test]
async fn a_rejected_publish_keeps_the_draft_status() {
    let store = CannedStore::default();
    *store.publish_body.lock().unwrap() = r#"{"success": false}"#.to_string();
    let mut session = EditorSession::new("flow_5", "Launch bot");

    let err = session.publish(&store).await.unwrap_err();
    assert!(matches!(err, SessionError::Gateway(_)), "got {err:?}");
    assert_eq!(session.status(), FlowStatus::Draft);
    assert_eq!(session.published_version(), None);
}
