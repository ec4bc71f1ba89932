use crate::registry::NodeType;
use std::time::{SystemTime, UNIX_EPOCH};

/// Generates provisional client-side ids of the form `{type}_{millis}`.
///
/// Millisecond timestamps collide when nodes are placed in quick succession,
/// so the generator never reuses a timestamp: equal or earlier clock reads
/// are bumped past the last id handed out.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last_millis: u64,
}

impl IdGenerator {
    pub fn next_node_id(&mut self, node_type: NodeType) -> String {
        format!("{}_{}", node_type.as_tag(), self.next_millis())
    }

    pub fn next_edge_id(&mut self) -> String {
        format!("edge_{}", self.next_millis())
    }

    fn next_millis(&mut self) -> u64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        self.last_millis = now.max(self.last_millis + 1);
        self.last_millis
    }
}
