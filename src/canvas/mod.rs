//! Canvas Interaction Controller: a pointer-gesture state machine over the
//! graph model, headless so it can be driven by any rendering frontend (and
//! by tests, without a DOM).
//!
//! Exactly one interaction mode is active at a time; the `Mode` enum makes
//! that structural rather than a convention. All pointer coordinates are
//! client-space; the controller owns the pan/zoom transform that maps them
//! to canvas space.

use crate::graph::GraphModel;

pub const ZOOM_MIN: f64 = 0.25;
pub const ZOOM_MAX: f64 = 2.0;
pub const ZOOM_STEP: f64 = 0.1;

/// A pointer position in client (screen) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPos {
    pub x: f64,
    pub y: f64,
}

impl PointerPos {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// What the pointer event landed on, as hit-tested by the frontend.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerTarget {
    /// Empty canvas background.
    Background,
    /// A node's body (not one of its connectors).
    NodeBody(String),
    /// A node's outgoing connector, the origin of an edge-drawing gesture.
    ConnectorOut(String),
    /// A node's incoming connector, the terminus of an edge-drawing gesture.
    ConnectorIn(String),
}

/// Wheel scroll direction over the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq)]
enum Mode {
    Idle,
    Panning {
        last: PointerPos,
        moved: bool,
    },
    DraggingNode {
        id: String,
        grab: PointerPos,
        origin: (i32, i32),
        moved: bool,
    },
    Connecting {
        from: String,
    },
}

/// Discriminant of the active interaction mode, for callers that only need
/// to know which gesture is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeKind {
    Idle,
    Panning,
    DraggingNode,
    Connecting,
}

/// Pan/zoom transform, selection, and the active gesture for one canvas.
#[derive(Debug)]
pub struct CanvasController {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    mode: Mode,
    selected: Option<String>,
}

impl Default for CanvasController {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            mode: Mode::Idle,
            selected: None,
        }
    }
}

impl CanvasController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn pan(&self) -> (f64, f64) {
        (self.pan_x, self.pan_y)
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn mode_kind(&self) -> ModeKind {
        match self.mode {
            Mode::Idle => ModeKind::Idle,
            Mode::Panning { .. } => ModeKind::Panning,
            Mode::DraggingNode { .. } => ModeKind::DraggingNode,
            Mode::Connecting { .. } => ModeKind::Connecting,
        }
    }

    /// The node id an in-progress edge gesture originates from, if any.
    pub fn pending_connection(&self) -> Option<&str> {
        match &self.mode {
            Mode::Connecting { from } => Some(from),
            _ => None,
        }
    }

    /// Converts a client-space position to canvas space under the current
    /// pan/zoom transform.
    pub fn to_canvas(&self, client: PointerPos, container_origin: PointerPos) -> PointerPos {
        PointerPos {
            x: (client.x - container_origin.x - self.pan_x) / self.zoom,
            y: (client.y - container_origin.y - self.pan_y) / self.zoom,
        }
    }

    pub fn pointer_down(&mut self, target: PointerTarget, pos: PointerPos, model: &GraphModel) {
        if self.mode != Mode::Idle {
            // A second pointer-down mid-gesture (e.g. multi-touch) is ignored
            // so modes cannot stack.
            return;
        }
        self.mode = match target {
            PointerTarget::Background => Mode::Panning {
                last: pos,
                moved: false,
            },
            PointerTarget::NodeBody(id) => match model.node(&id) {
                Some(node) => Mode::DraggingNode {
                    id,
                    grab: pos,
                    origin: (node.x, node.y),
                    moved: false,
                },
                None => {
                    log::warn!("pointer_down: unknown node id '{id}', ignoring");
                    Mode::Idle
                }
            },
            PointerTarget::ConnectorOut(id) => Mode::Connecting { from: id },
            // Pressing an "in" connector starts nothing; it only terminates
            // a gesture that began on an "out" connector.
            PointerTarget::ConnectorIn(_) => Mode::Idle,
        };
    }

    pub fn pointer_move(&mut self, pos: PointerPos, model: &mut GraphModel) {
        match &mut self.mode {
            Mode::Panning { last, moved } => {
                self.pan_x += pos.x - last.x;
                self.pan_y += pos.y - last.y;
                *last = pos;
                *moved = true;
            }
            Mode::DraggingNode {
                id,
                grab,
                origin,
                moved,
            } => {
                // Client-space delta scaled into canvas space; recomputed
                // from the grab point so rounding never accumulates.
                let dx = ((pos.x - grab.x) / self.zoom).round() as i32;
                let dy = ((pos.y - grab.y) / self.zoom).round() as i32;
                let id = id.clone();
                let (ox, oy) = *origin;
                *moved = true;
                model.move_node(&id, ox + dx, oy + dy);
            }
            Mode::Idle | Mode::Connecting { .. } => {}
        }
    }

    pub fn pointer_up(&mut self, target: PointerTarget, model: &mut GraphModel) {
        match std::mem::replace(&mut self.mode, Mode::Idle) {
            Mode::Panning { moved, .. } => {
                // A background click without movement clears the selection.
                if !moved && target == PointerTarget::Background {
                    self.selected = None;
                }
            }
            Mode::DraggingNode { id, moved, .. } => {
                // A press-and-release without movement is a select.
                if !moved {
                    self.selected = Some(id);
                }
            }
            Mode::Connecting { from } => {
                if let PointerTarget::ConnectorIn(to) = target {
                    // Self-loops and duplicates are dropped inside add_edge;
                    // the gesture never surfaces them as errors.
                    model.add_edge(&from, &to);
                }
            }
            Mode::Idle => {}
        }
    }

    /// Pointer left the canvas: an active pan ends, other gestures keep
    /// waiting for their pointer-up.
    pub fn pointer_leave(&mut self) {
        if matches!(self.mode, Mode::Panning { .. }) {
            self.mode = Mode::Idle;
        }
    }

    pub fn wheel(&mut self, direction: WheelDirection) {
        let direction = match direction {
            WheelDirection::Up => 1.0,
            WheelDirection::Down => -1.0,
        };
        // Step in integer tenths so repeated wheel events cannot accumulate
        // float drift, then clamp.
        let tenths = (self.zoom * 10.0).round() + direction;
        self.zoom = (tenths / 10.0).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    pub fn select(&mut self, id: Option<String>) {
        self.selected = id;
    }
}
