//! Node Type Registry: the closed vocabulary of node types the editor can
//! place, each carrying its property schema and default config as data.
//!
//! The registry is pure data. The graph model asks it for defaults when a
//! node is created, and the property form generator asks it for the field
//! schema when a node is selected; neither of them branches on type tags.

mod catalog;
pub mod field;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

pub use field::{FieldDescriptor, FieldKind};

/// A node's configuration: field key to value. The shape is determined by
/// the node's type via [`property_schema`], but the map itself is open —
/// unknown keys are carried along untouched.
pub type ConfigMap = AHashMap<String, Value>;

/// The closed set of node types. Wire tags are the snake_case serde names
/// (`"input_phone"`, `"ab_test"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    Start,
    // Bubbles
    Text,
    Image,
    Video,
    Audio,
    File,
    Embed,
    // Inputs
    InputText,
    InputNumber,
    InputEmail,
    InputPhone,
    InputDate,
    InputWebsite,
    Buttons,
    Rating,
    FileUpload,
    PictureChoice,
    // Logic
    SetVariable,
    Condition,
    Redirect,
    Code,
    Typebot,
    Jump,
    Wait,
    AbTest,
    // Integrations
    Webhook,
    GoogleSheets,
    GoogleAnalytics,
    EmailSend,
    Zapier,
    Make,
    Pabbly,
    Chatwoot,
    Openai,
    AiAssistant,
}

/// Broad grouping used by the template palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeCategory {
    Start,
    Bubble,
    Input,
    Logic,
    Integration,
}

/// Every placeable node type, in palette order.
pub const ALL_NODE_TYPES: [NodeType; 35] = [
    NodeType::Start,
    NodeType::Text,
    NodeType::Image,
    NodeType::Video,
    NodeType::Audio,
    NodeType::File,
    NodeType::Embed,
    NodeType::InputText,
    NodeType::InputNumber,
    NodeType::InputEmail,
    NodeType::InputPhone,
    NodeType::InputDate,
    NodeType::InputWebsite,
    NodeType::Buttons,
    NodeType::Rating,
    NodeType::FileUpload,
    NodeType::PictureChoice,
    NodeType::SetVariable,
    NodeType::Condition,
    NodeType::Redirect,
    NodeType::Code,
    NodeType::Typebot,
    NodeType::Jump,
    NodeType::Wait,
    NodeType::AbTest,
    NodeType::Webhook,
    NodeType::GoogleSheets,
    NodeType::GoogleAnalytics,
    NodeType::EmailSend,
    NodeType::Zapier,
    NodeType::Make,
    NodeType::Pabbly,
    NodeType::Chatwoot,
    NodeType::Openai,
    NodeType::AiAssistant,
];

impl NodeType {
    /// The stable wire/id tag for this type (matches the serde name).
    pub fn as_tag(self) -> &'static str {
        match self {
            NodeType::Start => "start",
            NodeType::Text => "text",
            NodeType::Image => "image",
            NodeType::Video => "video",
            NodeType::Audio => "audio",
            NodeType::File => "file",
            NodeType::Embed => "embed",
            NodeType::InputText => "input_text",
            NodeType::InputNumber => "input_number",
            NodeType::InputEmail => "input_email",
            NodeType::InputPhone => "input_phone",
            NodeType::InputDate => "input_date",
            NodeType::InputWebsite => "input_website",
            NodeType::Buttons => "buttons",
            NodeType::Rating => "rating",
            NodeType::FileUpload => "file_upload",
            NodeType::PictureChoice => "picture_choice",
            NodeType::SetVariable => "set_variable",
            NodeType::Condition => "condition",
            NodeType::Redirect => "redirect",
            NodeType::Code => "code",
            NodeType::Typebot => "typebot",
            NodeType::Jump => "jump",
            NodeType::Wait => "wait",
            NodeType::AbTest => "ab_test",
            NodeType::Webhook => "webhook",
            NodeType::GoogleSheets => "google_sheets",
            NodeType::GoogleAnalytics => "google_analytics",
            NodeType::EmailSend => "email_send",
            NodeType::Zapier => "zapier",
            NodeType::Make => "make",
            NodeType::Pabbly => "pabbly",
            NodeType::Chatwoot => "chatwoot",
            NodeType::Openai => "openai",
            NodeType::AiAssistant => "ai_assistant",
        }
    }

    /// Resolves a wire tag back to a type. Returns `None` for tags the
    /// registry does not know, leaving the caller to decide how to degrade.
    pub fn from_tag(tag: &str) -> Option<Self> {
        ALL_NODE_TYPES.into_iter().find(|t| t.as_tag() == tag)
    }

    pub fn category(self) -> NodeCategory {
        use NodeType::*;
        match self {
            Start => NodeCategory::Start,
            Text | Image | Video | Audio | File | Embed => NodeCategory::Bubble,
            InputText | InputNumber | InputEmail | InputPhone | InputDate | InputWebsite
            | Buttons | Rating | FileUpload | PictureChoice => NodeCategory::Input,
            SetVariable | Condition | Redirect | Code | Typebot | Jump | Wait | AbTest => {
                NodeCategory::Logic
            }
            Webhook | GoogleSheets | GoogleAnalytics | EmailSend | Zapier | Make | Pabbly
            | Chatwoot | Openai | AiAssistant => NodeCategory::Integration,
        }
    }

    /// The start node has no incoming connector; everything else accepts
    /// incoming edges.
    pub fn accepts_incoming(self) -> bool {
        self != NodeType::Start
    }

    /// The start node is the one node that can never be deleted.
    pub fn is_deletable(self) -> bool {
        self != NodeType::Start
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Ordered property schema for a node type. The property panel renders one
/// input per descriptor, in this order.
pub fn property_schema(node_type: NodeType) -> Vec<FieldDescriptor> {
    catalog::schema_for(node_type)
}

/// The config a freshly created node of this type starts with: every schema
/// field at its default value.
pub fn default_config(node_type: NodeType) -> ConfigMap {
    property_schema(node_type)
        .into_iter()
        .map(|field| (field.key.to_string(), field.default))
        .collect()
}

/// Default display label for a freshly created node.
pub fn default_label(node_type: NodeType) -> &'static str {
    catalog::default_label(node_type)
}
