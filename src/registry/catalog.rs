//! The per-type property catalog: field schemas, labels, and categories for
//! every node type the editor can place. This table is the single source of
//! truth for default configs; the form generator and the graph model both
//! derive from it rather than branching on type tags themselves.

use super::NodeType;
use super::field::FieldDescriptor;

/// Ordered property schema for a node type. The order is the order the
/// property panel renders fields in.
pub(super) fn schema_for(node_type: NodeType) -> Vec<FieldDescriptor> {
    use FieldDescriptor as F;
    match node_type {
        NodeType::Start => Vec::new(),

        // --- Bubbles: send content, never wait ---
        NodeType::Text => vec![F::multiline("text", "Message text", "")],
        NodeType::Image => vec![
            F::text("url", "Image URL", ""),
            F::text("caption", "Caption", ""),
        ],
        NodeType::Video => vec![
            F::text("url", "Video URL", ""),
            F::text("caption", "Caption", ""),
        ],
        NodeType::Audio => vec![F::text("url", "Audio URL", "")],
        NodeType::File => vec![
            F::text("url", "File URL", ""),
            F::text("filename", "File name", ""),
        ],
        NodeType::Embed => vec![
            F::text("url", "Embed URL", ""),
            F::number("height", "Height (px)", Some(400.0), Some(100.0), Some(1200.0)),
        ],

        // --- Inputs: pause the flow and store the reply in a variable ---
        NodeType::InputText => vec![
            F::text("placeholder", "Placeholder", "Type your answer..."),
            F::text("variable", "Save answer to", ""),
            F::boolean("longText", "Long text (multi-line)", false),
        ],
        NodeType::InputNumber => vec![
            F::text("placeholder", "Placeholder", ""),
            F::text("variable", "Save answer to", ""),
            F::number("min", "Minimum", None, None, None),
            F::number("max", "Maximum", None, None, None),
            F::number("step", "Step", None, None, None),
        ],
        NodeType::InputEmail => vec![
            F::text("placeholder", "Placeholder", "name@example.com"),
            F::text("variable", "Save answer to", ""),
            F::text("retryMessage", "Invalid e-mail message", ""),
        ],
        NodeType::InputPhone => vec![
            F::text("placeholder", "Placeholder", ""),
            F::text("variable", "Save answer to", ""),
            F::select(
                "defaultCountry",
                "Default country",
                &["BR", "US", "PT", "ES", "MX", "AR"],
                "BR",
            ),
        ],
        NodeType::InputDate => vec![
            F::text("variable", "Save answer to", ""),
            F::select("format", "Date format", &["dd/MM/yyyy", "MM/dd/yyyy", "yyyy-MM-dd"], "dd/MM/yyyy"),
            F::boolean("withTime", "Include time", false),
        ],
        NodeType::InputWebsite => vec![
            F::text("placeholder", "Placeholder", "https://"),
            F::text("variable", "Save answer to", ""),
        ],
        NodeType::Buttons => vec![
            F::string_list("options", "Buttons (one per line)"),
            F::text("variable", "Save answer to", ""),
            F::boolean("multiple", "Allow multiple choices", false),
        ],
        NodeType::Rating => vec![
            F::number("max", "Scale maximum", Some(5.0), Some(2.0), Some(10.0)),
            F::text("variable", "Save answer to", ""),
            F::text("labelLow", "Low-end label", ""),
            F::text("labelHigh", "High-end label", ""),
        ],
        NodeType::FileUpload => vec![
            F::text("variable", "Save file URL to", ""),
            F::string_list("allowedTypes", "Allowed types (one per line)"),
            F::number("maxSizeMb", "Max size (MB)", Some(10.0), Some(1.0), Some(100.0)),
        ],
        NodeType::PictureChoice => vec![
            F::string_list("options", "Image URLs (one per line)"),
            F::text("variable", "Save answer to", ""),
            F::boolean("multiple", "Allow multiple choices", false),
        ],

        // --- Logic ---
        NodeType::SetVariable => vec![
            F::text("variable", "Variable", ""),
            F::select_revealing(
                "valueType",
                "Value",
                &["custom", "now", "random", "empty"],
                "custom",
                vec![("custom", vec!["value"])],
            ),
            F::text("value", "Custom value", ""),
        ],
        NodeType::Condition => vec![
            F::text("variable", "Variable", ""),
            F::select(
                "operator",
                "Operator",
                &["equals", "not_equals", "contains", "greater_than", "less_than", "is_set"],
                "equals",
            ),
            F::text("value", "Compare with", ""),
        ],
        NodeType::Redirect => vec![
            F::text("url", "Redirect URL", ""),
            F::boolean("openNewTab", "Open in new tab", false),
        ],
        NodeType::Code => vec![F::multiline("code", "JavaScript code", "")],
        NodeType::Typebot => vec![F::text("flowId", "Sub-flow id", "")],
        NodeType::Jump => vec![F::text("targetNodeId", "Jump to node", "")],
        NodeType::Wait => vec![
            F::number("seconds", "Seconds", Some(3.0), Some(1.0), Some(300.0)),
            F::boolean("showTyping", "Show typing indicator", true),
        ],
        NodeType::AbTest => vec![F::number(
            "percentA",
            "Percentage for branch A",
            Some(50.0),
            Some(0.0),
            Some(100.0),
        )],

        // --- Integrations ---
        NodeType::Webhook => vec![
            F::text("url", "Webhook URL", ""),
            F::select("method", "Method", &["GET", "POST", "PUT", "PATCH", "DELETE"], "POST"),
            F::string_list("headers", "Headers (one per line)"),
            F::multiline("body", "Request body", ""),
            F::text("saveResponseTo", "Save response to", ""),
        ],
        NodeType::GoogleSheets => vec![
            F::text("spreadsheetId", "Spreadsheet id", ""),
            F::text("sheetName", "Sheet name", ""),
            F::select("operation", "Operation", &["append", "update", "read"], "append"),
        ],
        NodeType::GoogleAnalytics => vec![
            F::text("trackingId", "Tracking id", ""),
            F::text("event", "Event name", ""),
            F::text("category", "Event category", ""),
        ],
        NodeType::EmailSend => vec![
            F::text("to", "To", ""),
            F::text("subject", "Subject", ""),
            F::multiline("body", "Body", ""),
        ],
        NodeType::Zapier => vec![F::text("webhookUrl", "Zap webhook URL", "")],
        NodeType::Make => vec![F::text("webhookUrl", "Scenario webhook URL", "")],
        NodeType::Pabbly => vec![F::text("webhookUrl", "Workflow webhook URL", "")],
        NodeType::Chatwoot => vec![
            F::text("accountId", "Account id", ""),
            F::text("inboxId", "Inbox id", ""),
            F::text("assignTo", "Assign to agent", ""),
        ],
        NodeType::Openai => vec![
            F::select(
                "model",
                "Model",
                &["gpt-4o-mini", "gpt-4o", "gpt-4-turbo", "gpt-3.5-turbo"],
                "gpt-4o-mini",
            ),
            F::multiline("prompt", "Prompt", ""),
            F::number("temperature", "Temperature", Some(0.7), Some(0.0), Some(2.0)),
            F::number("maxTokens", "Max tokens", None, None, None),
            F::text("saveResponseTo", "Save response to", ""),
        ],
        NodeType::AiAssistant => vec![
            F::text("assistantId", "Assistant id", ""),
            F::text("saveResponseTo", "Save response to", ""),
        ],
    }
}

/// Default display label for freshly placed nodes, user-editable afterwards.
pub(super) fn default_label(node_type: NodeType) -> &'static str {
    match node_type {
        NodeType::Start => "Start",
        NodeType::Text => "Text",
        NodeType::Image => "Image",
        NodeType::Video => "Video",
        NodeType::Audio => "Audio",
        NodeType::File => "File",
        NodeType::Embed => "Embed",
        NodeType::InputText => "Text input",
        NodeType::InputNumber => "Number input",
        NodeType::InputEmail => "E-mail input",
        NodeType::InputPhone => "Phone input",
        NodeType::InputDate => "Date input",
        NodeType::InputWebsite => "Website input",
        NodeType::Buttons => "Buttons",
        NodeType::Rating => "Rating",
        NodeType::FileUpload => "File upload",
        NodeType::PictureChoice => "Picture choice",
        NodeType::SetVariable => "Set variable",
        NodeType::Condition => "Condition",
        NodeType::Redirect => "Redirect",
        NodeType::Code => "Code",
        NodeType::Typebot => "Sub-flow",
        NodeType::Jump => "Jump",
        NodeType::Wait => "Wait",
        NodeType::AbTest => "A/B test",
        NodeType::Webhook => "Webhook",
        NodeType::GoogleSheets => "Google Sheets",
        NodeType::GoogleAnalytics => "Google Analytics",
        NodeType::EmailSend => "Send e-mail",
        NodeType::Zapier => "Zapier",
        NodeType::Make => "Make",
        NodeType::Pabbly => "Pabbly",
        NodeType::Chatwoot => "Chatwoot",
        NodeType::Openai => "OpenAI",
        NodeType::AiAssistant => "AI assistant",
    }
}
