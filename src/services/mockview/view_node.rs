use serde::Serialize;

/// Serializable mock view tree shipped to the frontend.
///
/// Tag names are part of the frontend contract; renaming a variant breaks
/// the webview renderer.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewNode {
    /// Top-level mock screen.
    Screen {
        title: String,
        children: Vec<ViewNode>,
    },
    /// Titled grouping inside a screen.
    Section {
        title: String,
        children: Vec<ViewNode>,
    },
    /// Non-functional input form.
    Form {
        title: String,
        fields: Vec<FormField>,
        submit_label: String,
    },
    /// Static data table with placeholder rows.
    Table {
        title: String,
        columns: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// Single headline figure (dashboards).
    StatCard { label: String, value: String },
    /// Flat bullet list.
    ItemList { title: String, items: Vec<String> },
    /// Small inline label (statuses, counts).
    Badge { label: String },
}

impl ViewNode {
    /// Number of nodes in the tree, this node included.
    pub fn node_count(&self) -> usize {
        match self {
            ViewNode::Screen { children, .. } | ViewNode::Section { children, .. } => {
                1 + children.iter().map(ViewNode::node_count).sum::<usize>()
            }
            _ => 1,
        }
    }
}

/// One labelled input of a mock form.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FormField {
    pub label: String,
    pub input: FieldInput,
}

/// Input widget kinds the frontend knows how to draw.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FieldInput {
    Text,
    TextArea,
    Number,
    Date,
    Time,
    Select,
    Checkbox,
    Email,
    Password,
}

#[cfg(test)]
#[path = "tests/view_node_tests.rs"]
mod tests;
