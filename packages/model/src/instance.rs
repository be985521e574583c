use serde::{Deserialize, Serialize};

/// A node in the editable document tree.
///
/// Children are owned, so a well-formed value can never contain a cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentInstance {
    /// Stable identifier, unique within a document
    pub id: String,

    /// Component type (e.g. "Box", "Heading", "Image")
    pub component: String,

    /// Optional user-facing label shown in the navigator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Style sources referenced by this node, in declaration order
    #[serde(default)]
    pub style_source_ids: Vec<String>,

    /// Child instances, in render order
    #[serde(default)]
    pub children: Vec<ComponentInstance>,
}

impl ComponentInstance {
    pub fn new(id: impl Into<String>, component: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            component: component.into(),
            label: None,
            style_source_ids: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_style_source(mut self, style_source_id: impl Into<String>) -> Self {
        self.style_source_ids.push(style_source_id.into());
        self
    }

    pub fn with_child(mut self, child: ComponentInstance) -> Self {
        self.children.push(child);
        self
    }

    /// Display name: the label if set, otherwise the component type
    pub fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.component)
    }
}
