//! The generic fallback renderer: a plain attribute-listing form with no
//! domain knowledge. The router is handed this capability at construction
//! and binds it whenever no specific component is registered.

use crate::services::mockview::view_node::{FieldInput, FormField, ViewNode};
use crate::services::mockview::EntityRenderer;
use crate::types::Entity;

#[derive(Debug, Default)]
pub struct GenericFormRenderer;

impl GenericFormRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Infer an input widget from the attribute's apparent meaning.
    /// Falls back to a text input for anything unrecognized.
    fn field_input_for(attribute: &str) -> FieldInput {
        let attr = attribute.to_lowercase();

        if attr.ends_with("_id") || attr == "id" {
            FieldInput::Number
        } else if attr.ends_with("_date") || attr.contains("date") {
            FieldInput::Date
        } else if attr.ends_with("_time") || attr.contains("time") {
            FieldInput::Time
        } else if attr.ends_with("_status") || attr.ends_with("_type") {
            FieldInput::Select
        } else if attr.contains("email") {
            FieldInput::Email
        } else if attr.contains("password") {
            FieldInput::Password
        } else if attr.contains("description") || attr.contains("notes") {
            FieldInput::TextArea
        } else if attr.starts_with("is_") || attr.starts_with("has_") || attr.contains("enabled") {
            FieldInput::Checkbox
        } else if attr.contains("price")
            || attr.contains("amount")
            || attr.contains("quantity")
            || attr.contains("count")
        {
            FieldInput::Number
        } else {
            FieldInput::Text
        }
    }
}

impl EntityRenderer for GenericFormRenderer {
    fn component_name(&self) -> &'static str {
        "generic_form"
    }

    fn render(&self, entity: &Entity) -> ViewNode {
        let fields = entity
            .attributes
            .iter()
            .map(|attribute| FormField {
                label: attribute.clone(),
                input: Self::field_input_for(attribute),
            })
            .collect();

        ViewNode::Form {
            title: entity.name.clone(),
            fields,
            submit_label: format!("Save {}", entity.name),
        }
    }
}

#[cfg(test)]
#[path = "tests/generic_form_tests.rs"]
mod tests;
