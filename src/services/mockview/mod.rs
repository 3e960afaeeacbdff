//! Mock view layer — renderer capability trait plus the serializable view
//! trees the frontend draws. Everything here is illustrative output only;
//! no classification or routing logic lives in this module.

pub mod generic_form;
pub mod mock_data;
pub mod renderers;
pub mod view_node;

pub use generic_form::GenericFormRenderer;
pub use view_node::{FieldInput, FormField, ViewNode};

use std::sync::Arc;

use crate::types::Entity;

/// The polymorphic render capability: turn one entity into a mock view tree.
///
/// Implementations carry no per-call state and may be shared freely; the
/// router clones bindings out of its registry and cache.
pub trait EntityRenderer: Send + Sync {
    /// Stable identifier of the concrete renderer, for introspection and
    /// tests distinguishing specific bindings from the fallback.
    fn component_name(&self) -> &'static str;

    /// Produce a mock view tree for `entity`. Must not fail; any entity
    /// shape (including an empty attribute list) renders to something.
    fn render(&self, entity: &Entity) -> ViewNode;
}

/// An opaque, cheaply cloneable reference to one renderer.
pub type RendererBinding = Arc<dyn EntityRenderer>;
