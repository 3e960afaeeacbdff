//! Core of a demonstration UI generator: given the structured blueprint of
//! an application idea (entities, roles, features), classify which business
//! domain the application belongs to and route every entity to the most
//! specific available mock-screen renderer, falling back to a generic
//! attribute-listing form.
//!
//! The classifier is a pure function; the router is an explicit long-lived
//! instance the host constructs once at startup, seeds with the built-in
//! domain plugins, and consults on every render pass. Neither performs I/O
//! and no operation here can fail.

pub mod services;
pub mod types;
#[cfg(test)]
pub mod test_utils;

pub use services::classifier::classify;
pub use services::mockview::{EntityRenderer, GenericFormRenderer, RendererBinding, ViewNode};
pub use services::router::plugins::install_builtin_plugins;
pub use services::router::ComponentRouter;
pub use types::{AppBlueprint, ClassificationResult, Domain, DomainScore, Entity};
