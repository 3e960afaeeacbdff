//! Data model for the generation result: the already-structured description
//! of an application idea (entities, user roles, features) returned by the
//! remote generation service. This crate only consumes the structure; the
//! remote call itself, its retries, and its timeouts live in the host app.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::types::errors::{BlueprintError, BlueprintResult};

/// One data object of the generated application.
///
/// `name` is free text (any casing, singular or plural); `attributes` are
/// free-text field names. Order of attributes is irrelevant to
/// classification and duplicates are kept as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entity {
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<String>,
}

impl Entity {
    pub fn new(name: impl Into<String>, attributes: &[&str]) -> Self {
        Self {
            name: name.into(),
            attributes: attributes.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// A user role of the generated application (viewer-only metadata).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRole {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A feature bullet of the generated application (viewer-only metadata).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Feature {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// The full structured generation result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppBlueprint {
    pub app_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub roles: Vec<UserRole>,
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl AppBlueprint {
    /// Decode a blueprint from the raw JSON body of a generation response.
    ///
    /// This is the only fallible operation in the crate; everything past
    /// this boundary works on well-typed data and cannot fail.
    pub fn from_json(raw: &str) -> BlueprintResult<AppBlueprint> {
        serde_json::from_str(raw).map_err(|e| {
            warn!("[Blueprint] Failed to decode generation result: {e}");
            BlueprintError::Decode(e.to_string())
        })
    }
}

#[cfg(test)]
#[path = "tests/blueprint_tests.rs"]
mod tests;
