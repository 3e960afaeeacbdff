pub mod blueprint;
pub mod domain;
pub mod errors;

pub use blueprint::{AppBlueprint, Entity, Feature, UserRole};
pub use domain::{ClassificationResult, Domain, DomainScore};
pub use errors::{BlueprintError, BlueprintResult};
