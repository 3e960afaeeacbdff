use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Business-context categories used to classify entities and route rendering.
///
/// The set is closed: `Generic` is the explicit "no specific domain matched"
/// value, not absence-of-value, and is always a legal classification and
/// lookup target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Domain {
    Ecommerce,
    UserManagement,
    Admin,
    Generic,
}

impl Domain {
    /// All domains in fixed enumeration order. Tie-breaks and stable sorts
    /// rely on this order, so it must not change.
    pub const ALL: [Domain; 4] = [
        Domain::Ecommerce,
        Domain::UserManagement,
        Domain::Admin,
        Domain::Generic,
    ];

    /// The non-generic domains in the order they are checked during
    /// classification (first checked wins score ties).
    pub const SPECIFIC: [Domain; 3] = [Domain::Ecommerce, Domain::UserManagement, Domain::Admin];

    /// Stable lowercase identifier, used in cache keys and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Ecommerce => "ecommerce",
            Domain::UserManagement => "user_management",
            Domain::Admin => "admin",
            Domain::Generic => "generic",
        }
    }

    /// Human-readable label for mock screen titles.
    pub fn display_name(&self) -> &'static str {
        match self {
            Domain::Ecommerce => "E-Commerce",
            Domain::UserManagement => "User Management",
            Domain::Admin => "Administration",
            Domain::Generic => "Generic",
        }
    }

    /// Position in the fixed enumeration order (for stable tie-breaks).
    pub fn order(&self) -> usize {
        match self {
            Domain::Ecommerce => 0,
            Domain::UserManagement => 1,
            Domain::Admin => 2,
            Domain::Generic => 3,
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Domain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ecommerce" => Ok(Domain::Ecommerce),
            "user_management" => Ok(Domain::UserManagement),
            "admin" => Ok(Domain::Admin),
            "generic" => Ok(Domain::Generic),
            _ => Err(format!("Unknown domain: {s}")),
        }
    }
}

/// Aggregate affinity of one domain over a whole classification run.
#[derive(Debug, Clone, Serialize)]
pub struct DomainScore {
    pub domain: Domain,
    /// Sum of the winning scores of every entity assigned to this domain.
    pub score: u32,
    /// Names of the assigned entities in first-seen order. A name may repeat
    /// if two distinct entities share it; assignments are not deduplicated.
    pub matched_entities: Vec<String>,
}

impl DomainScore {
    pub fn zero(domain: Domain) -> Self {
        Self {
            domain,
            score: 0,
            matched_entities: Vec::new(),
        }
    }
}

/// Output of one classification run. Constructed fresh on every call and
/// never mutated after return.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationResult {
    /// The single domain judged most representative of the entity set.
    pub primary_domain: Domain,
    /// Exactly one entry per `Domain` variant (zero-score entries included),
    /// sorted descending by score; ties keep the fixed enumeration order.
    pub domain_scores: Vec<DomainScore>,
    /// Entity name → assigned domain, one entry per distinct submitted name.
    /// On duplicate names the last-processed occurrence wins.
    pub entity_domain_map: HashMap<String, Domain>,
}

impl ClassificationResult {
    /// The aggregate score entry for `domain`. Always present.
    pub fn score_for(&self, domain: Domain) -> &DomainScore {
        self.domain_scores
            .iter()
            .find(|s| s.domain == domain)
            .expect("domain_scores holds every Domain variant")
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
