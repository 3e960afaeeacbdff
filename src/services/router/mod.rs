//! Component router — resolves each classified entity to the most specific
//! registered renderer, falling back to the generic form.
//!
//! The router owns two layers of state for its process lifetime:
//! - **Registry**: `Domain → lowercase entity name → binding`, mutated only
//!   through the registration calls.
//! - **Cache**: bounded LRU memoization of resolve results keyed
//!   `"<domain>:<lowercase name>"`, invalidated per-domain whenever that
//!   domain's registry subtree changes. A cache entry never diverges from
//!   what a fresh registry lookup would return, aside from lag until that
//!   invalidation.
//!
//! The host holds one long-lived instance (not one per render pass) so that
//! registrations performed at startup stay visible to all later lookups.

pub mod plugins;

use std::collections::HashMap;
use std::num::NonZeroUsize;

use log::debug;
use lru::LruCache;

use crate::services::mockview::RendererBinding;
use crate::types::{ClassificationResult, Domain, Entity};

/// Resolve-result cache capacity. Eviction is harmless — a miss only
/// re-reads the registry.
const CACHE_CAPACITY: usize = 256;

pub struct ComponentRouter {
    registry: HashMap<Domain, HashMap<String, RendererBinding>>,
    cache: LruCache<String, RendererBinding>,
    fallback: RendererBinding,
}

impl ComponentRouter {
    /// A router with an empty registry. `fallback` is the generic form
    /// capability supplied by the presentation layer; the router never
    /// constructs one itself.
    pub fn new(fallback: RendererBinding) -> Self {
        Self {
            registry: HashMap::new(),
            cache: LruCache::new(NonZeroUsize::new(CACHE_CAPACITY).unwrap_or(NonZeroUsize::MIN)),
            fallback,
        }
    }

    // ─── Lookup ───────────────────────────────────────────────────────

    /// Resolve `entity` to a renderer binding. Never fails: an unknown
    /// domain or name degrades to the fallback, because "no specific UI for
    /// this entity" is an expected outcome, not a fault.
    ///
    /// Takes `&mut self` because the LRU cache reorders on read.
    pub fn resolve(
        &mut self,
        entity: &Entity,
        classification: &ClassificationResult,
    ) -> RendererBinding {
        let domain = Self::domain_for(entity, classification);
        let name = entity.name.to_lowercase();
        let key = cache_key(domain, &name);

        if let Some(hit) = self.cache.get(&key) {
            debug!("[Router] cache hit for {key}");
            return hit.clone();
        }

        let binding = self
            .registry
            .get(&domain)
            .and_then(|components| components.get(&name))
            .cloned()
            .unwrap_or_else(|| {
                debug!("[Router] no specific component for {key}, using fallback");
                self.fallback.clone()
            });

        self.cache.put(key, binding.clone());
        binding
    }

    /// True iff a registry entry (not the fallback) exists for the entity's
    /// resolved domain and name. Reads the registry only; the cache is
    /// untouched.
    pub fn has_specific_component(
        &self,
        entity: &Entity,
        classification: &ClassificationResult,
    ) -> bool {
        let domain = Self::domain_for(entity, classification);
        let name = entity.name.to_lowercase();
        self.registry
            .get(&domain)
            .is_some_and(|components| components.contains_key(&name))
    }

    /// Registered entity-name keys for `domain`, sorted alphabetically.
    /// Empty for a domain with nothing registered (including `Generic`,
    /// which has no default bindings).
    pub fn available_components(&self, domain: Domain) -> Vec<String> {
        let mut names: Vec<String> = self
            .registry
            .get(&domain)
            .map(|components| components.keys().cloned().collect())
            .unwrap_or_default();
        names.sort();
        names
    }

    /// Total registry entry count across all domains.
    pub fn total_registered_components(&self) -> usize {
        self.registry.values().map(HashMap::len).sum()
    }

    // ─── Registration ─────────────────────────────────────────────────

    /// Insert or overwrite one registry entry. The name is normalized to
    /// lowercase on insert so mixed-case lookups resolve to it.
    pub fn register_component(
        &mut self,
        domain: Domain,
        entity_name: &str,
        binding: RendererBinding,
    ) {
        self.registry
            .entry(domain)
            .or_default()
            .insert(entity_name.to_lowercase(), binding);
        self.invalidate_domain(domain);
        debug!(
            "[Router] registered {}:{}",
            domain,
            entity_name.to_lowercase()
        );
    }

    /// Register a whole plugin bundle for one domain, then run a single
    /// invalidation pass.
    pub fn register_plugin(&mut self, domain: Domain, bindings: Vec<(String, RendererBinding)>) {
        let count = bindings.len();
        let components = self.registry.entry(domain).or_default();
        for (entity_name, binding) in bindings {
            components.insert(entity_name.to_lowercase(), binding);
        }
        self.invalidate_domain(domain);
        debug!("[Router] plugin registered {count} bindings for {domain}");
    }

    // ─── Internals ────────────────────────────────────────────────────

    /// The entity's assigned domain, defaulting to `Generic` when the
    /// classification run never saw this name.
    fn domain_for(entity: &Entity, classification: &ClassificationResult) -> Domain {
        classification
            .entity_domain_map
            .get(&entity.name)
            .copied()
            .unwrap_or(Domain::Generic)
    }

    /// Drop every cache entry belonging to `domain`. Coarse on purpose:
    /// correctness over precision.
    fn invalidate_domain(&mut self, domain: Domain) {
        let prefix = format!("{domain}:");
        let stale: Vec<String> = self
            .cache
            .iter()
            .filter(|(key, _)| key.starts_with(&prefix))
            .map(|(key, _)| key.clone())
            .collect();
        for key in &stale {
            self.cache.pop(key);
        }
        if !stale.is_empty() {
            debug!(
                "[Router] invalidated {} cache entries for {domain}",
                stale.len()
            );
        }
    }
}

fn cache_key(domain: Domain, lowercase_name: &str) -> String {
    format!("{domain}:{lowercase_name}")
}

#[cfg(test)]
#[path = "tests/router_tests.rs"]
mod tests;
