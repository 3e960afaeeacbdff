//! Context classifier — assigns entities to business domains by weighted
//! keyword scoring against static vocabularies.
//!
//! **Algorithm:**
//! 1. Score each entity against each specific domain's vocabulary:
//!    exact name match 20, partial name match 10, exact attribute 5,
//!    partial attribute 2 (all contributions summed).
//! 2. Per-entity winner = strictly highest domain score, checked in fixed
//!    order (e-commerce → user-management → admin); all zero → `Generic`
//!    with a flat contribution of 1.
//! 3. Primary domain = top aggregate, unless the contest is close
//!    (< 1.5× the runner-up), in which case a `Generic` leader yields to
//!    the best specific domain.
//!
//! Stateless and synchronous: identical input always produces an identical
//! result, and no call can fail.

pub mod patterns;

use std::collections::HashMap;

use log::debug;

use crate::types::{ClassificationResult, Domain, DomainScore, Entity};

// ─── Scoring Weights ─────────────────────────────────────────────────────────

/// Exact match of the entity name against a vocabulary word.
const WEIGHT_NAME_EXACT: u32 = 20;
/// Meaningful partial match of the entity name.
const WEIGHT_NAME_PARTIAL: u32 = 10;
/// Exact match of one attribute.
const WEIGHT_ATTR_EXACT: u32 = 5;
/// Meaningful partial match of one attribute.
const WEIGHT_ATTR_PARTIAL: u32 = 2;

/// Flat contribution of an entity that matched nothing, so `Generic` can
/// still win the aggregate when no specific domain matched at all.
const GENERIC_BASE_SCORE: u32 = 1;

/// A leading total below this multiple of the runner-up is a "close
/// contest" and triggers the generic-yields tie-break.
const DOMINANCE_RATIO: f64 = 1.5;

// ─── Public API ──────────────────────────────────────────────────────────────

/// Classify an entity set into business domains.
///
/// Returns one `DomainScore` per domain (zero entries included) sorted
/// descending by score, a per-entity domain map (last write wins on
/// duplicate names), and the primary domain for the whole set.
///
/// Never fails; an empty slice yields four zero scores, an empty map, and
/// `Domain::Generic` as primary.
pub fn classify(entities: &[Entity]) -> ClassificationResult {
    let mut scores: Vec<DomainScore> = Domain::ALL.iter().map(|d| DomainScore::zero(*d)).collect();
    let mut entity_domain_map: HashMap<String, Domain> = HashMap::new();

    for entity in entities {
        let (winner, contribution) = classify_entity(entity);

        // `scores` is built in enumeration order, so index by it.
        let slot = &mut scores[winner.order()];
        slot.score += contribution;
        slot.matched_entities.push(entity.name.clone());

        entity_domain_map.insert(entity.name.clone(), winner);
    }

    let primary_domain = pick_primary(&scores);

    // Descending by score; the sort is stable, so ties keep enumeration order.
    scores.sort_by(|a, b| b.score.cmp(&a.score));

    debug!(
        "[Classifier] {} entities → primary={} totals=[{}]",
        entities.len(),
        primary_domain,
        scores
            .iter()
            .map(|s| format!("{}:{}", s.domain, s.score))
            .collect::<Vec<_>>()
            .join(" ")
    );

    ClassificationResult {
        primary_domain,
        domain_scores: scores,
        entity_domain_map,
    }
}

// ─── Per-Entity Scoring ──────────────────────────────────────────────────────

/// Winning domain and score contribution for a single entity.
///
/// Domains are checked in `Domain::SPECIFIC` order and only a strictly
/// higher score displaces the current winner, so ties keep the earlier
/// domain. A zero best score assigns `Generic` with the flat base score.
fn classify_entity(entity: &Entity) -> (Domain, u32) {
    let name = entity.name.to_lowercase();
    let attributes: Vec<String> = entity.attributes.iter().map(|a| a.to_lowercase()).collect();

    let mut winner = Domain::Generic;
    let mut best: u32 = 0;

    for domain in Domain::SPECIFIC {
        let score = affinity_score(&name, &attributes, patterns::vocabulary(domain));

        #[cfg(feature = "debug_classifier")]
        debug!(
            "[Classifier] affinity: entity={} domain={} score={}",
            entity.name, domain, score
        );

        if score > best {
            best = score;
            winner = domain;
        }
    }

    if winner == Domain::Generic {
        (Domain::Generic, GENERIC_BASE_SCORE)
    } else {
        (winner, best)
    }
}

/// Weighted affinity of one (lowercased) entity against one vocabulary.
fn affinity_score(name: &str, attributes: &[String], vocabulary: &[&str]) -> u32 {
    let mut score = 0;

    for word in vocabulary {
        if name == *word {
            score += WEIGHT_NAME_EXACT;
        } else if patterns::partial_match(name, word) {
            score += WEIGHT_NAME_PARTIAL;
        }

        for attribute in attributes {
            if attribute == word {
                score += WEIGHT_ATTR_EXACT;
            } else if patterns::partial_match(attribute, word) {
                score += WEIGHT_ATTR_PARTIAL;
            }
        }
    }

    score
}

// ─── Primary Domain Selection ────────────────────────────────────────────────

/// Pick the primary domain from the aggregate totals.
///
/// Totals are ranked descending (stable, so ties keep enumeration order).
/// A zero leader means nothing matched → `Generic`. A leader at ≥ 1.5× the
/// runner-up wins outright. In a close contest a specific leader still
/// wins, but a `Generic` leader yields to the best specific domain — a few
/// generic-looking entities mixed with fewer but more domain-specific ones
/// still produce a specific primary domain.
fn pick_primary(scores: &[DomainScore]) -> Domain {
    let mut ranked: Vec<(Domain, u32)> = scores.iter().map(|s| (s.domain, s.score)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let (top_domain, top) = ranked[0];
    let (second_domain, second) = ranked[1];

    if top == 0 {
        return Domain::Generic;
    }
    if top as f64 >= second as f64 * DOMINANCE_RATIO {
        return top_domain;
    }
    if top_domain != Domain::Generic {
        return top_domain;
    }
    if second_domain != Domain::Generic {
        return second_domain;
    }
    Domain::Generic
}

#[cfg(test)]
#[path = "tests/classifier_tests.rs"]
mod tests;
