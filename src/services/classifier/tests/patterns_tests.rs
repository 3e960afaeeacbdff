//! Unit tests for the vocabulary tables and partial-match rules.

use crate::services::classifier::patterns::{partial_match, vocabulary};
use crate::types::Domain;

// ─── Vocabularies ────────────────────────────────────────────────────────────

#[test]
fn each_specific_domain_has_a_vocabulary() {
    for domain in Domain::SPECIFIC {
        assert!(!vocabulary(domain).is_empty(), "{domain} vocabulary empty");
    }
}

#[test]
fn generic_has_no_vocabulary() {
    assert!(vocabulary(Domain::Generic).is_empty());
}

#[test]
fn vocabularies_are_lowercase_and_disjoint_on_anchors() {
    for domain in Domain::SPECIFIC {
        for word in vocabulary(domain) {
            assert_eq!(*word, word.to_lowercase());
        }
    }
    // The anchor terms of each domain must not leak into another vocabulary,
    // or exact-name ties would reassign them.
    assert!(!vocabulary(Domain::UserManagement).contains(&"admin"));
    assert!(!vocabulary(Domain::Admin).contains(&"user"));
    assert!(!vocabulary(Domain::Ecommerce).contains(&"user"));
}

// ─── Allow-Listed Pairs ──────────────────────────────────────────────────────

#[test]
fn plural_pairs_match_in_both_directions() {
    assert!(partial_match("products", "product"));
    assert!(partial_match("product", "products"));
    assert!(partial_match("permissions", "permission"));
    assert!(partial_match("categories", "category"));
}

#[test]
fn compound_pairs_match() {
    assert!(partial_match("username", "user"));
    assert!(partial_match("shoppingcart", "cart"));
}

// ─── Prefix / Suffix Rules ───────────────────────────────────────────────────

#[test]
fn semantic_prefix_extends_the_bare_word() {
    assert!(partial_match("user_settings", "user"));
    assert!(partial_match("admin_panel", "admin"));
    assert!(partial_match("product_code", "product"));
}

#[test]
fn semantic_prefix_requires_matching_stem() {
    // "user_settings" extends "user", not "setting".
    assert!(!partial_match("user_settings", "setting"));
}

#[test]
fn semantic_suffix_extends_the_bare_word() {
    assert!(partial_match("order_status", "order"));
    assert!(partial_match("customer_id", "customer"));
    assert!(partial_match("payment_date", "payment"));
    assert!(partial_match("session_time", "session"));
}

#[test]
fn semantic_suffix_requires_exact_stem() {
    // "preorder_status" is not "order" plus a suffix.
    assert!(!partial_match("preorder_status", "order"));
}

// ─── No Naive Containment ────────────────────────────────────────────────────

#[test]
fn plain_substring_containment_does_not_match() {
    assert!(!partial_match("pricing", "price"));
    assert!(!partial_match("reorder", "order"));
    assert!(!partial_match("producta", "product"));
    assert!(!partial_match("caretaker", "cart"));
}

#[test]
fn unrelated_tokens_do_not_match() {
    assert!(!partial_match("title", "product"));
    assert!(!partial_match("author", "user"));
}
