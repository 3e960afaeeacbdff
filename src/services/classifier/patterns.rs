//! Static vocabulary tables and the "meaningful partial match" rules.
//!
//! Matching is deliberately NOT fuzzy: a token either matches a vocabulary
//! word exactly, or it hits the explicit plural/compound allow-list, or it
//! extends the word by one of the recognized semantic prefixes/suffixes.
//! Plain substring containment never counts, so e.g. "pricing" does not
//! match "price".

use crate::types::Domain;

/// E-commerce vocabulary: product / cart / order / customer family terms.
pub const ECOMMERCE_PATTERNS: &[&str] = &[
    "product",
    "cart",
    "order",
    "customer",
    "payment",
    "invoice",
    "checkout",
    "item",
    "price",
    "shipping",
    "inventory",
    "category",
    "discount",
    "sku",
];

/// User-management vocabulary: user / role / permission family terms.
pub const USER_MANAGEMENT_PATTERNS: &[&str] = &[
    "user",
    "role",
    "permission",
    "account",
    "profile",
    "group",
    "member",
    "session",
    "credential",
    "password",
    "email",
];

/// Administration vocabulary: admin / config / log / report family terms.
pub const ADMIN_PATTERNS: &[&str] = &[
    "admin",
    "config",
    "configuration",
    "setting",
    "log",
    "report",
    "audit",
    "dashboard",
    "system",
    "monitor",
    "backup",
    "metric",
];

/// Allow-listed plural/singular and compound-word pairs. Symmetric: a pair
/// matches in either direction.
pub const PARTIAL_MATCH_PAIRS: &[(&str, &str)] = &[
    ("products", "product"),
    ("carts", "cart"),
    ("orders", "order"),
    ("customers", "customer"),
    ("payments", "payment"),
    ("invoices", "invoice"),
    ("items", "item"),
    ("prices", "price"),
    ("categories", "category"),
    ("discounts", "discount"),
    ("users", "user"),
    ("roles", "role"),
    ("permissions", "permission"),
    ("accounts", "account"),
    ("profiles", "profile"),
    ("groups", "group"),
    ("members", "member"),
    ("sessions", "session"),
    ("credentials", "credential"),
    ("passwords", "password"),
    ("emails", "email"),
    ("admins", "admin"),
    ("configs", "config"),
    ("settings", "setting"),
    ("logs", "log"),
    ("reports", "report"),
    ("audits", "audit"),
    ("dashboards", "dashboard"),
    ("backups", "backup"),
    ("metrics", "metric"),
    // Compound words
    ("username", "user"),
    ("shoppingcart", "cart"),
    ("lineitem", "item"),
];

/// Recognized semantic prefixes: a token extending one of these stems
/// (e.g. "user_settings") partially matches the bare stem word.
pub const SEMANTIC_PREFIXES: &[&str] = &["user_", "admin_", "product_", "order_", "customer_"];

/// Recognized semantic suffixes: a token formed as `<word><suffix>`
/// (e.g. "order_status") partially matches the bare word.
pub const SEMANTIC_SUFFIXES: &[&str] = &["_id", "_name", "_type", "_status", "_date", "_time"];

/// Vocabulary table for a domain. `Generic` has no vocabulary by design.
pub fn vocabulary(domain: Domain) -> &'static [&'static str] {
    match domain {
        Domain::Ecommerce => ECOMMERCE_PATTERNS,
        Domain::UserManagement => USER_MANAGEMENT_PATTERNS,
        Domain::Admin => ADMIN_PATTERNS,
        Domain::Generic => &[],
    }
}

/// Meaningful partial match between a lowercased token and a vocabulary word.
///
/// True only for:
/// - an allow-listed plural/singular or compound pair, or
/// - a token that starts with a recognized semantic prefix whose bare stem
///   is the word (`"user_settings"` vs `"user"`), or
/// - a token that is the word plus a recognized semantic suffix
///   (`"order_status"` vs `"order"`).
pub fn partial_match(token: &str, word: &str) -> bool {
    if PARTIAL_MATCH_PAIRS
        .iter()
        .any(|(a, b)| (token == *a && word == *b) || (token == *b && word == *a))
    {
        return true;
    }

    if SEMANTIC_PREFIXES
        .iter()
        .any(|p| token.starts_with(p) && p.trim_end_matches('_') == word)
    {
        return true;
    }

    SEMANTIC_SUFFIXES
        .iter()
        .any(|s| token.ends_with(s) && token[..token.len() - s.len()] == *word)
}

#[cfg(test)]
#[path = "tests/patterns_tests.rs"]
mod tests;
