//! Unit tests for the built-in mock renderers. Placeholder values are
//! random; tests assert structure, titles, and shapes only.

use crate::services::mockview::renderers::{
    AdminDashboardRenderer, CartSummaryRenderer, OrderHistoryRenderer, ProductTableRenderer,
    ProfileCardRenderer, RolePermissionMatrixRenderer, SettingsPanelRenderer, SystemLogRenderer,
    UserDirectoryRenderer,
};
use crate::services::mockview::view_node::{FieldInput, ViewNode};
use crate::services::mockview::EntityRenderer;
use crate::types::Entity;

#[test]
fn product_table_uses_entity_attributes_as_columns() {
    let entity = Entity::new("Product", &["name", "price", "sku"]);
    match ProductTableRenderer.render(&entity) {
        ViewNode::Table {
            title,
            columns,
            rows,
        } => {
            assert_eq!(title, "Product Catalog");
            assert_eq!(columns, vec!["name", "price", "sku"]);
            assert_eq!(rows.len(), 5);
            assert!(rows.iter().all(|r| r.len() == 3));
        }
        other => panic!("expected table, got {other:?}"),
    }
}

#[test]
fn product_table_falls_back_to_default_columns() {
    let entity = Entity::new("Product", &[]);
    match ProductTableRenderer.render(&entity) {
        ViewNode::Table { columns, .. } => {
            assert_eq!(columns, vec!["name", "price", "stock", "category"]);
        }
        other => panic!("expected table, got {other:?}"),
    }
}

#[test]
fn cart_summary_has_items_subtotal_and_badge() {
    let entity = Entity::new("Cart", &[]);
    match CartSummaryRenderer.render(&entity) {
        ViewNode::Section { title, children } => {
            assert_eq!(title, "Cart Summary");
            assert_eq!(children.len(), 3);
            assert!(matches!(children[0], ViewNode::ItemList { .. }));
            assert!(matches!(children[1], ViewNode::StatCard { .. }));
            assert!(matches!(children[2], ViewNode::Badge { .. }));
        }
        other => panic!("expected section, got {other:?}"),
    }
}

#[test]
fn order_history_renders_six_placeholder_rows() {
    let entity = Entity::new("Order", &[]);
    match OrderHistoryRenderer.render(&entity) {
        ViewNode::Table { rows, columns, .. } => {
            assert_eq!(rows.len(), 6);
            assert!(columns.contains(&"order_status".to_string()));
        }
        other => panic!("expected table, got {other:?}"),
    }
}

#[test]
fn user_directory_is_a_table() {
    let entity = Entity::new("User", &["username", "email"]);
    match UserDirectoryRenderer.render(&entity) {
        ViewNode::Table { columns, rows, .. } => {
            assert_eq!(columns, vec!["username", "email"]);
            assert!(!rows.is_empty());
        }
        other => panic!("expected table, got {other:?}"),
    }
}

#[test]
fn role_matrix_has_one_row_per_role() {
    let entity = Entity::new("Role", &[]);
    match RolePermissionMatrixRenderer.render(&entity) {
        ViewNode::Table { columns, rows, .. } => {
            assert_eq!(columns.len(), 5); // role + four permissions
            assert_eq!(rows.len(), 3);
            for row in &rows {
                assert_eq!(row.len(), 5);
                for cell in &row[1..] {
                    assert!(cell == "✓" || cell == "—", "unexpected cell {cell}");
                }
            }
        }
        other => panic!("expected table, got {other:?}"),
    }
}

#[test]
fn profile_card_renders_a_stat_per_attribute() {
    let entity = Entity::new("Profile", &["username", "email", "last_login_date"]);
    match ProfileCardRenderer.render(&entity) {
        ViewNode::Section { children, .. } => {
            assert_eq!(children.len(), 3);
            assert!(children
                .iter()
                .all(|c| matches!(c, ViewNode::StatCard { .. })));
        }
        other => panic!("expected section, got {other:?}"),
    }
}

#[test]
fn admin_dashboard_shows_three_stat_cards() {
    let entity = Entity::new("Admin", &[]);
    match AdminDashboardRenderer.render(&entity) {
        ViewNode::Section { title, children } => {
            assert_eq!(title, "Admin Overview");
            assert_eq!(children.len(), 3);
            assert!(children
                .iter()
                .all(|c| matches!(c, ViewNode::StatCard { .. })));
        }
        other => panic!("expected section, got {other:?}"),
    }
}

#[test]
fn system_log_lists_entries() {
    let entity = Entity::new("Log", &[]);
    match SystemLogRenderer.render(&entity) {
        ViewNode::ItemList { items, .. } => {
            assert_eq!(items.len(), 6);
            assert!(items.iter().all(|i| i.contains("[INFO]")));
        }
        other => panic!("expected item list, got {other:?}"),
    }
}

#[test]
fn settings_panel_uses_checkboxes_for_toggles() {
    let entity = Entity::new("Settings", &[]);
    match SettingsPanelRenderer.render(&entity) {
        ViewNode::Form { fields, .. } => {
            let toggle = fields
                .iter()
                .find(|f| f.label == "maintenance_enabled")
                .expect("default toggle field present");
            assert_eq!(toggle.input, FieldInput::Checkbox);
        }
        other => panic!("expected form, got {other:?}"),
    }
}

#[test]
fn component_names_are_unique() {
    let names = [
        ProductTableRenderer.component_name(),
        CartSummaryRenderer.component_name(),
        OrderHistoryRenderer.component_name(),
        UserDirectoryRenderer.component_name(),
        RolePermissionMatrixRenderer.component_name(),
        ProfileCardRenderer.component_name(),
        AdminDashboardRenderer.component_name(),
        SystemLogRenderer.component_name(),
        SettingsPanelRenderer.component_name(),
    ];
    let mut deduped = names.to_vec();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), names.len());
}
