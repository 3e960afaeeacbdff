//! Built-in specific renderers the default domain plugins bind. Each one
//! produces a static mock screen with randomly generated placeholder data;
//! none of them inspect the classification, they only draw.

use rand::Rng;

use crate::services::mockview::mock_data;
use crate::services::mockview::view_node::ViewNode;
use crate::services::mockview::EntityRenderer;
use crate::types::Entity;

/// Table columns for an entity: its own attributes, or `defaults` when the
/// blueprint supplied none.
fn columns_or(entity: &Entity, defaults: &[&str]) -> Vec<String> {
    if entity.attributes.is_empty() {
        defaults.iter().map(|c| c.to_string()).collect()
    } else {
        entity.attributes.clone()
    }
}

// ─── E-Commerce ──────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct ProductTableRenderer;

impl EntityRenderer for ProductTableRenderer {
    fn component_name(&self) -> &'static str {
        "product_table"
    }

    fn render(&self, entity: &Entity) -> ViewNode {
        let columns = columns_or(entity, &["name", "price", "stock", "category"]);
        let rows = mock_data::mock_rows(&columns, 5);
        ViewNode::Table {
            title: format!("{} Catalog", entity.name),
            columns,
            rows,
        }
    }
}

#[derive(Debug, Default)]
pub struct CartSummaryRenderer;

impl EntityRenderer for CartSummaryRenderer {
    fn component_name(&self) -> &'static str {
        "cart_summary"
    }

    fn render(&self, entity: &Entity) -> ViewNode {
        let mut rng = rand::thread_rng();
        let items = mock_data::sample_items(3);
        ViewNode::Section {
            title: format!("{} Summary", entity.name),
            children: vec![
                ViewNode::ItemList {
                    title: "Items".to_string(),
                    items,
                },
                ViewNode::StatCard {
                    label: "Subtotal".to_string(),
                    value: format!("${:.2}", rng.gen_range(20.0..300.0)),
                },
                ViewNode::Badge {
                    label: "Checkout ready".to_string(),
                },
            ],
        }
    }
}

#[derive(Debug, Default)]
pub struct OrderHistoryRenderer;

impl EntityRenderer for OrderHistoryRenderer {
    fn component_name(&self) -> &'static str {
        "order_history"
    }

    fn render(&self, entity: &Entity) -> ViewNode {
        let columns = columns_or(entity, &["order_id", "order_date", "order_status", "total"]);
        let rows = mock_data::mock_rows(&columns, 6);
        ViewNode::Table {
            title: format!("{} History", entity.name),
            columns,
            rows,
        }
    }
}

#[derive(Debug, Default)]
pub struct CustomerDirectoryRenderer;

impl EntityRenderer for CustomerDirectoryRenderer {
    fn component_name(&self) -> &'static str {
        "customer_directory"
    }

    fn render(&self, entity: &Entity) -> ViewNode {
        let columns = columns_or(entity, &["name", "email", "order_count"]);
        let rows = mock_data::mock_rows(&columns, 5);
        ViewNode::Table {
            title: format!("{} Directory", entity.name),
            columns,
            rows,
        }
    }
}

// ─── User Management ─────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct UserDirectoryRenderer;

impl EntityRenderer for UserDirectoryRenderer {
    fn component_name(&self) -> &'static str {
        "user_directory"
    }

    fn render(&self, entity: &Entity) -> ViewNode {
        let columns = columns_or(entity, &["username", "email", "role", "last_login_date"]);
        let rows = mock_data::mock_rows(&columns, 5);
        ViewNode::Table {
            title: format!("{} Directory", entity.name),
            columns,
            rows,
        }
    }
}

#[derive(Debug, Default)]
pub struct RolePermissionMatrixRenderer;

impl EntityRenderer for RolePermissionMatrixRenderer {
    fn component_name(&self) -> &'static str {
        "role_permission_matrix"
    }

    fn render(&self, entity: &Entity) -> ViewNode {
        let permissions = ["read", "write", "delete", "manage"];
        let mut rng = rand::thread_rng();
        let columns: Vec<String> = std::iter::once("role".to_string())
            .chain(permissions.iter().map(|p| p.to_string()))
            .collect();
        let rows = ["Viewer", "Editor", "Owner"]
            .iter()
            .map(|role| {
                std::iter::once(role.to_string())
                    .chain(permissions.iter().map(|_| {
                        let granted = if rng.gen_bool(0.6) { "✓" } else { "—" };
                        granted.to_string()
                    }))
                    .collect()
            })
            .collect();
        ViewNode::Table {
            title: format!("{} Matrix", entity.name),
            columns,
            rows,
        }
    }
}

#[derive(Debug, Default)]
pub struct ProfileCardRenderer;

impl EntityRenderer for ProfileCardRenderer {
    fn component_name(&self) -> &'static str {
        "profile_card"
    }

    fn render(&self, entity: &Entity) -> ViewNode {
        let children = entity
            .attributes
            .iter()
            .map(|attribute| ViewNode::StatCard {
                label: attribute.clone(),
                value: mock_data::mock_value(attribute),
            })
            .collect();
        ViewNode::Section {
            title: entity.name.clone(),
            children,
        }
    }
}

// ─── Administration ──────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct AdminDashboardRenderer;

impl EntityRenderer for AdminDashboardRenderer {
    fn component_name(&self) -> &'static str {
        "admin_dashboard"
    }

    fn render(&self, entity: &Entity) -> ViewNode {
        let mut rng = rand::thread_rng();
        ViewNode::Section {
            title: format!("{} Overview", entity.name),
            children: vec![
                ViewNode::StatCard {
                    label: "Active sessions".to_string(),
                    value: rng.gen_range(10..500).to_string(),
                },
                ViewNode::StatCard {
                    label: "Open reports".to_string(),
                    value: rng.gen_range(0..40).to_string(),
                },
                ViewNode::StatCard {
                    label: "System health".to_string(),
                    value: "OK".to_string(),
                },
            ],
        }
    }
}

#[derive(Debug, Default)]
pub struct SystemLogRenderer;

impl EntityRenderer for SystemLogRenderer {
    fn component_name(&self) -> &'static str {
        "system_log"
    }

    fn render(&self, entity: &Entity) -> ViewNode {
        let items = (0..6)
            .map(|_| {
                format!(
                    "{} [INFO] {}",
                    mock_data::mock_value("event_time"),
                    mock_data::mock_value("message")
                )
            })
            .collect();
        ViewNode::ItemList {
            title: format!("{} Entries", entity.name),
            items,
        }
    }
}

#[derive(Debug, Default)]
pub struct SettingsPanelRenderer;

impl EntityRenderer for SettingsPanelRenderer {
    fn render(&self, entity: &Entity) -> ViewNode {
        use crate::services::mockview::view_node::{FieldInput, FormField};

        let fields = columns_or(entity, &["site_name", "maintenance_enabled", "backup_time"])
            .iter()
            .map(|attribute| FormField {
                label: attribute.clone(),
                input: if attribute.contains("enabled") {
                    FieldInput::Checkbox
                } else {
                    FieldInput::Text
                },
            })
            .collect();

        ViewNode::Form {
            title: format!("{} Settings", entity.name),
            fields,
            submit_label: "Apply".to_string(),
        }
    }

    fn component_name(&self) -> &'static str {
        "settings_panel"
    }
}

#[cfg(test)]
#[path = "tests/renderers_tests.rs"]
mod tests;
