//! Built-in domain plugins: the fixed domain → entity-name → renderer
//! binding tables the presentation layer registers once at startup, before
//! any resolve call. Further plugins may be registered at any later point.

use std::sync::Arc;

use crate::services::mockview::renderers::{
    AdminDashboardRenderer, CartSummaryRenderer, CustomerDirectoryRenderer, OrderHistoryRenderer,
    ProductTableRenderer, ProfileCardRenderer, RolePermissionMatrixRenderer, SettingsPanelRenderer,
    SystemLogRenderer, UserDirectoryRenderer,
};
use crate::services::mockview::{EntityRenderer, RendererBinding};
use crate::services::router::ComponentRouter;
use crate::types::Domain;

/// One ready-to-register plugin bundle.
pub struct DomainPlugin {
    pub domain: Domain,
    pub bindings: Vec<(String, RendererBinding)>,
}

fn bind(name: &str, renderer: impl EntityRenderer + 'static) -> (String, RendererBinding) {
    (name.to_string(), Arc::new(renderer))
}

/// The built-in e-commerce / user-management / admin plugin bundles.
/// `Generic` ships no bundle: its entities always take the fallback form.
pub fn builtin_plugins() -> Vec<DomainPlugin> {
    vec![
        DomainPlugin {
            domain: Domain::Ecommerce,
            bindings: vec![
                bind("product", ProductTableRenderer),
                bind("products", ProductTableRenderer),
                bind("inventory", ProductTableRenderer),
                bind("cart", CartSummaryRenderer),
                bind("checkout", CartSummaryRenderer),
                bind("order", OrderHistoryRenderer),
                bind("orders", OrderHistoryRenderer),
                bind("invoice", OrderHistoryRenderer),
                bind("customer", CustomerDirectoryRenderer),
                bind("customers", CustomerDirectoryRenderer),
            ],
        },
        DomainPlugin {
            domain: Domain::UserManagement,
            bindings: vec![
                bind("user", UserDirectoryRenderer),
                bind("users", UserDirectoryRenderer),
                bind("member", UserDirectoryRenderer),
                bind("account", ProfileCardRenderer),
                bind("profile", ProfileCardRenderer),
                bind("role", RolePermissionMatrixRenderer),
                bind("roles", RolePermissionMatrixRenderer),
                bind("permission", RolePermissionMatrixRenderer),
                bind("permissions", RolePermissionMatrixRenderer),
            ],
        },
        DomainPlugin {
            domain: Domain::Admin,
            bindings: vec![
                bind("admin", AdminDashboardRenderer),
                bind("dashboard", AdminDashboardRenderer),
                bind("system", AdminDashboardRenderer),
                bind("log", SystemLogRenderer),
                bind("logs", SystemLogRenderer),
                bind("audit", SystemLogRenderer),
                bind("setting", SettingsPanelRenderer),
                bind("settings", SettingsPanelRenderer),
                bind("config", SettingsPanelRenderer),
            ],
        },
    ]
}

/// Startup seeding step: register every built-in plugin bundle.
pub fn install_builtin_plugins(router: &mut ComponentRouter) {
    for plugin in builtin_plugins() {
        router.register_plugin(plugin.domain, plugin.bindings);
    }
}

#[cfg(test)]
#[path = "tests/plugins_tests.rs"]
mod tests;
