//! Global State Management
//!
//! This module manages the global application state including:
//! - Configuration and the storage handle
//! - Toast notifications
//! - Inventory filters and selection
//! - Dashboard menu and the open publish wizard
//!
//! Every field is a signal or stored value, so `AppState` is `Copy` and can be
//! moved into as many closures as a view needs.

use gloo_timers::callback::Timeout;
use leptos::*;
use patchtune_shared::{
    generate_catalog, is_authenticated, ApiClient, ApplicationRecord, ConsoleConfig,
    DashboardView, Inventory, MenuState, Notification, PublishTaskWizard,
};
use uuid::Uuid;

use crate::client::{GlooTransport, LocalStore};

/// Store handle shared by every service
///
/// Reads go straight to localStorage so a remounted view sees writes made by
/// other tabs since the page loaded.
pub type ConsoleStore = LocalStore;

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    pub config: StoredValue<ConsoleConfig>,

    store: StoredValue<ConsoleStore>,

    /// Visible toasts, oldest first
    pub toasts: RwSignal<Vec<Notification>>,

    /// Application inventory with filters and selection
    pub inventory: RwSignal<Inventory>,

    /// Dashboard navigation
    pub menu: RwSignal<MenuState>,

    /// Open publish wizard, if any
    pub wizard: RwSignal<Option<PublishTaskWizard>>,
}

impl AppState {
    pub fn new(config: ConsoleConfig) -> Self {
        let inventory = Inventory::new(generate_catalog(config.inventory_size));
        Self {
            config: store_value(config),
            store: store_value(LocalStore),
            toasts: create_rw_signal(Vec::new()),
            inventory: create_rw_signal(inventory),
            menu: create_rw_signal(MenuState::new()),
            wizard: create_rw_signal(None),
        }
    }

    pub fn store(&self) -> ConsoleStore {
        self.store.get_value()
    }

    pub fn api_client(&self) -> ApiClient<GlooTransport, ConsoleStore> {
        ApiClient::new(self.config.get_value(), GlooTransport, self.store())
    }

    pub fn is_authenticated(&self) -> bool {
        is_authenticated(&self.store())
    }

    /// Drop the token and any per-session UI state
    pub fn logout(&self) {
        self.api_client().logout();
        self.wizard.set(None);
        self.menu.set(MenuState::new());
        self.inventory.update(|inv| {
            inv.clear_filters();
            inv.clear_selection();
        });
    }

    /// Show a toast that dismisses itself after the configured duration
    pub fn notify(&self, notification: Notification) {
        let id = notification.id;
        let toasts = self.toasts;
        toasts.update(|t| t.push(notification));

        let duration = self.config.with_value(|c| c.toast_duration_ms);
        Timeout::new(duration, move || {
            toasts.update(|t| t.retain(|n| n.id != id));
        })
        .forget();
    }

    pub fn dismiss(&self, id: Uuid) {
        self.toasts.update(|t| t.retain(|n| n.id != id));
    }

    // ------------------------------------------------------------------
    // Navigation and wizard
    // ------------------------------------------------------------------

    pub fn current_view(&self) -> DashboardView {
        self.menu.with(|m| m.current_view())
    }

    /// Select a menu item; an open wizard is discarded
    pub fn select_menu(&self, section: usize, item: usize) {
        if self.wizard.with_untracked(Option::is_some) {
            self.wizard.set(None);
        }
        self.menu.update(|m| {
            m.select(section, item);
        });
    }

    /// Open the publish wizard seeded with the inventory hand-off
    pub fn start_wizard(&self, applications: Vec<ApplicationRecord>) {
        let language = self.config.with_value(|c| c.default_language);
        self.wizard
            .set(Some(PublishTaskWizard::new(applications, language)));
        self.menu.update(|m| m.open_wizard());
    }

    /// Leave the wizard, discarding its state
    pub fn close_wizard(&self) {
        self.wizard.set(None);
        self.menu.update(|m| m.close_wizard());
    }

    /// Read from the open wizard; `R::default()` when none is open
    pub fn with_wizard<R: Default>(&self, f: impl FnOnce(&PublishTaskWizard) -> R) -> R {
        self.wizard.with(|w| w.as_ref().map(f).unwrap_or_default())
    }

    pub fn update_wizard(&self, f: impl FnOnce(&mut PublishTaskWizard)) {
        self.wizard.update(|w| {
            if let Some(wizard) = w.as_mut() {
                f(wizard);
            }
        });
    }
}
