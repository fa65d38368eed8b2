//! Dashboard navigation
//!
//! The dashboard has a two-level menu: collapsible sections containing items.
//! The selected item decides which view the dashboard renders. The publish
//! wizard is not a menu entry; it is entered from the inventory and left by
//! selecting any item.

use std::collections::BTreeSet;

/// View rendered in the dashboard's content area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardView {
    Applications,
    PublishedTasks,
    PublishWizard,
    /// Menu item without a backing view
    Placeholder(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub view: DashboardView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSection {
    pub label: &'static str,
    pub items: Vec<MenuItem>,
}

fn item(label: &'static str, view: DashboardView) -> MenuItem {
    MenuItem { label, view }
}

fn placeholder(label: &'static str) -> MenuItem {
    MenuItem {
        label,
        view: DashboardView::Placeholder(label),
    }
}

/// The console's navigation tree
pub fn console_menu() -> Vec<MenuSection> {
    vec![
        MenuSection {
            label: "Third-Party Patching",
            items: vec![
                item("Applications", DashboardView::Applications),
                item("Published Tasks", DashboardView::PublishedTasks),
            ],
        },
        MenuSection {
            label: "Devices",
            items: vec![placeholder("All Devices"), placeholder("Device Groups")],
        },
        MenuSection {
            label: "Reports",
            items: vec![placeholder("Deployment Status"), placeholder("Compliance")],
        },
        MenuSection {
            label: "Administration",
            items: vec![placeholder("Users"), placeholder("Tenant Settings")],
        },
    ]
}

/// Menu expansion, selection and the resulting view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuState {
    sections: Vec<MenuSection>,
    expanded: BTreeSet<usize>,
    /// `(section, item)` indices
    selected: (usize, usize),
    view: DashboardView,
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuState {
    /// First section expanded, its first item selected
    pub fn new() -> Self {
        let sections = console_menu();
        let view = sections
            .first()
            .and_then(|section| section.items.first())
            .map(|item| item.view)
            .unwrap_or(DashboardView::Applications);
        Self {
            sections,
            expanded: BTreeSet::from([0]),
            selected: (0, 0),
            view,
        }
    }

    pub fn sections(&self) -> &[MenuSection] {
        &self.sections
    }

    pub fn is_expanded(&self, section: usize) -> bool {
        self.expanded.contains(&section)
    }

    pub fn toggle_section(&mut self, section: usize) {
        if section >= self.sections.len() {
            return;
        }
        if !self.expanded.remove(&section) {
            self.expanded.insert(section);
        }
    }

    pub fn is_selected(&self, section: usize, item: usize) -> bool {
        self.selected == (section, item)
    }

    /// Select an item and switch to its view. Leaves the wizard if it is open.
    pub fn select(&mut self, section: usize, item: usize) -> Option<DashboardView> {
        let view = self.sections.get(section)?.items.get(item)?.view;
        if self.view == DashboardView::PublishWizard {
            tracing::debug!("Leaving publish wizard through navigation");
        }
        self.selected = (section, item);
        self.expanded.insert(section);
        self.view = view;
        Some(view)
    }

    /// Show the publish wizard; the menu selection is unchanged
    pub fn open_wizard(&mut self) {
        self.view = DashboardView::PublishWizard;
    }

    /// Leave the wizard back to the selected item's view
    pub fn close_wizard(&mut self) {
        let (section, item) = self.selected;
        self.view = self
            .sections
            .get(section)
            .and_then(|s| s.items.get(item))
            .map(|item| item.view)
            .unwrap_or(DashboardView::Applications);
    }

    pub fn current_view(&self) -> DashboardView {
        self.view
    }

    /// Section and item labels, plus "Create Publish Task" inside the wizard
    pub fn breadcrumb(&self) -> Vec<&'static str> {
        let (section, item) = self.selected;
        let mut crumbs = Vec::new();
        if let Some(section) = self.sections.get(section) {
            crumbs.push(section.label);
            if let Some(item) = section.items.get(item) {
                crumbs.push(item.label);
            }
        }
        if self.view == DashboardView::PublishWizard {
            crumbs.push("Create Publish Task");
        }
        crumbs
    }
}
