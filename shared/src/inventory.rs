//! Application inventory
//!
//! The inventory is a synthetic catalogue of third-party applications shown in
//! a table. Admins narrow it with substring filters, select rows, and hand the
//! selection to the publish task wizard.
//!
//! - Filters combine with AND; matching is case-insensitive substring search
//!   on the stringified field value
//! - Row indices are catalogue positions, so a selection survives filter
//!   changes
//! - Only rows that are both selected and visible are handed off

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::ConsoleError;

/// One application in the inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRecord {
    pub name: String,
    pub vendor: String,
    pub version: String,
    pub release_date: NaiveDate,
    pub category: String,
    pub inventory_status: InventoryStatus,
    pub publish_status: PublishStatus,
    /// Title of the publish task that already ships this application
    pub publish_task: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InventoryStatus {
    Installed,
    UpdateAvailable,
    NotInstalled,
}

impl InventoryStatus {
    pub fn label(&self) -> &'static str {
        match self {
            InventoryStatus::Installed => "Installed",
            InventoryStatus::UpdateAvailable => "Update Available",
            InventoryStatus::NotInstalled => "Not Installed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PublishStatus {
    Published,
    Unpublished,
}

impl PublishStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PublishStatus::Published => "Published",
            PublishStatus::Unpublished => "Unpublished",
        }
    }
}

/// Filterable inventory columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InventoryField {
    Name,
    Vendor,
    Version,
    ReleaseDate,
    Category,
    InventoryStatus,
    PublishStatus,
    PublishTask,
}

impl InventoryField {
    pub fn all() -> &'static [InventoryField] {
        &[
            InventoryField::Name,
            InventoryField::Vendor,
            InventoryField::Version,
            InventoryField::ReleaseDate,
            InventoryField::Category,
            InventoryField::InventoryStatus,
            InventoryField::PublishStatus,
            InventoryField::PublishTask,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            InventoryField::Name => "Name",
            InventoryField::Vendor => "Vendor",
            InventoryField::Version => "Version",
            InventoryField::ReleaseDate => "Release Date",
            InventoryField::Category => "Category",
            InventoryField::InventoryStatus => "Inventory Status",
            InventoryField::PublishStatus => "Publish Status",
            InventoryField::PublishTask => "Publish Task",
        }
    }

    /// Look a field up by its label (used by the filter picker's select)
    pub fn from_label(label: &str) -> Option<InventoryField> {
        InventoryField::all()
            .iter()
            .copied()
            .find(|field| field.label() == label)
    }

    /// Stringified value of this field, as displayed in the table
    pub fn value_of(&self, record: &ApplicationRecord) -> String {
        match self {
            InventoryField::Name => record.name.clone(),
            InventoryField::Vendor => record.vendor.clone(),
            InventoryField::Version => record.version.clone(),
            InventoryField::ReleaseDate => record.release_date.format("%Y-%m-%d").to_string(),
            InventoryField::Category => record.category.clone(),
            InventoryField::InventoryStatus => record.inventory_status.label().to_string(),
            InventoryField::PublishStatus => record.publish_status.label().to_string(),
            InventoryField::PublishTask => record.publish_task.clone().unwrap_or_default(),
        }
    }
}

/// `(field, substring)` filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub field: InventoryField,
    pub value: String,
}

impl Filter {
    pub fn matches(&self, record: &ApplicationRecord) -> bool {
        self.field
            .value_of(record)
            .to_lowercase()
            .contains(&self.value.to_lowercase())
    }
}

/// (name, vendor, category, major version)
const PRODUCTS: &[(&str, &str, &str, u32)] = &[
    ("Chrome", "Google", "Browser", 120),
    ("Firefox", "Mozilla", "Browser", 121),
    ("Edge", "Microsoft", "Browser", 119),
    ("Zoom", "Zoom Video Communications", "Communication", 5),
    ("Slack", "Salesforce", "Communication", 4),
    ("Teams", "Microsoft", "Communication", 24),
    ("7-Zip", "Igor Pavlov", "Utilities", 23),
    ("Notepad++", "Don Ho", "Developer Tools", 8),
    ("Visual Studio Code", "Microsoft", "Developer Tools", 1),
    ("Git", "Software Freedom Conservancy", "Developer Tools", 2),
    ("Acrobat Reader", "Adobe", "Productivity", 23),
    ("VLC Media Player", "VideoLAN", "Media", 3),
    ("Java Runtime", "Oracle", "Runtime", 21),
    ("Python", "Python Software Foundation", "Runtime", 3),
    ("PuTTY", "Simon Tatham", "Utilities", 0),
    ("WinSCP", "Martin Prikryl", "Utilities", 6),
    ("KeePass", "Dominik Reichl", "Security", 2),
    ("Wireshark", "Wireshark Foundation", "Network", 4),
];

/// Build a deterministic catalogue of `count` applications
///
/// Products repeat once the table is exhausted, each pass with a bumped
/// minor version.
pub fn generate_catalog(count: usize) -> Vec<ApplicationRecord> {
    let base_date = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap_or_default();

    (0..count)
        .map(|i| {
            let (name, vendor, category, major) = PRODUCTS[i % PRODUCTS.len()];
            let pass = i / PRODUCTS.len();
            let published = i % 4 == 0;

            ApplicationRecord {
                name: name.to_string(),
                vendor: vendor.to_string(),
                version: format!("{}.{}.{}", major, pass, (i * 7) % 10),
                release_date: base_date + Duration::days((i as i64) * 3),
                category: category.to_string(),
                inventory_status: match i % 3 {
                    0 => InventoryStatus::Installed,
                    1 => InventoryStatus::UpdateAvailable,
                    _ => InventoryStatus::NotInstalled,
                },
                publish_status: if published {
                    PublishStatus::Published
                } else {
                    PublishStatus::Unpublished
                },
                publish_task: published.then(|| format!("{} Monthly Rollout", vendor)),
            }
        })
        .collect()
}

/// Inventory table state: catalogue, active filters and row selection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    records: Vec<ApplicationRecord>,
    filters: Vec<Filter>,
    selected: BTreeSet<usize>,
}

impl Inventory {
    pub fn new(records: Vec<ApplicationRecord>) -> Self {
        Self {
            records,
            filters: Vec::new(),
            selected: BTreeSet::new(),
        }
    }

    pub fn records(&self) -> &[ApplicationRecord] {
        &self.records
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn add_filter(&mut self, field: InventoryField, value: impl Into<String>) {
        let value = value.into();
        tracing::debug!("Adding filter {} ~ {:?}", field.label(), value);
        self.filters.push(Filter { field, value });
    }

    /// Remove the filter at `index`; out of range does nothing
    pub fn remove_filter(&mut self, index: usize) {
        if index < self.filters.len() {
            self.filters.remove(index);
        }
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    /// True when the record passes every filter
    pub fn matches(&self, record: &ApplicationRecord) -> bool {
        self.filters.iter().all(|filter| filter.matches(record))
    }

    /// Visible rows as `(catalogue index, record)` in catalogue order
    pub fn visible(&self) -> Vec<(usize, &ApplicationRecord)> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, record)| self.matches(record))
            .collect()
    }

    pub fn visible_indices(&self) -> BTreeSet<usize> {
        self.visible().into_iter().map(|(index, _)| index).collect()
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    pub fn selected(&self) -> &BTreeSet<usize> {
        &self.selected
    }

    pub fn toggle_row(&mut self, index: usize) {
        if index >= self.records.len() {
            return;
        }
        if !self.selected.remove(&index) {
            self.selected.insert(index);
        }
    }

    /// Checked: select exactly the visible rows. Unchecked: clear.
    pub fn select_all(&mut self, checked: bool) {
        self.selected = if checked {
            self.visible_indices()
        } else {
            BTreeSet::new()
        };
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Header checkbox state: every visible row is selected
    pub fn is_all_selected(&self) -> bool {
        let visible = self.visible_indices();
        !visible.is_empty() && visible.is_subset(&self.selected)
    }

    /// Selected rows that are currently visible, in catalogue order
    pub fn selected_records(&self) -> Vec<ApplicationRecord> {
        self.visible()
            .into_iter()
            .filter(|(index, _)| self.selected.contains(index))
            .map(|(_, record)| record.clone())
            .collect()
    }

    /// Applications to seed the publish task wizard with
    pub fn create_publish_task(&self) -> Result<Vec<ApplicationRecord>, ConsoleError> {
        let handoff = self.selected_records();
        if handoff.is_empty() {
            tracing::warn!("Create publish task requested with nothing selected");
            return Err(ConsoleError::EmptySelection);
        }
        tracing::info!("Handing {} applications to the publish wizard", handoff.len());
        Ok(handoff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inventory() -> Inventory {
        Inventory::new(generate_catalog(50))
    }

    #[test]
    fn test_catalog_is_deterministic() {
        let a = generate_catalog(40);
        let b = generate_catalog(40);
        assert_eq!(a, b);
        assert_eq!(a.len(), 40);
        assert_eq!(a[0].name, "Chrome");
        assert_eq!(a[PRODUCTS.len()].name, "Chrome");
        assert_ne!(a[0].version, a[PRODUCTS.len()].version);
        assert_eq!(a[0].publish_status, PublishStatus::Published);
        assert!(a[0].publish_task.is_some());
        assert_eq!(a[1].publish_task, None);
    }

    #[test]
    fn test_no_filters_shows_everything() {
        let inv = inventory();
        assert_eq!(inv.visible().len(), 50);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let mut inv = inventory();
        inv.add_filter(InventoryField::Vendor, "MICRO");

        let visible = inv.visible();
        assert!(!visible.is_empty());
        assert!(visible.iter().all(|(_, r)| r.vendor == "Microsoft"));
    }

    #[test]
    fn test_filters_combine_with_and() {
        let mut inv = inventory();
        inv.add_filter(InventoryField::Vendor, "microsoft");
        inv.add_filter(InventoryField::Category, "browser");

        let visible = inv.visible();
        assert!(!visible.is_empty());
        for (_, record) in &visible {
            assert_eq!(record.name, "Edge");
        }

        // Every record is visible iff every filter matches
        for record in inv.records() {
            let expected = inv
                .filters()
                .iter()
                .all(|f| f.field.value_of(record).to_lowercase().contains(&f.value.to_lowercase()));
            assert_eq!(inv.matches(record), expected);
        }
    }

    #[test]
    fn test_filter_on_status_label() {
        let mut inv = inventory();
        inv.add_filter(InventoryField::InventoryStatus, "update");
        assert!(inv
            .visible()
            .iter()
            .all(|(_, r)| r.inventory_status == InventoryStatus::UpdateAvailable));
    }

    #[test]
    fn test_remove_filter_out_of_range_is_noop() {
        let mut inv = inventory();
        inv.add_filter(InventoryField::Name, "chrome");
        inv.add_filter(InventoryField::Version, "120");

        inv.remove_filter(5);
        assert_eq!(inv.filters().len(), 2);

        inv.remove_filter(0);
        assert_eq!(inv.filters().len(), 1);
        assert_eq!(inv.filters()[0].field, InventoryField::Version);
    }

    #[test]
    fn test_select_all_is_exactly_filtered_set() {
        let mut inv = inventory();
        inv.toggle_row(1);
        inv.add_filter(InventoryField::Name, "chrome");

        inv.select_all(true);
        assert_eq!(inv.selected(), &inv.visible_indices());
        assert!(!inv.is_selected(1));
        assert!(inv.is_all_selected());

        inv.select_all(false);
        assert!(inv.selected().is_empty());
        assert!(!inv.is_all_selected());
    }

    #[test]
    fn test_toggle_row() {
        let mut inv = inventory();
        inv.toggle_row(3);
        assert!(inv.is_selected(3));
        inv.toggle_row(3);
        assert!(!inv.is_selected(3));

        inv.toggle_row(500);
        assert!(inv.selected().is_empty());
    }

    #[test]
    fn test_create_publish_task_requires_selection() {
        let inv = inventory();
        assert_eq!(inv.create_publish_task(), Err(ConsoleError::EmptySelection));
    }

    #[test]
    fn test_handoff_is_selected_and_visible() {
        let mut inv = inventory();
        inv.toggle_row(0); // Chrome
        inv.toggle_row(1); // Firefox
        inv.toggle_row(18); // Chrome, second pass
        inv.add_filter(InventoryField::Name, "chrome");

        let handoff = inv.create_publish_task().unwrap();
        assert_eq!(handoff.len(), 2);
        assert_eq!(handoff[0], inv.records()[0]);
        assert_eq!(handoff[1], inv.records()[18]);

        // Selection hidden by a filter does not count
        inv.clear_filters();
        inv.clear_selection();
        inv.toggle_row(1);
        inv.add_filter(InventoryField::Name, "chrome");
        assert_eq!(inv.create_publish_task(), Err(ConsoleError::EmptySelection));
    }

    #[test]
    fn test_field_labels_round_trip() {
        for field in InventoryField::all() {
            assert_eq!(InventoryField::from_label(field.label()), Some(*field));
        }
    }
}
