//! Wizard dialogs
//!
//! Dialogs edit a flat record and hand it back to the wizard as a
//! [`DialogResult`]. Nothing is shared between a dialog and its parent while
//! the dialog is open.

use serde::{Deserialize, Serialize};

use crate::inventory::ApplicationRecord;
use crate::wizard::{
    AssignmentGroup, AssignmentType, Availability, Deadline, FilterMode, GracePeriod, GroupMode,
};

/// Category tag appended by "Add category"
pub const NEW_CATEGORY: &str = "New Category";

/// Outcome of a modal dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogResult<T> {
    Saved(T),
    Cancelled,
}

impl<T> DialogResult<T> {
    pub fn saved(self) -> Option<T> {
        match self {
            DialogResult::Saved(value) => Some(value),
            DialogResult::Cancelled => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, DialogResult::Cancelled)
    }
}

/// Assignment group dialog form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentGroupForm {
    pub group_name: String,
    pub mode: GroupMode,
    pub filter_mode: FilterMode,
    pub filter_name: String,
    pub availability: Availability,
    pub deadline: Deadline,
    pub grace_period: GracePeriod,
}

impl Default for AssignmentGroupForm {
    fn default() -> Self {
        Self {
            group_name: "All Users".to_string(),
            mode: GroupMode::Included,
            filter_mode: FilterMode::None,
            filter_name: String::new(),
            availability: Availability::AsSoonAsPossible,
            deadline: Deadline::AsSoonAsPossible,
            grace_period: GracePeriod::Disabled,
        }
    }
}

impl AssignmentGroupForm {
    /// Whether the filter name input applies
    pub fn uses_filter(&self) -> bool {
        self.filter_mode != FilterMode::None
    }

    pub fn into_group(self, id: u64, assignment_type: AssignmentType) -> AssignmentGroup {
        AssignmentGroup {
            id,
            assignment_type,
            group_name: self.group_name,
            mode: self.mode,
            filter_mode: self.filter_mode,
            // A filter name without a filter is meaningless
            filter_name: if self.filter_mode == FilterMode::None {
                String::new()
            } else {
                self.filter_name
            },
            availability: self.availability,
            deadline: self.deadline,
            grace_period: self.grace_period,
        }
    }
}

/// Store-facing metadata of an application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationCustomization {
    pub name: String,
    pub publisher: String,
    pub description: String,
    pub information_url: String,
    pub privacy_url: String,
    pub developer: String,
    pub owner: String,
    pub notes: String,
    pub categories: Vec<String>,
    pub featured: bool,
}

impl ApplicationCustomization {
    /// Seed values derived from an inventory record
    pub fn from_record(record: &ApplicationRecord) -> Self {
        Self {
            name: record.name.clone(),
            publisher: record.vendor.clone(),
            description: format!("{} {} by {}", record.name, record.version, record.vendor),
            information_url: String::new(),
            privacy_url: String::new(),
            developer: record.vendor.clone(),
            owner: String::new(),
            notes: String::new(),
            categories: vec![record.category.clone()],
            featured: false,
        }
    }
}

/// Editor state for the customization dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomizationEditor {
    seed: ApplicationCustomization,
    pub current: ApplicationCustomization,
}

impl CustomizationEditor {
    pub fn new(record: &ApplicationRecord) -> Self {
        let seed = ApplicationCustomization::from_record(record);
        Self {
            current: seed.clone(),
            seed,
        }
    }

    pub fn add_category(&mut self) {
        self.current.categories.push(NEW_CATEGORY.to_string());
    }

    /// Remove the category at `index`; out of range does nothing
    pub fn remove_category(&mut self, index: usize) {
        if index < self.current.categories.len() {
            self.current.categories.remove(index);
        }
    }

    pub fn set_category(&mut self, index: usize, value: impl Into<String>) {
        if let Some(category) = self.current.categories.get_mut(index) {
            *category = value.into();
        }
    }

    /// Restore the seed values
    pub fn reset(&mut self) {
        self.current = self.seed.clone();
    }

    pub fn is_modified(&self) -> bool {
        self.current != self.seed
    }

    /// Finish editing. The result is logged only; it does not flow back into
    /// the wizard's application list.
    pub fn save(self) -> DialogResult<ApplicationCustomization> {
        tracing::info!(
            "Saved customization for {}: {:?}",
            self.current.name,
            self.current
        );
        DialogResult::Saved(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::generate_catalog;

    #[test]
    fn test_form_defaults_build_complete_group() {
        let group = AssignmentGroupForm::default().into_group(42, AssignmentType::Available);
        assert_eq!(group.id, 42);
        assert_eq!(group.assignment_type, AssignmentType::Available);
        assert_eq!(group.group_name, "All Users");
        assert_eq!(group.mode, GroupMode::Included);
        assert_eq!(group.filter_mode, FilterMode::None);
        assert_eq!(group.grace_period, GracePeriod::Disabled);
    }

    #[test]
    fn test_filter_name_dropped_without_filter() {
        let form = AssignmentGroupForm {
            filter_name: "Windows 11".to_string(),
            ..Default::default()
        };
        assert!(!form.uses_filter());
        assert_eq!(form.into_group(1, AssignmentType::Required).filter_name, "");

        let form = AssignmentGroupForm {
            filter_mode: FilterMode::Include,
            filter_name: "Windows 11".to_string(),
            ..Default::default()
        };
        assert_eq!(form.into_group(1, AssignmentType::Required).filter_name, "Windows 11");
    }

    #[test]
    fn test_customization_seeded_from_record() {
        let record = &generate_catalog(1)[0];
        let editor = CustomizationEditor::new(record);
        assert_eq!(editor.current.name, record.name);
        assert_eq!(editor.current.publisher, record.vendor);
        assert_eq!(editor.current.categories, vec![record.category.clone()]);
        assert!(!editor.current.featured);
        assert!(!editor.is_modified());
    }

    #[test]
    fn test_categories_add_and_remove() {
        let record = &generate_catalog(1)[0];
        let mut editor = CustomizationEditor::new(record);

        editor.add_category();
        assert_eq!(editor.current.categories.last().map(String::as_str), Some(NEW_CATEGORY));
        assert_eq!(editor.current.categories.len(), 2);

        editor.remove_category(7);
        assert_eq!(editor.current.categories.len(), 2);

        editor.remove_category(0);
        assert_eq!(editor.current.categories, vec![NEW_CATEGORY.to_string()]);
    }

    #[test]
    fn test_reset_restores_seed() {
        let record = &generate_catalog(1)[0];
        let mut editor = CustomizationEditor::new(record);
        editor.current.name = "Renamed".to_string();
        editor.current.featured = true;
        editor.add_category();
        assert!(editor.is_modified());

        editor.reset();
        assert!(!editor.is_modified());
        assert_eq!(editor.current.name, record.name);
    }

    #[test]
    fn test_save_returns_current_values() {
        let record = &generate_catalog(1)[0];
        let mut editor = CustomizationEditor::new(record);
        editor.current.notes = "pilot ring only".to_string();

        let saved = editor.save().saved().unwrap();
        assert_eq!(saved.notes, "pilot ring only");
        assert!(DialogResult::<()>::Cancelled.is_cancelled());
    }
}
