//! Publish task wizard
//!
//! A strictly linear five-step flow that assembles a publish task:
//!
//! 1. Select applications (seeded from the inventory hand-off)
//! 2. Assignment settings (deployment type and assignment groups)
//! 3. Installation settings (force install or let the user postpone)
//! 4. Publish settings (task title and end-user notification text)
//! 5. Review
//!
//! No step validates before moving on. Dialogs report back through
//! [`DialogResult`] and the wizard applies the result.

use serde::{Deserialize, Serialize};

use crate::dialog::{ApplicationCustomization, AssignmentGroupForm, DialogResult};
use crate::inventory::ApplicationRecord;
use crate::templates::{Language, NotificationCustomizations, NotificationTemplate, PlaceholderValues};

/// Enumerations rendered as a select or radio group
pub trait Choice: Sized + Copy + PartialEq + 'static {
    fn all() -> &'static [Self];

    fn label(&self) -> &'static str;

    fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|choice| choice.label() == label)
    }
}

macro_rules! choice {
    ($ty:ident { $($variant:ident => $label:expr),+ $(,)? }) => {
        impl Choice for $ty {
            fn all() -> &'static [Self] {
                &[$($ty::$variant),+]
            }

            fn label(&self) -> &'static str {
                match self {
                    $($ty::$variant => $label),+
                }
            }
        }
    };
}

/// Wizard steps in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WizardStep {
    SelectApplications,
    AssignmentSettings,
    InstallationSettings,
    PublishSettings,
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; 5] = [
        WizardStep::SelectApplications,
        WizardStep::AssignmentSettings,
        WizardStep::InstallationSettings,
        WizardStep::PublishSettings,
        WizardStep::Review,
    ];

    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::SelectApplications => Some(WizardStep::AssignmentSettings),
            WizardStep::AssignmentSettings => Some(WizardStep::InstallationSettings),
            WizardStep::InstallationSettings => Some(WizardStep::PublishSettings),
            WizardStep::PublishSettings => Some(WizardStep::Review),
            WizardStep::Review => None,
        }
    }

    pub fn previous(&self) -> Option<WizardStep> {
        match self {
            WizardStep::SelectApplications => None,
            WizardStep::AssignmentSettings => Some(WizardStep::SelectApplications),
            WizardStep::InstallationSettings => Some(WizardStep::AssignmentSettings),
            WizardStep::PublishSettings => Some(WizardStep::InstallationSettings),
            WizardStep::Review => Some(WizardStep::PublishSettings),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WizardStep::SelectApplications => "Select Applications",
            WizardStep::AssignmentSettings => "Assignment Settings",
            WizardStep::InstallationSettings => "Installation Settings",
            WizardStep::PublishSettings => "Publish Settings",
            WizardStep::Review => "Review",
        }
    }

    /// 1-based position
    pub fn step_number(&self) -> usize {
        Self::ALL
            .iter()
            .position(|step| step == self)
            .map(|index| index + 1)
            .unwrap_or(1)
    }

    pub fn total_steps() -> usize {
        Self::ALL.len()
    }

    pub fn is_first(&self) -> bool {
        self.previous().is_none()
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeploymentType {
    #[default]
    AutomateAssignment,
    Manual,
}

choice!(DeploymentType {
    AutomateAssignment => "Automate Assignment",
    Manual => "Manual",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssignmentType {
    Required,
    Available,
}

choice!(AssignmentType {
    Required => "Required",
    Available => "Available",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupMode {
    Included,
    Excluded,
}

choice!(GroupMode {
    Included => "Included",
    Excluded => "Excluded",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterMode {
    None,
    Include,
    Exclude,
}

choice!(FilterMode {
    None => "None",
    Include => "Include filtered devices",
    Exclude => "Exclude filtered devices",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    AsSoonAsPossible,
    SpecificTime,
}

choice!(Availability {
    AsSoonAsPossible => "As soon as possible",
    SpecificTime => "A specific date and time",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Deadline {
    AsSoonAsPossible,
    SpecificTime,
}

choice!(Deadline {
    AsSoonAsPossible => "As soon as possible",
    SpecificTime => "A specific date and time",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GracePeriod {
    Disabled,
    Enabled,
}

choice!(GracePeriod {
    Disabled => "Disabled",
    Enabled => "Enabled",
});

/// A target group for the publish task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentGroup {
    /// Milliseconds-based, strictly increasing within a wizard session
    pub id: u64,
    pub assignment_type: AssignmentType,
    pub group_name: String,
    pub mode: GroupMode,
    pub filter_mode: FilterMode,
    pub filter_name: String,
    pub availability: Availability,
    pub deadline: Deadline,
    pub grace_period: GracePeriod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstallationBehavior {
    ForceInstall,
    AllowUserDecide,
}

choice!(InstallationBehavior {
    ForceInstall => "Force install",
    AllowUserDecide => "Allow user to decide",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostponeInterval {
    OneHour,
    FourHours,
    OneDay,
}

choice!(PostponeInterval {
    OneHour => "1 hour",
    FourHours => "4 hours",
    OneDay => "1 day",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RestartBehavior {
    NoRestart,
    PromptUser,
    ForceRestart,
}

choice!(RestartBehavior {
    NoRestart => "Do not restart",
    PromptUser => "Prompt user to restart",
    ForceRestart => "Force restart",
});

/// Installation step values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallationSettings {
    pub behavior: InstallationBehavior,
    /// Only meaningful with `AllowUserDecide`
    pub max_postpones: u32,
    pub postpone_interval: PostponeInterval,
    pub show_notification: bool,
    pub restart: RestartBehavior,
}

impl Default for InstallationSettings {
    fn default() -> Self {
        Self {
            behavior: InstallationBehavior::ForceInstall,
            max_postpones: 3,
            postpone_interval: PostponeInterval::FourHours,
            show_notification: true,
            restart: RestartBehavior::PromptUser,
        }
    }
}

impl InstallationSettings {
    pub fn describe(&self) -> String {
        match self.behavior {
            InstallationBehavior::ForceInstall => {
                "Install automatically without user interaction".to_string()
            }
            InstallationBehavior::AllowUserDecide => {
                let mut text = format!(
                    "Users may postpone up to {} times, {} apart",
                    self.max_postpones,
                    self.postpone_interval.label()
                );
                if self.show_notification {
                    text.push_str("; users are notified");
                }
                text
            }
        }
    }
}

/// Publish step values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishSettings {
    pub task_title: String,
    pub language: Language,
    pub customizations: NotificationCustomizations,
}

impl PublishSettings {
    pub fn new(language: Language) -> Self {
        Self {
            task_title: String::new(),
            language,
            customizations: NotificationCustomizations::default(),
        }
    }

    pub fn template(&self) -> NotificationTemplate {
        self.customizations.get(self.language)
    }
}

/// Dialog currently open over the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardDialog {
    AddApplication,
    AssignmentGroup(AssignmentType),
    /// Index into the wizard's application list
    Customization(usize),
}

/// What the Review step renders
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPreview {
    pub task_title: String,
    pub applications: Vec<String>,
    pub deployment_type: DeploymentType,
    pub required_groups: usize,
    pub available_groups: usize,
    pub installation: String,
    pub restart: String,
    pub language: Language,
    pub notification: NotificationTemplate,
}

/// How the wizard was left
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardOutcome {
    Cancelled,
    Created(TaskPreview),
}

/// Wizard state for one session
#[derive(Debug, Clone, PartialEq)]
pub struct PublishTaskWizard {
    step: WizardStep,
    pub applications: Vec<ApplicationRecord>,
    pub deployment_type: DeploymentType,
    assignment_groups: Vec<AssignmentGroup>,
    pub installation: InstallationSettings,
    pub publish: PublishSettings,
    active_dialog: Option<WizardDialog>,
    last_group_id: u64,
}

impl PublishTaskWizard {
    pub fn new(applications: Vec<ApplicationRecord>, language: Language) -> Self {
        tracing::debug!("Publish wizard opened with {} applications", applications.len());
        Self {
            step: WizardStep::SelectApplications,
            applications,
            deployment_type: DeploymentType::AutomateAssignment,
            assignment_groups: Vec::new(),
            installation: InstallationSettings::default(),
            publish: PublishSettings::new(language),
            active_dialog: None,
            last_group_id: 0,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Advance one step. Returns false on the last step.
    pub fn next(&mut self) -> bool {
        match self.step.next() {
            Some(step) => {
                tracing::debug!("Wizard {} -> {}", self.step.display_name(), step.display_name());
                self.step = step;
                true
            }
            None => false,
        }
    }

    /// Go back one step. Returns false on the first step.
    pub fn previous(&mut self) -> bool {
        match self.step.previous() {
            Some(step) => {
                tracing::debug!("Wizard {} <- {}", step.display_name(), self.step.display_name());
                self.step = step;
                true
            }
            None => false,
        }
    }

    /// Abandon the wizard; the caller drops this state
    pub fn cancel(&self) -> WizardOutcome {
        tracing::info!("Publish wizard cancelled at {}", self.step.display_name());
        WizardOutcome::Cancelled
    }

    /// "Create Task" on the Review step. Nothing is persisted.
    pub fn finish(&self) -> Option<WizardOutcome> {
        if !self.step.is_last() {
            return None;
        }
        let preview = self.preview();
        tracing::info!(
            "Publish task {:?} created with {} applications and {} groups",
            preview.task_title,
            preview.applications.len(),
            self.assignment_groups.len()
        );
        Some(WizardOutcome::Created(preview))
    }

    pub fn shows_assignment_groups(&self) -> bool {
        self.deployment_type == DeploymentType::AutomateAssignment
    }

    pub fn shows_postpone_fields(&self) -> bool {
        self.installation.behavior == InstallationBehavior::AllowUserDecide
    }

    pub fn active_dialog(&self) -> Option<WizardDialog> {
        self.active_dialog
    }

    pub fn open_dialog(&mut self, dialog: WizardDialog) {
        tracing::debug!("Opening dialog {:?}", dialog);
        self.active_dialog = Some(dialog);
    }

    pub fn remove_application(&mut self, index: usize) {
        if index < self.applications.len() {
            let removed = self.applications.remove(index);
            tracing::debug!("Removed {} from publish task", removed.name);
        }
    }

    /// Apply the add-application picker result; already present records are
    /// skipped
    pub fn resolve_application_dialog(&mut self, result: DialogResult<Vec<ApplicationRecord>>) {
        self.active_dialog = None;
        if let DialogResult::Saved(records) = result {
            for record in records {
                if !self.applications.contains(&record) {
                    self.applications.push(record);
                }
            }
        }
    }

    /// Apply the assignment group dialog result using the current time
    pub fn resolve_assignment_dialog(
        &mut self,
        result: DialogResult<AssignmentGroupForm>,
    ) -> Option<u64> {
        let now_ms = chrono::Utc::now().timestamp_millis().max(0) as u64;
        self.resolve_assignment_dialog_at(result, now_ms)
    }

    /// Apply the assignment group dialog result. The group gets the type the
    /// dialog was opened for and an id no smaller than `now_ms`.
    pub fn resolve_assignment_dialog_at(
        &mut self,
        result: DialogResult<AssignmentGroupForm>,
        now_ms: u64,
    ) -> Option<u64> {
        let dialog = self.active_dialog.take();
        let form = result.saved()?;
        let assignment_type = match dialog {
            Some(WizardDialog::AssignmentGroup(kind)) => kind,
            _ => return None,
        };

        let id = now_ms.max(self.last_group_id + 1);
        self.last_group_id = id;
        let group = form.into_group(id, assignment_type);
        tracing::debug!(
            "Added {} assignment group {:?} ({})",
            assignment_type.label(),
            group.group_name,
            id
        );
        self.assignment_groups.push(group);
        Some(id)
    }

    /// Close the customization dialog. Saved values are only logged.
    pub fn resolve_customization_dialog(&mut self, result: DialogResult<ApplicationCustomization>) {
        self.active_dialog = None;
        if let DialogResult::Saved(customization) = result {
            tracing::debug!("Customization for {} not applied to task", customization.name);
        }
    }

    pub fn assignment_groups(&self) -> &[AssignmentGroup] {
        &self.assignment_groups
    }

    pub fn groups_of(&self, assignment_type: AssignmentType) -> Vec<&AssignmentGroup> {
        self.assignment_groups
            .iter()
            .filter(|group| group.assignment_type == assignment_type)
            .collect()
    }

    /// Remove the group with `id`; other groups keep their order
    pub fn remove_assignment_group(&mut self, id: u64) {
        self.assignment_groups.retain(|group| group.id != id);
    }

    fn placeholder_values(&self) -> PlaceholderValues {
        let deadline = if self
            .assignment_groups
            .iter()
            .any(|group| group.deadline == Deadline::SpecificTime)
        {
            "the scheduled deadline"
        } else {
            "as soon as possible"
        };

        match self.applications.first() {
            Some(app) => PlaceholderValues {
                app_name: app.name.clone(),
                app_version: app.version.clone(),
                vendor: app.vendor.clone(),
                deadline: deadline.to_string(),
            },
            None => PlaceholderValues {
                deadline: deadline.to_string(),
                ..Default::default()
            },
        }
    }

    pub fn preview(&self) -> TaskPreview {
        let show_groups = self.shows_assignment_groups();
        let count = |kind| if show_groups { self.groups_of(kind).len() } else { 0 };

        TaskPreview {
            task_title: self.publish.task_title.clone(),
            applications: self
                .applications
                .iter()
                .map(|app| format!("{} {} ({})", app.name, app.version, app.vendor))
                .collect(),
            deployment_type: self.deployment_type,
            required_groups: count(AssignmentType::Required),
            available_groups: count(AssignmentType::Available),
            installation: self.installation.describe(),
            restart: self.installation.restart.label().to_string(),
            language: self.publish.language,
            notification: self.publish.template().render(&self.placeholder_values()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::generate_catalog;

    fn wizard() -> PublishTaskWizard {
        PublishTaskWizard::new(generate_catalog(3), Language::English)
    }

    fn add_group(wizard: &mut PublishTaskWizard, kind: AssignmentType, name: &str, now: u64) -> u64 {
        wizard.open_dialog(WizardDialog::AssignmentGroup(kind));
        let form = AssignmentGroupForm {
            group_name: name.to_string(),
            ..Default::default()
        };
        wizard
            .resolve_assignment_dialog_at(DialogResult::Saved(form), now)
            .unwrap()
    }

    #[test]
    fn test_step_order_has_four_transitions() {
        let mut wizard = wizard();
        let mut transitions = 0;
        while wizard.next() {
            transitions += 1;
        }
        assert_eq!(transitions, 4);
        assert_eq!(wizard.step(), WizardStep::Review);

        // Review is terminal
        assert!(!wizard.next());
        assert_eq!(wizard.step(), WizardStep::Review);
    }

    #[test]
    fn test_previous_from_first_is_noop() {
        let mut wizard = wizard();
        assert!(!wizard.previous());
        assert_eq!(wizard.step(), WizardStep::SelectApplications);

        wizard.next();
        wizard.next();
        assert!(wizard.previous());
        assert_eq!(wizard.step(), WizardStep::AssignmentSettings);
    }

    #[test]
    fn test_step_metadata() {
        assert_eq!(WizardStep::total_steps(), 5);
        assert_eq!(WizardStep::SelectApplications.step_number(), 1);
        assert_eq!(WizardStep::Review.step_number(), 5);
        assert!(WizardStep::SelectApplications.is_first());
        assert!(WizardStep::Review.is_last());
        assert!(!WizardStep::PublishSettings.is_last());
    }

    #[test]
    fn test_conditional_sections() {
        let mut wizard = wizard();
        assert!(wizard.shows_assignment_groups());
        wizard.deployment_type = DeploymentType::Manual;
        assert!(!wizard.shows_assignment_groups());

        assert!(!wizard.shows_postpone_fields());
        wizard.installation.behavior = InstallationBehavior::AllowUserDecide;
        assert!(wizard.shows_postpone_fields());
    }

    #[test]
    fn test_assignment_group_gets_dialog_type() {
        let mut wizard = wizard();
        add_group(&mut wizard, AssignmentType::Available, "Sales", 1_000);
        add_group(&mut wizard, AssignmentType::Required, "IT", 2_000);

        assert_eq!(wizard.groups_of(AssignmentType::Available).len(), 1);
        assert_eq!(wizard.groups_of(AssignmentType::Required)[0].group_name, "IT");
        assert_eq!(wizard.active_dialog(), None);
    }

    #[test]
    fn test_ids_strictly_increase_within_same_millisecond() {
        let mut wizard = wizard();
        let a = add_group(&mut wizard, AssignmentType::Required, "a", 5_000);
        let b = add_group(&mut wizard, AssignmentType::Required, "b", 5_000);
        let c = add_group(&mut wizard, AssignmentType::Required, "c", 4_000);
        assert_eq!(a, 5_000);
        assert!(b > a);
        assert!(c > b);
    }

    #[test]
    fn test_cancelled_dialog_adds_nothing() {
        let mut wizard = wizard();
        wizard.open_dialog(WizardDialog::AssignmentGroup(AssignmentType::Required));
        assert_eq!(
            wizard.resolve_assignment_dialog_at(DialogResult::Cancelled, 1),
            None
        );
        assert!(wizard.assignment_groups().is_empty());
        assert_eq!(wizard.active_dialog(), None);
    }

    #[test]
    fn test_delete_group_keeps_order() {
        let mut wizard = wizard();
        let ids: Vec<u64> = ["a", "b", "c", "d"]
            .iter()
            .enumerate()
            .map(|(i, name)| add_group(&mut wizard, AssignmentType::Required, name, 100 + i as u64))
            .collect();

        wizard.remove_assignment_group(ids[1]);

        let names: Vec<&str> = wizard
            .assignment_groups()
            .iter()
            .map(|g| g.group_name.as_str())
            .collect();
        assert_eq!(names, vec!["a", "c", "d"]);

        wizard.remove_assignment_group(999_999);
        assert_eq!(wizard.assignment_groups().len(), 3);
    }

    #[test]
    fn test_add_and_remove_applications() {
        let catalog = generate_catalog(5);
        let mut wizard = PublishTaskWizard::new(catalog[..2].to_vec(), Language::English);

        wizard.open_dialog(WizardDialog::AddApplication);
        wizard.resolve_application_dialog(DialogResult::Saved(catalog[1..4].to_vec()));
        assert_eq!(wizard.applications.len(), 4);
        assert_eq!(wizard.active_dialog(), None);

        wizard.remove_application(0);
        assert_eq!(wizard.applications[0], catalog[1]);
        wizard.remove_application(10);
        assert_eq!(wizard.applications.len(), 3);
    }

    #[test]
    fn test_preview_renders_notification_from_first_application() {
        let mut wizard = wizard();
        wizard.publish.task_title = "January patching".to_string();
        wizard.publish.customizations.set_title(Language::English, "Update {appName} by {vendor}");
        add_group(&mut wizard, AssignmentType::Required, "IT", 1);

        let preview = wizard.preview();
        assert_eq!(preview.task_title, "January patching");
        assert_eq!(preview.applications.len(), 3);
        assert_eq!(preview.required_groups, 1);
        assert_eq!(preview.available_groups, 0);
        assert_eq!(preview.notification.title, "Update Chrome by Google");

        wizard.deployment_type = DeploymentType::Manual;
        assert_eq!(wizard.preview().required_groups, 0);
    }

    #[test]
    fn test_finish_only_on_review() {
        let mut wizard = wizard();
        assert_eq!(wizard.finish(), None);
        while wizard.next() {}
        assert!(matches!(wizard.finish(), Some(WizardOutcome::Created(_))));
        assert_eq!(wizard.cancel(), WizardOutcome::Cancelled);
    }

    #[test]
    fn test_choice_labels_round_trip() {
        for behavior in InstallationBehavior::all() {
            assert_eq!(InstallationBehavior::from_label(behavior.label()), Some(*behavior));
        }
        assert_eq!(FilterMode::from_label("nope"), None);
    }
}
