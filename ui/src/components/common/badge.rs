//! Status badge and toast colours

use patchtune_shared::{InventoryStatus, NotificationVariant, PublishStatus, TaskStatus};

/// Shape shared by every pill badge; append one of the colour classes below
pub const BADGE_CLASS: &str = "px-2 py-0.5 rounded-full text-xs";

pub fn inventory_status_badge(status: InventoryStatus) -> &'static str {
    match status {
        InventoryStatus::Installed => "bg-green-500/20 text-green-400",
        InventoryStatus::UpdateAvailable => "bg-amber-500/20 text-amber-400",
        InventoryStatus::NotInstalled => "bg-slate-500/20 text-slate-400",
    }
}

pub fn publish_status_badge(status: PublishStatus) -> &'static str {
    match status {
        PublishStatus::Published => "bg-blue-500/20 text-blue-400",
        PublishStatus::Unpublished => "bg-slate-500/20 text-slate-400",
    }
}

pub fn task_status_badge(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Active => "bg-green-500/20 text-green-400",
        TaskStatus::Disabled => "bg-slate-500/20 text-slate-400",
    }
}

pub fn toast_class(variant: NotificationVariant) -> &'static str {
    match variant {
        NotificationVariant::Default => "bg-slate-800 border-slate-600 text-slate-100",
        NotificationVariant::Destructive => "bg-red-900 border-red-600 text-red-100",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_statuses_are_distinct() {
        let classes = [
            inventory_status_badge(InventoryStatus::Installed),
            inventory_status_badge(InventoryStatus::UpdateAvailable),
            inventory_status_badge(InventoryStatus::NotInstalled),
        ];
        assert_ne!(classes[0], classes[1]);
        assert_ne!(classes[1], classes[2]);
        assert_ne!(classes[0], classes[2]);
    }

    #[test]
    fn test_active_states_stand_out() {
        assert_ne!(
            publish_status_badge(PublishStatus::Published),
            publish_status_badge(PublishStatus::Unpublished)
        );
        assert_ne!(
            task_status_badge(TaskStatus::Active),
            task_status_badge(TaskStatus::Disabled)
        );
        // Inactive states share the muted slate colour
        assert_eq!(
            task_status_badge(TaskStatus::Disabled),
            publish_status_badge(PublishStatus::Unpublished)
        );
    }

    #[test]
    fn test_destructive_toast_is_red() {
        assert!(toast_class(NotificationVariant::Destructive).contains("bg-red"));
        assert!(!toast_class(NotificationVariant::Default).contains("red"));
    }
}
