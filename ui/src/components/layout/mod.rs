//! Layout Components
//!
//! This module contains the dashboard layout:
//! - `DashboardPage` - Authenticated shell switching content by menu state
//! - `NavMenu` - Two-level collapsible navigation
//! - `TopBar` - Breadcrumbs and logout

mod dashboard_shell;
mod nav_menu;
mod top_bar;

pub use dashboard_shell::DashboardPage;
pub use nav_menu::NavMenu;
pub use top_bar::TopBar;
