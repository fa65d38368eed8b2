//! UI Components
//!
//! Components organized by feature:
//! - `auth`: Login and signup screens
//! - `layout`: Dashboard shell, navigation menu and top bar
//! - `inventory`: Application inventory table
//! - `wizard`: Publish task wizard and its dialogs
//! - `tasks`: Published task list
//! - `common`: Shared form primitives, icons and toasts

pub mod auth;
pub mod common;
pub mod inventory;
pub mod layout;
pub mod tasks;
pub mod wizard;
