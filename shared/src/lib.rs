//! Shared types and services for the PatchTune console
//!
//! This crate contains everything the console does that does not touch the DOM:
//! - Console configuration
//! - API message types and the authentication service
//! - Storage abstraction over browser local storage
//! - Application inventory, filtering and selection
//! - The publish task wizard and its dialogs
//! - The published task list
//! - Dashboard navigation menu

pub mod api;
pub mod config;
pub mod dialog;
pub mod error;
pub mod inventory;
pub mod menu;
pub mod messages;
pub mod storage;
pub mod tasks;
pub mod templates;
pub mod wizard;

pub use api::*;
pub use config::*;
pub use dialog::*;
pub use error::*;
pub use inventory::*;
pub use menu::*;
pub use messages::*;
pub use storage::*;
pub use tasks::*;
pub use templates::*;
pub use wizard::*;
