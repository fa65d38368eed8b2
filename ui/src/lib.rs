//! PatchTune UI Library
//!
//! Browser front-end for the PatchTune third-party patching console.
//!
//! # Modules
//!
//! - [`app`]: Root application component and routing
//! - [`client`]: Browser adapters for HTTP (gloo-net) and local storage (gloo-storage)
//! - [`components`]: Screens, dialogs and form primitives
//! - [`config`]: Embedded console configuration
//! - [`state`]: Global state shared through context

pub mod app;
pub mod client;
pub mod components;
pub mod config;
pub mod state;

pub use app::App;
