//! Common/Shared UI Components
//!
//! Reusable components used throughout the console.

mod badge;
mod form;
mod icons;
mod toast;

pub use badge::*;
pub use form::*;
pub use icons::*;
pub use toast::ToastContainer;
