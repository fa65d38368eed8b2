//! API message types and user notifications
//!
//! These types are used for:
//! - Authentication request/response bodies
//! - Client-side signup form validation
//! - Toast notifications shown by the console

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ConsoleError;

/// `POST /auth/login` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// `POST /auth/login` success body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Opaque bearer token
    pub token: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// `POST /auth/signup` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub tenant_name: String,
    pub username: String,
    pub password: String,
    pub phno: String,
}

/// `POST /auth/signup` body returned by the server
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Signup form as entered, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub tenant_name: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub phno: String,
}

impl SignupForm {
    /// Check the password confirmation and build the request body
    pub fn validate(&self) -> Result<SignupRequest, ConsoleError> {
        if self.password != self.confirm_password {
            return Err(ConsoleError::PasswordMismatch);
        }
        Ok(SignupRequest {
            tenant_name: self.tenant_name.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            phno: self.phno.clone(),
        })
    }
}

/// Toast style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    #[default]
    Default,
    Destructive,
}

/// A dismissible toast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: Some(description.into()),
            variant: NotificationVariant::Default,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: Some(description.into()),
            variant: NotificationVariant::Destructive,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }
}

impl From<&ConsoleError> for Notification {
    fn from(err: &ConsoleError) -> Self {
        Notification::error(err.title(), err.to_string())
    }
}
