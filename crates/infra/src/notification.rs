use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    Default,
    Destructive,
}

/// A dismissable toast shown to the user. Never fatal to the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn error(description: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            description: description.into(),
            variant: NotificationVariant::Destructive,
        }
    }

    pub fn success(description: impl Into<String>) -> Self {
        Self {
            title: "Success".to_string(),
            description: description.into(),
            variant: NotificationVariant::Default,
        }
    }

    pub fn access_denied(description: impl Into<String>) -> Self {
        Self {
            title: "Access Denied".to_string(),
            description: description.into(),
            variant: NotificationVariant::Destructive,
        }
    }

    /// Generic message for a failed catalog fetch.
    pub fn load_failed() -> Self {
        Self::error("Failed to load products. Please try again.")
    }
}
