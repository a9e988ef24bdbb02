//! User-facing notifications emitted during installation.
//!
//! The installer never returns rich errors across its public boolean entry
//! point; everything the user should see is delivered as a [`Notification`]
//! through a callback, and mirrored to `tracing`.

use serde::{Deserialize, Serialize};

/// Severity of a notification, matching the host's notification levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Level {
    Info,
    Warn,
    Error,
}

/// A message for the user.
///
/// # Example
///
/// ```rust
/// use nvim_termpicker::{Level, Notification};
///
/// fn on_notify(notification: Notification) {
///     match notification.level {
///         Level::Info => println!("{}", notification.message),
///         Level::Warn => println!("warning: {}", notification.message),
///         Level::Error => eprintln!("error: {}", notification.message),
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: Level,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: Level::Info,
            message: message.into(),
        }
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self {
            level: Level::Warn,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
        }
    }
}

/// Log `notification` and hand it to the callback.
pub(crate) fn emit<F>(on_notify: &F, notification: Notification)
where
    F: Fn(Notification) + Send + Sync,
{
    match notification.level {
        Level::Info => tracing::info!(message = %notification.message),
        Level::Warn => tracing::warn!(message = %notification.message),
        Level::Error => tracing::error!(message = %notification.message),
    }
    on_notify(notification);
}
