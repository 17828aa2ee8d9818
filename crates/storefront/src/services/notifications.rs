//! Flash notifications queued in the session.
//!
//! Handlers push notifications after a mutation and redirect; the next page
//! render takes them out of the session and shows them once.

use border3d_core::Notification;
use tower_sessions::Session;

use crate::models::session_keys;

/// Queue a notification for the next page render.
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn push(
    session: &Session,
    notification: Notification,
) -> Result<(), tower_sessions::session::Error> {
    let mut queued: Vec<Notification> = session
        .get(session_keys::NOTIFICATIONS)
        .await?
        .unwrap_or_default();
    queued.push(notification);
    session.insert(session_keys::NOTIFICATIONS, queued).await
}

/// Remove and return all queued notifications, oldest first.
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn take(session: &Session) -> Result<Vec<Notification>, tower_sessions::session::Error> {
    Ok(session
        .remove::<Vec<Notification>>(session_keys::NOTIFICATIONS)
        .await?
        .unwrap_or_default())
}
