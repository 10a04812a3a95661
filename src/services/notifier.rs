use std::sync::Arc;
use tokio::task::JoinHandle;
use crate::models::{Task, User};
use super::mailer::{Email, Mailer};

/// Tells a user's emergency contact that a task was completed.
///
/// Sends run on their own tokio task: the caller never waits for delivery,
/// and a failed send is only logged. There is no de-duplication, so every
/// completion produces one attempt.
#[derive(Clone)]
pub struct Notifier {
    mailer: Arc<dyn Mailer>,
    sender: String,
}

impl Notifier {
    pub fn new(mailer: Arc<dyn Mailer>, sender: impl Into<String>) -> Self {
        Self { mailer, sender: sender.into() }
    }

    pub fn completion_email(&self, user: &User, task: &Task) -> Email {
        Email {
            from: format!("LifeTrack <{}>", self.sender),
            to: user.emergency_contact.clone(),
            subject: format!("LifeTrack Alert: {} Completed a Task", user.name),
            text: format!("Hello, \n\n{} has successfully completed the task: \"{}\".", user.name, task.title),
        }
    }

    /// Returns the handle of the spawned send, or `None` when the user has no contact.
    pub fn notify_task_completed(&self, user: &User, task: &Task) -> Option<JoinHandle<()>> {
        if user.emergency_contact.trim().is_empty() {
            tracing::debug!("User {} has no emergency contact, skipping notification", user.id);
            return None;
        }

        let email = self.completion_email(user, task);
        let mailer = self.mailer.clone();
        let task_id = task.id.clone();

        Some(tokio::spawn(async move {
            match mailer.send(&email).await {
                Ok(()) => tracing::info!("Completion alert for task {} sent to {}", task_id, email.to),
                Err(e) => tracing::error!("Failed to send completion alert for task {}: {}", task_id, e),
            }
        }))
    }
}
