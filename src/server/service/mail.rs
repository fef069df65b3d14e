//! Outgoing mail notifications.
//!
//! Notifications are a post-commit side effect: they are sent on a background task after
//! the store has persisted, and failures are logged instead of reported to the caller.
//! Debug builds use `LocalMailService`, release builds `CloudMailService`; both currently
//! deliver to the log.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::task::JoinHandle;

use crate::server::{config::MailConfig, error::mail::MailError};

#[async_trait]
pub trait MailService: Send + Sync {
    async fn send(&self, subject: &str, message: &str) -> Result<(), MailError>;
}

/// Mail service used during development.
pub struct LocalMailService {
    from: String,
    to: String,
}

impl LocalMailService {
    pub fn new(config: &MailConfig) -> Self {
        Self {
            from: config.from.clone(),
            to: config.to.clone(),
        }
    }
}

#[async_trait]
impl MailService for LocalMailService {
    async fn send(&self, subject: &str, message: &str) -> Result<(), MailError> {
        tracing::info!("Mail from {} to {}, with LocalMailService.", self.from, self.to);
        tracing::info!("Subject: {}", subject);
        tracing::info!("Message: {}", message);

        Ok(())
    }
}

/// Mail service used by release builds.
pub struct CloudMailService {
    from: String,
    to: String,
}

impl CloudMailService {
    pub fn new(config: &MailConfig) -> Self {
        Self {
            from: config.from.clone(),
            to: config.to.clone(),
        }
    }
}

#[async_trait]
impl MailService for CloudMailService {
    async fn send(&self, subject: &str, message: &str) -> Result<(), MailError> {
        tracing::info!(
            from = %self.from,
            to = %self.to,
            subject,
            message,
            "Mail sent with CloudMailService"
        );

        Ok(())
    }
}

/// Picks the mail service for the current build profile.
pub fn default_mail_service(config: &MailConfig) -> Arc<dyn MailService> {
    if cfg!(debug_assertions) {
        Arc::new(LocalMailService::new(config))
    } else {
        Arc::new(CloudMailService::new(config))
    }
}

/// Sends a notification on a background task, logging any failure.
pub fn notify_in_background(
    mail_service: Arc<dyn MailService>,
    subject: String,
    message: String,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(err) = mail_service.send(&subject, &message).await {
            tracing::error!("{}", err);
        }
    })
}
