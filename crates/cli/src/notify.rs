//! Delivery of budget alerts.

use std::{future::Future, io::Write};

use engine::Alert;

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("notifications are disabled")]
    PermissionDenied,
    #[error("failed to deliver notification: {0}")]
    Io(#[from] std::io::Error),
}

pub trait Notifier {
    fn send(&self, alert: &Alert) -> impl Future<Output = Result<(), NotifyError>> + Send;
}

/// Prints alerts to stderr so they stay out of command output.
#[derive(Debug, Clone, Copy)]
pub struct TerminalNotifier {
    enabled: bool,
}

impl TerminalNotifier {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl Notifier for TerminalNotifier {
    async fn send(&self, alert: &Alert) -> Result<(), NotifyError> {
        if !self.enabled {
            return Err(NotifyError::PermissionDenied);
        }

        let mut stderr = std::io::stderr().lock();
        writeln!(stderr, "[{}] {}", alert.title, alert.body)?;
        Ok(())
    }
}

/// Records alerts as log events only.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    async fn send(&self, alert: &Alert) -> Result<(), NotifyError> {
        tracing::info!(
            kind = ?alert.kind(),
            context = %alert.metadata.context,
            period = %alert.metadata.period,
            percentage = alert.percentage,
            "{}: {}",
            alert.title,
            alert.body
        );
        Ok(())
    }
}
