use async_trait::async_trait;
use innkeeper::inquiries::notify::{EmailMessage, MailError, Mailer};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Transport adapter that writes rendered messages to the log. An SMTP
/// relay plugs in behind the same trait without touching the service.
pub(crate) struct LogMailer {
    sender: String,
}

impl LogMailer {
    pub(crate) fn new(sender: String) -> Self {
        Self { sender }
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, message: EmailMessage) -> Result<(), MailError> {
        info!(
            from = %self.sender,
            to = %message.to,
            subject = %message.subject,
            "outbound email"
        );
        debug!(body = %message.body, "outbound email body");
        Ok(())
    }
}
