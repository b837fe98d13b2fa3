//! In-memory `EmailSender` implementations.

use async_trait::async_trait;
use std::{sync::Mutex, time::Duration};

use crate::{
    app_error::{AppError, AppResult},
    use_cases::waitlist::{EmailSender, OutgoingEmail},
};

/// Records every delivered message. Can be told to fail verification, every
/// send, or sends to one recipient, and to hold sends to one recipient back.
#[derive(Default)]
pub struct InMemoryEmailSender {
    sent: Mutex<Vec<OutgoingEmail>>,
    verify_calls: Mutex<usize>,
    fail_verify: bool,
    fail_all_sends: bool,
    fail_recipient: Option<String>,
    delay: Option<(String, Duration)>,
}

impl InMemoryEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_verify() -> Self {
        Self {
            fail_verify: true,
            ..Self::default()
        }
    }

    pub fn failing_send() -> Self {
        Self {
            fail_all_sends: true,
            ..Self::default()
        }
    }

    pub fn failing_for(recipient: &str) -> Self {
        Self {
            fail_recipient: Some(recipient.to_string()),
            ..Self::default()
        }
    }

    /// Sends to `recipient` complete only after `delay`.
    pub fn with_delay_for(mut self, recipient: &str, delay: Duration) -> Self {
        self.delay = Some((recipient.to_string(), delay));
        self
    }

    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn verify_count(&self) -> usize {
        *self.verify_calls.lock().unwrap()
    }
}

#[async_trait]
impl EmailSender for InMemoryEmailSender {
    async fn verify(&self) -> AppResult<()> {
        *self.verify_calls.lock().unwrap() += 1;
        if self.fail_verify {
            return Err(AppError::MailDispatch("535 Authentication failed".into()));
        }
        Ok(())
    }

    async fn send(&self, email: &OutgoingEmail) -> AppResult<()> {
        if let Some((recipient, delay)) = &self.delay {
            if *recipient == email.to {
                tokio::time::sleep(*delay).await;
            }
        }
        if self.fail_all_sends || self.fail_recipient.as_deref() == Some(email.to.as_str()) {
            return Err(AppError::MailDispatch(format!(
                "550 Mailbox unavailable: {}",
                email.to
            )));
        }
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}
