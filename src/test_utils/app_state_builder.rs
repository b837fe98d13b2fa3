//! Test app state builder for HTTP-level integration testing.
//!
//! This module provides `TestAppStateBuilder` which creates a minimal `AppState`
//! with an in-memory email sender for testing HTTP endpoints.

use std::{net::SocketAddr, path::PathBuf, sync::Arc, time::Duration};

use axum::http::HeaderValue;
use secrecy::SecretString;
use url::Url;

use crate::{
    adapters::{
        email::smtp::{SmtpOptions, SmtpTls},
        http::app_state::AppState,
    },
    infra::config::{AppConfig, MailConfig, MailCredentials, MailProvider},
    test_utils::{InMemoryEmailSender, create_test_settings},
    use_cases::waitlist::{EmailSender, WaitlistUseCases},
};

/// Builder for creating `AppState` with in-memory mocks for testing.
///
/// # Example
///
/// ```ignore
/// let sender = Arc::new(InMemoryEmailSender::new());
///
/// let app_state = TestAppStateBuilder::new()
///     .with_email_sender(sender.clone())
///     .with_notification_email("ops@bacheloros.test")
///     .build();
/// ```
pub struct TestAppStateBuilder {
    email_sender: Option<Arc<dyn EmailSender>>,
    notification_email: Option<String>,
    static_dir: Option<PathBuf>,
}

impl TestAppStateBuilder {
    /// Create a new builder with a recording email sender and no notification address.
    pub fn new() -> Self {
        Self {
            email_sender: Some(Arc::new(InMemoryEmailSender::new())),
            notification_email: None,
            static_dir: None,
        }
    }

    /// Set a custom email sender (for asserting on or failing deliveries).
    pub fn with_email_sender(mut self, sender: Arc<dyn EmailSender>) -> Self {
        self.email_sender = Some(sender);
        self
    }

    /// Simulate missing mail credentials.
    pub fn without_email_sender(mut self) -> Self {
        self.email_sender = None;
        self
    }

    pub fn with_notification_email(mut self, address: &str) -> Self {
        self.notification_email = Some(address.to_string());
        self
    }

    /// Serve a landing page directory for non-API paths.
    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }

    /// Build the AppState with all configured mocks.
    pub fn build(self) -> AppState {
        let notification_email = self.notification_email;
        let settings = create_test_settings(|s| s.notification_email = notification_email);

        let credentials = self.email_sender.as_ref().map(|_| MailCredentials {
            user: "hello@bacheloros.test".to_string(),
            password: SecretString::new("test_app_password".into()),
        });

        // Create minimal config for testing
        let config = Arc::new(AppConfig {
            bind_addr: "127.0.0.1:3001".parse::<SocketAddr>().unwrap(),
            cors_origin: HeaderValue::from_static("http://localhost:3000"),
            static_dir: self.static_dir,
            log_file: PathBuf::from("test.log"),
            mail: MailConfig {
                provider: MailProvider::Smtp,
                credentials,
                smtp: SmtpOptions {
                    host: "127.0.0.1".to_string(),
                    port: Some(2525),
                    tls: SmtpTls::Plain,
                    timeout: Duration::from_secs(1),
                },
                resend_api_base: Url::parse("http://127.0.0.1:9").unwrap(),
            },
            waitlist: settings.clone(),
        });

        let waitlist_use_cases = Arc::new(WaitlistUseCases::new(self.email_sender, settings));

        AppState {
            config,
            waitlist_use_cases,
        }
    }
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
