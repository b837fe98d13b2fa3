use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::{
    app_error::{AppError, AppResult, ValidationError},
    application::{
        email_templates::{
            NOTIFICATION_SENDER_NAME, RenderedEmail, WELCOME_SENDER_NAME, notification_email,
            welcome_email,
        },
        validators::{is_present, is_valid_email},
    },
    domain::entities::waitlist_submission::{Selection, WaitlistSubmission},
};

/// A message ready for the mail transport. The sender address belongs to the
/// transport; the message only names the display name to send under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub from_name: String,
    pub to: String,
    pub subject: String,
    pub html: String,
    pub text: String,
}

impl OutgoingEmail {
    fn new(from_name: &str, to: &str, rendered: RenderedEmail) -> Self {
        Self {
            from_name: from_name.to_string(),
            to: to.to_string(),
            subject: rendered.subject,
            html: rendered.html,
            text: rendered.text,
        }
    }
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Open a connection to the mail service and check the credentials.
    async fn verify(&self) -> AppResult<()>;
    async fn send(&self, email: &OutgoingEmail) -> AppResult<()>;
}

/// Body of `POST /api/waitlist` as the landing page sends it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WaitlistPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub number: Option<String>,
    pub city: Option<String>,
    pub role: Option<String>,
    pub problem: Option<String>,
}

impl TryFrom<WaitlistPayload> for WaitlistSubmission {
    type Error = ValidationError;

    fn try_from(payload: WaitlistPayload) -> Result<Self, Self::Error> {
        // The form also requires `number`; the server never has.
        let required = [
            payload.name.as_deref(),
            payload.email.as_deref(),
            payload.city.as_deref(),
            payload.role.as_deref(),
            payload.problem.as_deref(),
        ];
        if !required.into_iter().all(is_present) {
            return Err(ValidationError::MissingFields);
        }

        let (Some(name), Some(email), Some(city), Some(role), Some(problem)) = (
            payload.name,
            payload.email,
            payload.city,
            payload.role,
            payload.problem,
        ) else {
            return Err(ValidationError::MissingFields);
        };

        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(WaitlistSubmission {
            name,
            email,
            number: payload.number.unwrap_or_default(),
            city: Selection::parse(&city),
            role: Selection::parse(&role),
            problem: Selection::parse(&problem),
        })
    }
}

/// Per-deployment knobs for the waitlist emails.
#[derive(Debug, Clone)]
pub struct WaitlistSettings {
    /// Operator inbox for signup alerts. No alert is sent when unset.
    pub notification_email: Option<String>,
    pub community_url: String,
    pub timezone: Tz,
}

#[derive(Clone)]
pub struct WaitlistUseCases {
    email: Option<Arc<dyn EmailSender>>,
    settings: WaitlistSettings,
}

impl WaitlistUseCases {
    /// `email` is `None` when the mail credentials are not configured; every
    /// signup then fails with a configuration error.
    pub fn new(email: Option<Arc<dyn EmailSender>>, settings: WaitlistSettings) -> Self {
        Self { email, settings }
    }

    pub fn ensure_configured(&self) -> AppResult<&dyn EmailSender> {
        self.email.as_deref().ok_or_else(|| {
            AppError::Configuration(
                "mail credentials missing (EMAIL_USER, EMAIL_APP_PASSWORD)".into(),
            )
        })
    }

    #[instrument(skip_all, fields(city = %submission.city.code()))]
    pub async fn join(&self, submission: WaitlistSubmission) -> AppResult<()> {
        let email = self.ensure_configured()?;

        email.verify().await?;

        let welcome = self.compose_welcome(&submission)?;
        let notification = self.compose_notification(&submission, Utc::now())?;

        // Both sends run to completion; the welcome error is reported first.
        let (welcome_sent, notification_sent) = tokio::join!(email.send(&welcome), async {
            match &notification {
                Some(notification) => email.send(notification).await,
                None => Ok(()),
            }
        });
        welcome_sent.and(notification_sent)?;

        info!(
            name = %submission.name,
            email = %submission.email,
            city = %submission.city.code(),
            "New waitlist signup"
        );

        Ok(())
    }

    pub fn compose_welcome(&self, submission: &WaitlistSubmission) -> AppResult<OutgoingEmail> {
        let rendered = welcome_email(submission, &self.settings.community_url)?;
        Ok(OutgoingEmail::new(
            WELCOME_SENDER_NAME,
            &submission.email,
            rendered,
        ))
    }

    pub fn compose_notification(
        &self,
        submission: &WaitlistSubmission,
        joined_at: DateTime<Utc>,
    ) -> AppResult<Option<OutgoingEmail>> {
        let Some(to) = self.settings.notification_email.as_deref() else {
            return Ok(None);
        };

        let rendered = notification_email(submission, joined_at, self.settings.timezone)?;
        Ok(Some(OutgoingEmail::new(
            NOTIFICATION_SENDER_NAME,
            to,
            rendered,
        )))
    }
}
