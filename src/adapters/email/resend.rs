use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use url::Url;

use crate::{
    app_error::{AppError, AppResult},
    infra::{error::InfraError, http_client},
    use_cases::waitlist::{EmailSender, OutgoingEmail},
};

/// Sends through the Resend HTTP API. The account identity is the sender
/// address and the credential is the API key.
#[derive(Clone)]
pub struct ResendEmailSender {
    client: Client,
    api_base: Url,
    api_key: SecretString,
    from_address: String,
}

impl ResendEmailSender {
    pub fn new(
        api_base: Url,
        api_key: SecretString,
        from_address: String,
    ) -> Result<Self, InfraError> {
        let client = http_client::try_build_client().map_err(InfraError::HttpClient)?;
        Ok(Self {
            client,
            api_base,
            api_key,
            from_address,
        })
    }

    fn emails_url(&self) -> String {
        format!("{}/emails", self.api_base.as_str().trim_end_matches('/'))
    }
}

#[derive(Serialize)]
struct ResendReq<'a> {
    from: String,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
    text: &'a str,
}

#[async_trait]
impl EmailSender for ResendEmailSender {
    async fn verify(&self) -> AppResult<()> {
        // Stateless HTTP API: credentials are checked on every send.
        tracing::debug!(api_base = %self.api_base, "Resend sender ready");
        Ok(())
    }

    async fn send(&self, email: &OutgoingEmail) -> AppResult<()> {
        let body = ResendReq {
            from: format!("{} <{}>", email.from_name, self.from_address),
            to: [email.to.as_str()],
            subject: &email.subject,
            html: &email.html,
            text: &email.text,
        };

        self.client
            .post(self.emails_url())
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::MailDispatch(format!("Failed to send email: {e}")))?
            .error_for_status()
            .map_err(|e| AppError::MailDispatch(format!("Email API error: {e}")))?;

        Ok(())
    }
}
