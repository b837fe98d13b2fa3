use std::time::Duration;

use async_trait::async_trait;
use lettre::{
    Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
};
use secrecy::{ExposeSecret, SecretString};
use strum::{AsRefStr, Display, EnumString};

use crate::{
    app_error::{AppError, AppResult},
    infra::error::InfraError,
    use_cases::waitlist::{EmailSender, OutgoingEmail},
};

/// How the SMTP connection is secured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SmtpTls {
    /// Implicit TLS from the first byte (port 465).
    Tls,
    /// Plain connection upgraded with STARTTLS (port 587).
    Starttls,
    /// No encryption. Local relays and test servers only.
    #[strum(serialize = "none")]
    Plain,
}

#[derive(Debug, Clone)]
pub struct SmtpOptions {
    pub host: String,
    /// Overrides the TLS mode's default port.
    pub port: Option<u16>,
    pub tls: SmtpTls,
    pub timeout: Duration,
}

/// SMTP relay sender. The account user doubles as the sender address, as it
/// does for Gmail app passwords.
#[derive(Clone)]
pub struct SmtpEmailSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Address,
}

impl SmtpEmailSender {
    pub fn new(
        options: &SmtpOptions,
        user: &str,
        password: &SecretString,
    ) -> Result<Self, InfraError> {
        let sender: Address = user
            .parse()
            .map_err(|e| InfraError::MailTransport(format!("EMAIL_USER is not an address: {e}")))?;

        let builder = match options.tls {
            SmtpTls::Plain => AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&options.host),
            SmtpTls::Tls => AsyncSmtpTransport::<Tokio1Executor>::relay(&options.host)
                .map_err(|e| InfraError::MailTransport(e.to_string()))?,
            SmtpTls::Starttls => AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&options.host)
                .map_err(|e| InfraError::MailTransport(e.to_string()))?,
        };

        let mut builder = builder
            .timeout(Some(options.timeout))
            .credentials(Credentials::new(
                user.to_string(),
                password.expose_secret().to_string(),
            ));

        if let Some(port) = options.port {
            builder = builder.port(port);
        }

        Ok(Self {
            transport: builder.build(),
            sender,
        })
    }

    fn build_message(&self, email: &OutgoingEmail) -> AppResult<Message> {
        let to: Mailbox = email
            .to
            .parse()
            .map_err(|_| AppError::MailDispatch(format!("Invalid recipient address: {}", email.to)))?;
        let from = Mailbox::new(Some(email.from_name.clone()), self.sender.clone());

        Message::builder()
            .from(from)
            .to(to)
            .subject(email.subject.as_str())
            .multipart(MultiPart::alternative_plain_html(
                email.text.clone(),
                email.html.clone(),
            ))
            .map_err(|e| AppError::MailDispatch(format!("Failed to build message: {e}")))
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn verify(&self) -> AppResult<()> {
        let accepted = self
            .transport
            .test_connection()
            .await
            .map_err(|e| AppError::MailDispatch(format!("SMTP connection failed: {e}")))?;

        if !accepted {
            return Err(AppError::MailDispatch(
                "SMTP server rejected the connection".into(),
            ));
        }

        Ok(())
    }

    async fn send(&self, email: &OutgoingEmail) -> AppResult<()> {
        let message = self.build_message(email)?;

        self.transport
            .send(message)
            .await
            .map_err(|e| AppError::MailDispatch(format!("SMTP send failed: {e}")))?;

        Ok(())
    }
}
