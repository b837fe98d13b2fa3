use crate::{
    adapters::{
        email::{resend::ResendEmailSender, smtp::SmtpEmailSender},
        http::app_state::AppState,
    },
    infra::{
        config::{AppConfig, MailConfig, MailProvider},
        error::InfraError,
    },
    use_cases::waitlist::{EmailSender, WaitlistUseCases},
};
use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_app_state(config: AppConfig) -> Result<AppState, InfraError> {
    let email = build_email_sender(&config.mail)?;

    let waitlist_use_cases = WaitlistUseCases::new(email, config.waitlist.clone());

    Ok(AppState {
        config: Arc::new(config),
        waitlist_use_cases: Arc::new(waitlist_use_cases),
    })
}

fn build_email_sender(mail: &MailConfig) -> Result<Option<Arc<dyn EmailSender>>, InfraError> {
    let Some(credentials) = &mail.credentials else {
        tracing::warn!(
            provider = %mail.provider,
            "EMAIL_USER or EMAIL_APP_PASSWORD not set; waitlist signups will fail"
        );
        return Ok(None);
    };

    let sender: Arc<dyn EmailSender> = match mail.provider {
        MailProvider::Smtp => Arc::new(SmtpEmailSender::new(
            &mail.smtp,
            &credentials.user,
            &credentials.password,
        )?),
        MailProvider::Resend => Arc::new(ResendEmailSender::new(
            mail.resend_api_base.clone(),
            credentials.password.clone(),
            credentials.user.clone(),
        )?),
    };

    tracing::info!(provider = %mail.provider, sender = %credentials.user, "Mail transport configured");

    Ok(Some(sender))
}

pub fn init_tracing(log_file: &Path) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "bacheloros_waitlist=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false) // don't show target (module path)
        .with_level(true) // show log level
        .pretty(); // human-friendly, with colors

    // File (structured JSON logs), skipped when the file cannot be created
    let json_layer = File::create(log_file).ok().map(|file| {
        fmt::layer()
            .json()
            .with_writer(file)
            .with_current_span(true)
            .with_span_list(true)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}
