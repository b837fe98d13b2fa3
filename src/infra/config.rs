use std::{fmt::Display, net::SocketAddr, path::PathBuf, str::FromStr, time::Duration};

use axum::http::HeaderValue;
use chrono_tz::Tz;
use secrecy::SecretString;
use strum::{AsRefStr, Display as StrumDisplay, EnumString};
use url::Url;

use crate::{
    adapters::email::smtp::{SmtpOptions, SmtpTls},
    infra::error::InfraError,
    use_cases::waitlist::WaitlistSettings,
};

const DEFAULT_COMMUNITY_URL: &str = "https://chat.whatsapp.com/GLWCgvs4w0f3NH2XDKPK01";
const DEFAULT_RESEND_API_BASE: &str = "https://api.resend.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, StrumDisplay, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MailProvider {
    Smtp,
    Resend,
}

/// Mail account identity and its credential (SMTP app password or API key).
#[derive(Debug, Clone)]
pub struct MailCredentials {
    pub user: String,
    pub password: SecretString,
}

#[derive(Debug, Clone)]
pub struct MailConfig {
    pub provider: MailProvider,
    /// `None` when EMAIL_USER or EMAIL_APP_PASSWORD is unset. The server
    /// still starts; signups fail with a configuration error.
    pub credentials: Option<MailCredentials>,
    pub smtp: SmtpOptions,
    pub resend_api_base: Url,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub cors_origin: HeaderValue,
    /// Pre-built landing page served for every non-API path.
    pub static_dir: Option<PathBuf>,
    pub log_file: PathBuf,
    pub mail: MailConfig,
    pub waitlist: WaitlistSettings,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, InfraError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the config from any variable source. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, InfraError> {
        let env = EnvReader { lookup };

        let bind_addr: SocketAddr =
            env.parsed_or("BIND_ADDR", SocketAddr::from(([127, 0, 0, 1], 3001)))?;
        let cors_origin: HeaderValue =
            env.parsed_or("CORS_ORIGIN", HeaderValue::from_static("http://localhost:3000"))?;
        let static_dir = env.optional("STATIC_DIR").map(PathBuf::from);
        let log_file = env
            .optional("LOG_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("app.log"));

        let provider: MailProvider = env.parsed_or("MAIL_PROVIDER", MailProvider::Smtp)?;
        let credentials = match (env.optional("EMAIL_USER"), env.optional("EMAIL_APP_PASSWORD")) {
            (Some(user), Some(password)) => Some(MailCredentials {
                user,
                password: SecretString::new(password.into()),
            }),
            _ => None,
        };

        let smtp_timeout_secs: u64 = env.parsed_or("SMTP_TIMEOUT_SECS", 10)?;
        let smtp = SmtpOptions {
            host: env
                .optional("SMTP_HOST")
                .unwrap_or_else(|| "smtp.gmail.com".to_string()),
            port: env.parsed("SMTP_PORT")?,
            tls: env.parsed_or("SMTP_TLS", SmtpTls::Tls)?,
            timeout: Duration::from_secs(smtp_timeout_secs),
        };

        let resend_api_base: Url = parse_var(
            "RESEND_API_BASE",
            &env.optional("RESEND_API_BASE")
                .unwrap_or_else(|| DEFAULT_RESEND_API_BASE.to_string()),
        )?;

        let community_url: Url = parse_var(
            "COMMUNITY_URL",
            &env.optional("COMMUNITY_URL")
                .unwrap_or_else(|| DEFAULT_COMMUNITY_URL.to_string()),
        )?;
        let timezone: Tz = env.parsed_or("NOTIFICATION_TIMEZONE", chrono_tz::Asia::Kolkata)?;

        Ok(Self {
            bind_addr,
            cors_origin,
            static_dir,
            log_file,
            mail: MailConfig {
                provider,
                credentials,
                smtp,
                resend_api_base,
            },
            waitlist: WaitlistSettings {
                notification_email: env.optional("NOTIFICATION_EMAIL"),
                community_url: community_url.to_string(),
                timezone,
            },
        })
    }
}

struct EnvReader<F> {
    lookup: F,
}

impl<F: Fn(&str) -> Option<String>> EnvReader<F> {
    /// Reads a variable, treating an empty value as unset.
    fn optional(&self, var: &str) -> Option<String> {
        (self.lookup)(var).filter(|value| !value.is_empty())
    }

    fn parsed<T>(&self, var: &'static str) -> Result<Option<T>, InfraError>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.optional(var)
            .map(|raw| parse_var(var, &raw))
            .transpose()
    }

    fn parsed_or<T>(&self, var: &'static str, default: T) -> Result<T, InfraError>
    where
        T: FromStr,
        T::Err: Display,
    {
        Ok(self.parsed(var)?.unwrap_or(default))
    }
}

fn parse_var<T>(var: &'static str, raw: &str) -> Result<T, InfraError>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse().map_err(|e: T::Err| InfraError::ConfigInvalid {
        var,
        reason: e.to_string(),
    })
}
