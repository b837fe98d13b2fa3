use askama::Template;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::waitlist_submission::WaitlistSubmission,
};

pub const BRAND_NAME: &str = "BachelorOS";
pub const WELCOME_SENDER_NAME: &str = "BachelorOS Team";
pub const NOTIFICATION_SENDER_NAME: &str = "BachelorOS Waitlist";

const WELCOME_SUBJECT: &str = "🚀 Welcome to BachelorOS Waitlist!";
const NOTIFICATION_SUBJECT: &str = "🎉 New Waitlist Signup - BachelorOS";

/// Subject plus both alternative bodies of a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    pub subject: String,
    pub html: String,
    pub text: String,
}

#[derive(Template)]
#[template(path = "welcome.html")]
struct WelcomeHtml<'a> {
    brand: &'a str,
    name: &'a str,
    number: &'a str,
    city: &'a str,
    role: &'a str,
    problem: &'a str,
    community_url: &'a str,
}

#[derive(Template)]
#[template(path = "welcome.txt")]
struct WelcomeText<'a> {
    brand: &'a str,
    name: &'a str,
    number: &'a str,
    city: &'a str,
    role: &'a str,
    problem: &'a str,
    community_url: &'a str,
}

#[derive(Template)]
#[template(path = "notification.html")]
struct NotificationHtml<'a> {
    brand: &'a str,
    name: &'a str,
    email: &'a str,
    number: &'a str,
    city: &'a str,
    role: &'a str,
    problem: &'a str,
    joined_at: &'a str,
}

#[derive(Template)]
#[template(path = "notification.txt")]
struct NotificationText<'a> {
    brand: &'a str,
    name: &'a str,
    email: &'a str,
    number: &'a str,
    city: &'a str,
    role: &'a str,
    problem: &'a str,
    joined_at: &'a str,
}

pub fn welcome_email(submission: &WaitlistSubmission, community_url: &str) -> AppResult<RenderedEmail> {
    let html = WelcomeHtml {
        brand: BRAND_NAME,
        name: &submission.name,
        number: &submission.number,
        city: submission.city.label(),
        role: submission.role.label(),
        problem: submission.problem.label(),
        community_url,
    }
    .render()
    .map_err(render_error)?;

    let text = WelcomeText {
        brand: BRAND_NAME,
        name: &submission.name,
        number: &submission.number,
        city: submission.city.label(),
        role: submission.role.label(),
        problem: submission.problem.label(),
        community_url,
    }
    .render()
    .map_err(render_error)?;

    Ok(RenderedEmail {
        subject: WELCOME_SUBJECT.to_string(),
        html,
        text,
    })
}

pub fn notification_email(
    submission: &WaitlistSubmission,
    joined_at: DateTime<Utc>,
    timezone: Tz,
) -> AppResult<RenderedEmail> {
    let joined_at = format_joined_at(joined_at, timezone);

    let html = NotificationHtml {
        brand: BRAND_NAME,
        name: &submission.name,
        email: &submission.email,
        number: &submission.number,
        city: submission.city.label(),
        role: submission.role.label(),
        problem: submission.problem.label(),
        joined_at: &joined_at,
    }
    .render()
    .map_err(render_error)?;

    let text = NotificationText {
        brand: BRAND_NAME,
        name: &submission.name,
        email: &submission.email,
        number: &submission.number,
        city: submission.city.label(),
        role: submission.role.label(),
        problem: submission.problem.label(),
        joined_at: &joined_at,
    }
    .render()
    .map_err(render_error)?;

    Ok(RenderedEmail {
        subject: NOTIFICATION_SUBJECT.to_string(),
        html,
        text,
    })
}

/// Join time as an Indian-locale wall clock reading, e.g. `17/10/2026, 3:04:05 pm`.
pub fn format_joined_at(at: DateTime<Utc>, timezone: Tz) -> String {
    at.with_timezone(&timezone)
        .format("%d/%m/%Y, %-I:%M:%S %P")
        .to_string()
}

fn render_error(e: askama::Error) -> AppError {
    AppError::Internal(format!("Failed to render email template: {e}"))
}
