//! Test data factories for creating valid test fixtures.
//!
//! Each factory function creates a complete, valid object with sensible defaults.
//! Use the closure parameter to override specific fields as needed.

use crate::{
    domain::entities::waitlist_submission::{City, Problem, Role, Selection, WaitlistSubmission},
    use_cases::waitlist::{WaitlistPayload, WaitlistSettings},
};

/// Create a test form payload (the canonical "Ravi from Kolkata" signup).
pub fn create_test_payload(overrides: impl FnOnce(&mut WaitlistPayload)) -> WaitlistPayload {
    let mut payload = WaitlistPayload {
        name: Some("Ravi".to_string()),
        email: Some("ravi@x.com".to_string()),
        number: Some("9876543210".to_string()),
        city: Some("kolkata".to_string()),
        role: Some("student".to_string()),
        problem: Some("housing".to_string()),
    };
    overrides(&mut payload);
    payload
}

/// Create a validated submission with the same defaults as `create_test_payload`.
pub fn create_test_submission(
    overrides: impl FnOnce(&mut WaitlistSubmission),
) -> WaitlistSubmission {
    let mut submission = WaitlistSubmission {
        name: "Ravi".to_string(),
        email: "ravi@x.com".to_string(),
        number: "9876543210".to_string(),
        city: Selection::Listed(City::Kolkata),
        role: Selection::Listed(Role::Student),
        problem: Selection::Listed(Problem::Housing),
    };
    overrides(&mut submission);
    submission
}

/// Create waitlist settings without a notification address.
pub fn create_test_settings(overrides: impl FnOnce(&mut WaitlistSettings)) -> WaitlistSettings {
    let mut settings = WaitlistSettings {
        notification_email: None,
        community_url: "https://chat.whatsapp.com/test-group".to_string(),
        timezone: chrono_tz::Asia::Kolkata,
    };
    overrides(&mut settings);
    settings
}
