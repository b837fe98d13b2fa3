use std::str::FromStr;

use strum::{AsRefStr, Display, EnumString};

/// A fixed option offered by one of the form's select boxes.
pub trait Choice: FromStr + AsRef<str> {
    /// Label shown to people, as the landing page renders it.
    fn label(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum City {
    Kolkata,
    Delhi,
    Mumbai,
    Bangalore,
    Pune,
    Hyderabad,
    Chennai,
    Other,
}

impl Choice for City {
    fn label(&self) -> &'static str {
        match self {
            City::Kolkata => "Kolkata",
            City::Delhi => "Delhi",
            City::Mumbai => "Mumbai",
            City::Bangalore => "Bangalore",
            City::Pune => "Pune",
            City::Hyderabad => "Hyderabad",
            City::Chennai => "Chennai",
            City::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    Student,
    Professional,
    Freelancer,
    Vendor,
}

impl Choice for Role {
    fn label(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Professional => "Working Professional",
            Role::Freelancer => "Freelancer",
            Role::Vendor => "Vendor/Service Provider",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Problem {
    Food,
    Housing,
    Cleaning,
    Jobs,
    Bills,
    Roommates,
}

impl Choice for Problem {
    fn label(&self) -> &'static str {
        match self {
            Problem::Food => "Finding good food",
            Problem::Housing => "Finding a flat/PG",
            Problem::Cleaning => "Laundry & cleaning",
            Problem::Jobs => "Finding part-time jobs",
            Problem::Bills => "Managing bills",
            Problem::Roommates => "Finding good roommates",
        }
    }
}

/// A select-box value. Codes outside the known set are kept as sent,
/// the server has never rejected them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    Listed(T),
    Unlisted(String),
}

impl<T: Choice> Selection<T> {
    pub fn parse(raw: &str) -> Self {
        raw.parse::<T>()
            .map(Selection::Listed)
            .unwrap_or_else(|_| Selection::Unlisted(raw.to_string()))
    }

    /// Canonical code, or the raw value for unlisted selections.
    pub fn code(&self) -> &str {
        match self {
            Selection::Listed(choice) => choice.as_ref(),
            Selection::Unlisted(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Selection::Listed(choice) => choice.label(),
            Selection::Unlisted(raw) => raw,
        }
    }

    pub fn is_listed(&self) -> bool {
        matches!(self, Selection::Listed(_))
    }
}

/// One person's waitlist form, alive for a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitlistSubmission {
    pub name: String,
    pub email: String,
    /// Phone number as typed. May be empty.
    pub number: String,
    pub city: Selection<City>,
    pub role: Selection<Role>,
    pub problem: Selection<Problem>,
}
