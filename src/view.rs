//! Card View-Model
//!
//! Derives what each front-end renders from a freshly fetched
//! [`Activities`] mapping. Nothing here is cached; callers rebuild the
//! cards on every fetch.

use crate::model::{format_number, Activities, ActivityDetails};

/// Placeholder shown first in the activity selector
pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";

/// Badge shown when an email has no local part
pub const UNKNOWN_AVATAR: &str = "?";

/// One rendered activity card
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: f64,
    pub participants: Vec<ParticipantView>,
}

/// One participant row inside a card
#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantView {
    pub email: String,
    pub avatar: String,
}

/// An `<option>` of the activity selector
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl ActivityCard {
    pub fn new(name: &str, details: &ActivityDetails) -> Self {
        Self {
            name: name.to_string(),
            description: details.description.clone(),
            schedule: details.schedule.clone(),
            spots_left: details.spots_left(),
            participants: details
                .participants
                .iter()
                .map(|email| ParticipantView::new(email))
                .collect(),
        }
    }

    /// Build all cards in server order
    pub fn from_activities(activities: &Activities) -> Vec<Self> {
        activities
            .iter()
            .map(|(name, details)| Self::new(name, details))
            .collect()
    }

    pub fn has_participants(&self) -> bool {
        !self.participants.is_empty()
    }

    pub fn availability(&self) -> String {
        format!("{} spots left", format_number(self.spots_left))
    }
}

impl ParticipantView {
    pub fn new(email: &str) -> Self {
        Self {
            email: email.to_string(),
            avatar: avatar_initial(email),
        }
    }
}

/// First character of the email's local part, upper-cased
pub fn avatar_initial(email: &str) -> String {
    let local = email.split('@').next().unwrap_or("");
    match local.chars().next() {
        Some(c) => c.to_uppercase().collect(),
        None => UNKNOWN_AVATAR.to_string(),
    }
}

/// Selector options: the placeholder, then one entry per activity
pub fn select_options(activities: &Activities) -> Vec<SelectOption> {
    std::iter::once(SelectOption {
        value: String::new(),
        label: SELECT_PLACEHOLDER.to_string(),
    })
    .chain(activities.names().map(|name| SelectOption {
        value: name.to_string(),
        label: name.to_string(),
    }))
    .collect()
}
