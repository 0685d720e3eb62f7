//! UI Components
//!
//! Leptos components for the activity list and the signup form.

pub mod activity_card;
pub mod activity_list;
pub mod loading;
pub mod participant_list;
pub mod signup_form;
pub mod status_banner;

pub use activity_card::ActivityCardView;
pub use activity_list::ActivityList;
pub use loading::Loading;
pub use participant_list::ParticipantList;
pub use signup_form::SignupForm;
pub use status_banner::StatusBanner;
