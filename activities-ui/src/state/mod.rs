//! State Management
//!
//! Global application state shared by the list and the signup form.

pub mod global;

pub use global::{provide_global_state, refresh_activities, GlobalState, ListState};
