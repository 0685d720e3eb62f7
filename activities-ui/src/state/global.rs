//! Global Application State
//!
//! Reactive state management using Leptos signals. The activity list is
//! rebuilt from scratch on every fetch; nothing from an earlier fetch is
//! kept except the selector options when a fetch fails.

use activities::message::STATUS_HIDE_DELAY_MS;
use activities::view::{select_options, SelectOption};
use activities::{Activities, ActivityCard, ClientResult, StatusMessage};
use leptos::*;

use crate::api;

/// What the activity list currently shows
#[derive(Clone, Debug, PartialEq)]
pub enum ListState {
    Loading,
    Loaded(Vec<ActivityCard>),
    Failed,
}

impl ListState {
    pub fn from_fetch(result: &ClientResult<Activities>) -> Self {
        match result {
            Ok(activities) => ListState::Loaded(ActivityCard::from_activities(activities)),
            Err(_) => ListState::Failed,
        }
    }
}

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Activity cards, or the loading/failure placeholder
    pub list: RwSignal<ListState>,
    /// Options of the activity selector in the signup form
    pub options: RwSignal<Vec<SelectOption>>,
    /// Status line under the signup form
    pub status: RwSignal<Option<StatusMessage>>,
    /// Bumped per shown message so a stale hide timer leaves a newer one alone
    status_generation: RwSignal<u64>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState::new());
}

impl GlobalState {
    fn new() -> Self {
        Self {
            list: create_rw_signal(ListState::Loading),
            options: create_rw_signal(select_options(&Activities::default())),
            status: create_rw_signal(None),
            status_generation: create_rw_signal(0),
        }
    }

    /// Show a status message, hiding it after the fixed delay when the
    /// message asks for it
    pub fn show_status(&self, message: StatusMessage) {
        if let Some(generation) = self.set_status(message) {
            let state = *self;
            gloo_timers::callback::Timeout::new(STATUS_HIDE_DELAY_MS, move || {
                state.hide_status(generation);
            })
            .forget();
        }
    }

    /// Replace the status line. Returns the generation a hide timer should
    /// target, or `None` when the message stays until replaced.
    fn set_status(&self, message: StatusMessage) -> Option<u64> {
        let generation = self.status_generation.get_untracked() + 1;
        self.status_generation.set(generation);

        let auto_hide = message.auto_hide;
        self.status.set(Some(message));
        auto_hide.then_some(generation)
    }

    /// Hide the status line if it is still the one shown at `generation`
    fn hide_status(&self, generation: u64) {
        if self.status_generation.get_untracked() == generation {
            self.status.set(None);
        }
    }

    /// Apply a finished fetch to the list and the selector
    pub fn apply_fetch(&self, result: ClientResult<Activities>) {
        if let Ok(activities) = &result {
            self.options.set(select_options(activities));
        }
        self.list.set(ListState::from_fetch(&result));
    }
}

/// Fetch the activity list and re-render
pub fn refresh_activities(state: GlobalState) {
    spawn_local(async move {
        let result = api::fetch_activities().await;
        if let Err(e) = &result {
            web_sys::console::error_1(&format!("Error fetching activities: {}", e).into());
        }
        state.apply_fetch(result);
    });
}
