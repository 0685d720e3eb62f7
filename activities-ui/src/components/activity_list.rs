//! Activity List Component
//!
//! Renders one card per activity in server order, or the loading/failure
//! placeholder.

use activities::message::LOAD_FAILED;
use leptos::*;

use crate::components::{ActivityCardView, Loading};
use crate::state::{GlobalState, ListState};

/// Activity list container
#[component]
pub fn ActivityList() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div id="activities-list">
            {move || match state.list.get() {
                ListState::Loading => view! { <Loading /> }.into_view(),
                ListState::Failed => view! { <p>{LOAD_FAILED}</p> }.into_view(),
                ListState::Loaded(cards) => cards
                    .into_iter()
                    .map(|card| view! { <ActivityCardView card=card /> })
                    .collect_view(),
            }}
        </div>
    }
}
