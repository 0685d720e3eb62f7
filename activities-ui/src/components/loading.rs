//! Loading Component

use activities::message::LOADING_TEXT;
use leptos::*;

/// Placeholder shown until the first list fetch finishes
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <p class="loading">{LOADING_TEXT}</p>
    }
}
