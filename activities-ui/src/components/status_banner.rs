//! Status Banner Component
//!
//! Shows the result of the last sign-up under the form.

use leptos::*;

use crate::state::GlobalState;

/// Status message line; hidden when there is nothing to show
#[component]
pub fn StatusBanner() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div
            id="message"
            class=move || {
                state
                    .status
                    .get()
                    .map(|msg| msg.kind.css_class())
                    .unwrap_or("hidden")
            }
        >
            {move || state.status.get().map(|msg| msg.text).unwrap_or_default()}
        </div>
    }
}
