//! Signup Form Component
//!
//! Email field plus activity selector. The form is uncontrolled: values are
//! read from the DOM on submit and cleared with a native form reset.

use activities::{ClientError, StatusMessage};
use leptos::*;

use crate::api;
use crate::components::StatusBanner;
use crate::state::{refresh_activities, GlobalState};

/// Signup form component
#[component]
pub fn SignupForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let form_ref = create_node_ref::<html::Form>();
    let email_ref = create_node_ref::<html::Input>();
    let activity_ref = create_node_ref::<html::Select>();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let email = email_ref.get().map(|input| input.value()).unwrap_or_default();
        let activity = activity_ref.get().map(|select| select.value()).unwrap_or_default();

        spawn_local(async move {
            let outcome = api::signup(&activity, &email).await;
            if let Err(e) = &outcome {
                if !matches!(e, ClientError::Api { .. }) {
                    web_sys::console::error_1(&format!("Error signing up: {}", e).into());
                }
            }

            let status = StatusMessage::from_signup(&outcome);
            if status.is_success() {
                if let Some(form) = form_ref.get() {
                    form.reset();
                }
                refresh_activities(state);
            }
            state.show_status(status);
        });
    };

    view! {
        <form id="signup-form" node_ref=form_ref on:submit=on_submit>
            <div class="form-group">
                <label for="email">"Student Email:"</label>
                <input
                    type="email"
                    id="email"
                    node_ref=email_ref
                    required
                    placeholder="your-email@example.edu"
                />
            </div>
            <div class="form-group">
                <label for="activity">"Select Activity:"</label>
                <select id="activity" node_ref=activity_ref required>
                    {move || {
                        state
                            .options
                            .get()
                            .into_iter()
                            .map(|option| view! {
                                <option value=option.value>{option.label}</option>
                            })
                            .collect_view()
                    }}
                </select>
            </div>
            <button type="submit">"Sign Up"</button>
        </form>

        <StatusBanner />
    }
}
