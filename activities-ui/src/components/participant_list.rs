//! Participant List Component
//!
//! Participant rows with avatar badges and the unregister control.

use activities::message::{self, NO_PARTICIPANTS, UNREGISTER_TITLE};
use activities::ParticipantView;
use leptos::*;

use crate::api;
use crate::state::{refresh_activities, GlobalState};

/// Participants section of an activity card
#[component]
pub fn ParticipantList(activity: String, participants: Vec<ParticipantView>) -> impl IntoView {
    view! {
        <div class="participants-section">
            <strong>"Participants"</strong>
            {if participants.is_empty() {
                view! { <p class="info">{NO_PARTICIPANTS}</p> }.into_view()
            } else {
                view! {
                    <ul class="participants-list">
                        {participants
                            .into_iter()
                            .map(|participant| view! {
                                <ParticipantItem activity=activity.clone() participant=participant />
                            })
                            .collect_view()}
                    </ul>
                }
                .into_view()
            }}
        </div>
    }
}

#[component]
fn ParticipantItem(activity: String, participant: ParticipantView) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let email = participant.email.clone();

    let on_delete = move |_| {
        if !confirm(&message::unregister_prompt(&email, &activity)) {
            return;
        }

        let activity = activity.clone();
        let email = email.clone();
        spawn_local(async move {
            match api::unregister(&activity, &email).await {
                Ok(()) => refresh_activities(state),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Error unregistering participant: {}", e).into(),
                    );
                    alert(message::unregister_failure(&e));
                }
            }
        });
    };

    view! {
        <li class="participant-item">
            <span class="participant-avatar">{participant.avatar}</span>
            <span class="participant-name">{participant.email}</span>
            <span
                class="delete-icon"
                title=UNREGISTER_TITLE
                style="cursor: pointer"
                on:click=on_delete
            >
                "🗑"
            </span>
        </li>
    }
}

fn confirm(prompt: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(prompt).ok())
        .unwrap_or(false)
}

fn alert(text: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(text);
    }
}
