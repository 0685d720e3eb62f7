//! Activity Card Component

use activities::ActivityCard;
use leptos::*;

use crate::components::ParticipantList;

/// A single activity: name, description, schedule, availability, then the
/// participants. Server strings are inserted as text nodes.
#[component]
pub fn ActivityCardView(card: ActivityCard) -> impl IntoView {
    let availability = card.availability();

    view! {
        <div class="activity-card">
            <h4>{card.name.clone()}</h4>
            <p>{card.description}</p>
            <p><strong>"Schedule:"</strong>" "{card.schedule}</p>
            <p><strong>"Availability:"</strong>" "{availability}</p>
            <ParticipantList activity=card.name participants=card.participants />
        </div>
    }
}
