//! App Root Component
//!
//! Page layout and global state provider. Fetches the activity list once on
//! mount; every later fetch is triggered by a sign-up or unregister.

use leptos::*;

use crate::components::{ActivityList, SignupForm};
use crate::state::global::{provide_global_state, refresh_activities, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();

    let state = use_context::<GlobalState>().expect("GlobalState not found");
    refresh_activities(state);

    view! {
        <header>
            <h1>"Activities"</h1>
            <h2>"Extracurricular Sign-Up"</h2>
        </header>

        <main>
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <ActivityList />
            </section>

            <section id="signup-container">
                <h3>"Sign Up for an Activity"</h3>
                <SignupForm />
            </section>
        </main>
    }
}
