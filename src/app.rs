//! Root application component with client-side routing.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{home::HomePage, workouts::WorkoutsPage};

/// Root application component.
///
/// Maps `/` to the Home page and `/workouts` to the Workouts page. Any
/// other path renders nothing; the navigation bar links to `/progress`
/// and `/profile` but those routes are not registered yet.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Workout Builder"/>

        <Router>
            <div class="App">
                <Routes fallback=|| ()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("workouts") view=WorkoutsPage/>
                </Routes>
            </div>
        </Router>
    }
}
