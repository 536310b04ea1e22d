//! Static card component for workout plan entries on the Workouts page.

use leptos::prelude::*;

/// A workout plan card: title, description, and a "View Plan" button
/// with no handler attached.
#[component]
pub fn PlanCard(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="bg-white p-6 rounded-xl shadow-lg">
            <h3 class="text-xl font-semibold text-gray-900 mb-2">{title}</h3>
            <p class="text-gray-600 mb-4">{description}</p>
            <button class="bg-green-600 hover:bg-green-700 text-white font-semibold py-2 px-4 rounded-lg transition-colors duration-200">
                "View Plan"
            </button>
        </div>
    }
}
