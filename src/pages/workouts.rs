//! Workouts page listing the fixed set of plan cards.

use leptos::prelude::*;

use crate::components::navigation::Navigation;
use crate::components::plan_card::PlanCard;

#[cfg(test)]
#[path = "workouts_test.rs"]
mod workouts_test;

/// Plan cards in display order as `(title, description)` pairs.
pub const PLANS: [(&str, &str); 3] = [
    (
        "Beginner Plan",
        "Perfect for those just starting their fitness journey",
    ),
    (
        "Intermediate Plan",
        "For those with some fitness experience",
    ),
    (
        "Advanced Plan",
        "Challenging workouts for fitness enthusiasts",
    ),
];

/// Workouts page — navigation bar, heading, subtext, and three static
/// plan cards.
#[component]
pub fn WorkoutsPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gradient-to-br from-green-50 to-emerald-100">
            <Navigation/>
            <div class="container mx-auto px-4 py-16">
                <div class="text-center">
                    <h1 class="text-4xl font-bold text-gray-900 mb-6">
                        "Workout Plans"
                    </h1>
                    <p class="text-xl text-gray-600 mb-8">
                        "Browse and create your personalized workout routines"
                    </p>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {PLANS
                        .into_iter()
                        .map(|(title, description)| {
                            view! { <PlanCard title=title description=description/> }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}
