//! Home landing page.

use leptos::prelude::*;

use crate::components::navigation::Navigation;

/// Home page — navigation bar plus a static hero block. The call to
/// action button has no handler attached.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gradient-to-br from-blue-50 to-indigo-100">
            <Navigation/>
            <div class="container mx-auto px-4 py-16">
                <div class="text-center">
                    <h1 class="text-4xl font-bold text-gray-900 mb-6">
                        "Build Your Perfect Workout"
                    </h1>
                    <p class="text-xl text-gray-600 mb-8">
                        "Create personalized workout plans and track your fitness progress"
                    </p>
                    <button class="bg-blue-600 hover:bg-blue-700 text-white font-semibold py-3 px-8 rounded-lg transition-colors duration-200">
                        "Get Started"
                    </button>
                </div>
            </div>
        </div>
    }
}
