//! Top navigation bar shared by every page.
//!
//! Purely static: a brand link, four labeled links, and a mobile menu
//! icon button with no handler attached.

use leptos::prelude::*;

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

/// Brand label and target shown on the left edge of the bar.
pub const BRAND: (&str, &str) = ("Workout Builder", "/");

/// Nav links in display order as `(label, target)` pairs.
///
/// `/progress` and `/profile` are not registered with the router yet;
/// following them renders a blank page.
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("Home", "/"),
    ("Workouts", "/workouts"),
    ("Progress", "/progress"),
    ("Profile", "/profile"),
];

/// Static navigation bar.
#[component]
pub fn Navigation() -> impl IntoView {
    view! {
        <nav class="bg-white shadow-lg">
            <div class="container mx-auto px-4">
                <div class="flex justify-between items-center h-16">
                    <a href=BRAND.1 class="text-xl font-bold text-blue-600">
                        {BRAND.0}
                    </a>

                    <div class="hidden md:flex space-x-8">
                        {NAV_LINKS
                            .into_iter()
                            .map(|(label, target)| {
                                view! {
                                    <a
                                        href=target
                                        class="text-gray-700 hover:text-blue-600 transition-colors duration-200"
                                    >
                                        {label}
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>

                    <div class="md:hidden">
                        <button class="text-gray-700 hover:text-blue-600">
                            <svg
                                class="w-6 h-6"
                                fill="none"
                                stroke="currentColor"
                                viewBox="0 0 24 24"
                            >
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="2"
                                    d="M4 6h16M4 12h16M4 18h16"
                                ></path>
                            </svg>
                        </button>
                    </div>
                </div>
            </div>
        </nav>
    }
}
