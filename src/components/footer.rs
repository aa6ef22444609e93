//! Footer

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-gray-300 py-4 border-t border-gray-700">
            <div class="container mx-auto text-center">
                <p class="text-sm mb-2">
                    "© 2025 Diabetes Predictor. Developed by "
                    <A href="/about" attr:class="text-indigo-400 hover:underline">"TAN Team"</A>
                </p>
            </div>
        </footer>
    }
}
