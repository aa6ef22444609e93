//! Not Found Page

use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="text-center mt-8">
            <h1 class="text-4xl font-bold text-gray-900 dark:text-white">"404 - Not Found"</h1>
            <p class="mt-4 text-gray-600 dark:text-gray-400">
                "The page you are looking for does not exist."
            </p>
        </div>
    }
}
