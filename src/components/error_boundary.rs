//! Top-Level Error Boundary
//!
//! Any rendering error raised under the route tree is caught, logged, and
//! replaced with a full-page retry screen. Retrying clears only the
//! boundary's own error set; descendant component state is untouched.

use leptos::prelude::*;

#[component]
pub fn AppErrorBoundary(children: Children) -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| {
            for (_, error) in errors.get_untracked() {
                leptos::logging::error!("rendering failed: {}", error.to_string());
            }
            view! {
                <div class="min-h-screen flex items-center justify-center bg-gradient-to-br from-gray-100 to-gray-200 dark:from-gray-800 dark:to-gray-900">
                    <div class="bg-white dark:bg-gray-700 p-8 rounded-xl shadow-2xl text-center max-w-md mx-4">
                        <h1 class="text-3xl font-extrabold text-red-600 dark:text-red-400 mb-4">
                            "Oops! Something went wrong."
                        </h1>
                        <p class="text-lg text-gray-700 dark:text-gray-200 mb-6">
                            "An unexpected error occurred. Please refresh or contact support."
                        </p>
                        <button
                            class="px-6 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded shadow focus:outline-none focus:ring-2 focus:ring-blue-400"
                            on:click=move |_| errors.set(Default::default())
                        >
                            "Try Again"
                        </button>
                    </div>
                </div>
            }
        }>
            {children()}
        </ErrorBoundary>
    }
}
