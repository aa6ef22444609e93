//! Loading Spinner

use leptos::prelude::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center">
            <div class="w-5 h-5 border-4 border-white border-dashed rounded-full animate-spin"></div>
        </div>
    }
}
