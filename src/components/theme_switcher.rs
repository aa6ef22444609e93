//! Theme Toggle Button

use leptos::prelude::*;

use crate::theme::use_theme;

#[component]
pub fn ThemeSwitcher() -> impl IntoView {
    let theme = use_theme();

    view! {
        <button
            class="text-white ml-4"
            title="Toggle theme"
            on:click=move |_| theme.toggle()
        >
            {move || theme.mode().icon()}
        </button>
    }
}
