//! Debounced Search Input
//!
//! Emits the query through `on_search` only after the user pauses typing.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

const DEBOUNCE_MS: u32 = 400;

#[component]
pub fn SearchBar(
    #[prop(optional)] placeholder: &'static str,
    on_search: Callback<String>,
) -> impl IntoView {
    let (term, set_term) = signal(String::new());
    // Dropping a Timeout cancels it; only the latest keystroke fires.
    let pending = StoredValue::new_local(None::<Timeout>);

    on_cleanup(move || pending.update_value(|t| drop(t.take())));

    let debounce = move |value: String| {
        set_term.set(value.clone());
        let timeout = Timeout::new(DEBOUNCE_MS, move || on_search.run(value));
        pending.update_value(|slot| drop(slot.replace(timeout)));
    };

    view! {
        <input
            type="text"
            placeholder=placeholder
            prop:value=move || term.get()
            on:input=move |ev| debounce(event_target_value(&ev))
            class="p-2 border border-gray-300 rounded w-full dark:bg-gray-700 dark:border-gray-600 dark:text-white"
        />
    }
}
