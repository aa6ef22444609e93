//! Numeric Input Field
//!
//! Labelled form input with inline validation error. Range hints are
//! presentational; the server owns authoritative validation.

use leptos::prelude::*;

#[component]
pub fn InputField(
    label: &'static str,
    name: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
    min: f64,
    max: f64,
    #[prop(optional)] step: Option<f64>,
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div>
            <label
                for=name
                class="block text-sm font-medium text-gray-700 dark:text-gray-300"
            >
                {label}
            </label>
            <input
                type="number"
                name=name
                id=name
                min=min
                max=max
                step=step
                required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                class=move || {
                    let border = if error.get().is_some() {
                        "border-red-500"
                    } else {
                        "border-gray-300"
                    };
                    format!(
                        "mt-1 block w-full border {border} rounded-md shadow-sm py-2 px-3 \
                         focus:outline-none focus:ring-indigo-500 focus:border-indigo-500 \
                         sm:text-sm dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                    )
                }
            />
            {move || error.get().map(|msg| view! { <p class="mt-1 text-sm text-red-500">{msg}</p> })}
        </div>
    }
}
