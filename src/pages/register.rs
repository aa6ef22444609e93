//! Registration Page

use std::collections::BTreeMap;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;

const REGISTER_ERROR: &str = "An error occurred during registration. Please try again.";

#[component]
pub fn Register() -> impl IntoView {
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let errors = RwSignal::new(BTreeMap::<&'static str, String>::new());

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let user = username.get_untracked();
            let pass = password.get_untracked();

            let mut missing = BTreeMap::new();
            if user.is_empty() {
                missing.insert("username", "Username is required".to_string());
            }
            if pass.is_empty() {
                missing.insert("password", "Password is required".to_string());
            }
            if !missing.is_empty() {
                errors.set(missing);
                return;
            }
            errors.set(BTreeMap::new());

            let navigate = navigate.clone();
            spawn_local(async move {
                match api::register(&user, &pass).await {
                    Ok(()) => navigate("/login", Default::default()),
                    Err(err) => {
                        let message = err.server_message().unwrap_or(REGISTER_ERROR).to_string();
                        errors.update(|e| {
                            e.insert("submit", message);
                        });
                    }
                }
            });
        }
    };

    let field_error =
        move |name: &'static str| move || errors.with(|e| e.get(name).cloned());
    let field_class = move |name: &'static str| {
        move || {
            let border = if errors.with(|e| e.contains_key(name)) {
                "border-red-500"
            } else {
                "border-gray-300"
            };
            format!(
                "mt-1 block w-full border {border} rounded-md shadow-sm py-2 px-3 \
                 focus:outline-none focus:ring-indigo-500 focus:border-indigo-500 sm:text-sm \
                 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
            )
        }
    };

    view! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900 flex flex-col justify-center">
            <div class="max-w-md mx-auto bg-white dark:bg-gray-800 p-8 rounded-xl shadow-md">
                <h1 class="text-3xl font-bold text-center mb-6 dark:text-white">"Register"</h1>
                <form class="space-y-6" on:submit=on_submit>
                    <div>
                        <label
                            for="username"
                            class="block text-sm font-medium text-gray-700 dark:text-gray-300"
                        >
                            "Username"
                        </label>
                        <input
                            type="text"
                            id="username"
                            name="username"
                            class=field_class("username")
                            prop:value=move || username.get()
                            on:input=move |ev| {
                                set_username.set(event_target_value(&ev));
                                errors.update(|e| { e.remove("username"); });
                            }
                        />
                        {move || {
                            field_error("username")()
                                .map(|msg| view! { <p class="mt-1 text-sm text-red-500">{msg}</p> })
                        }}
                    </div>
                    <div>
                        <label
                            for="password"
                            class="block text-sm font-medium text-gray-700 dark:text-gray-300"
                        >
                            "Password"
                        </label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            class=field_class("password")
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                set_password.set(event_target_value(&ev));
                                errors.update(|e| { e.remove("password"); });
                            }
                        />
                        {move || {
                            field_error("password")()
                                .map(|msg| view! { <p class="mt-1 text-sm text-red-500">{msg}</p> })
                        }}
                    </div>
                    {move || {
                        errors
                            .with(|e| e.get("submit").cloned())
                            .map(|message| view! { <p class="text-red-500 text-sm">{message}</p> })
                    }}
                    <div>
                        <button
                            type="submit"
                            class="w-full flex justify-center py-2 px-4 border border-transparent rounded-md shadow-sm text-sm font-medium text-white bg-gradient-to-r from-[#fc466b] to-[#3f5efb] focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-indigo-500"
                        >
                            "Register"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
