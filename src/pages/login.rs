//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api;
use crate::storage;

const LOGIN_ERROR: &str = "An error occurred during login.";

#[component]
pub fn Login() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (message, set_message) = signal(None::<String>);
    let (is_error, set_is_error) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let user = username.get_untracked();
        let pass = password.get_untracked();
        spawn_local(async move {
            match api::login(&user, &pass).await {
                Ok(resp) if resp.is_authenticated() => {
                    set_message.set(Some("Login successful!".to_string()));
                    set_is_error.set(false);
                    storage::set(storage::IS_LOGGED_IN_KEY, "true");
                    // Full-document redirect so the whole shell restarts
                    // with the fresh session cookie.
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/");
                    }
                }
                Ok(_) => {
                    set_message.set(Some("Login failed".to_string()));
                    set_is_error.set(true);
                }
                Err(err) => {
                    set_message.set(Some(
                        err.server_message().unwrap_or(LOGIN_ERROR).to_string(),
                    ));
                    set_is_error.set(true);
                }
            }
        });
    };

    let input_class = "mt-1 block w-full border border-gray-300 rounded-md shadow-sm py-2 px-3 \
                       focus:outline-none focus:ring-indigo-500 focus:border-indigo-500 sm:text-sm \
                       dark:bg-gray-700 dark:border-gray-600 dark:text-white";

    view! {
        <div class="font-inter">
            <div class="max-w-md mx-auto">
                <h2 class="text-3xl font-bold text-center mb-8 text-gray-900 dark:text-white">
                    "Login"
                </h2>
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
                            required
                            class=input_class
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                        />
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
                            required
                            class=input_class
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <button
                            type="submit"
                            class="w-full flex justify-center py-2 px-4 border border-transparent rounded-md shadow-sm text-sm font-medium text-white bg-indigo-600 hover:bg-indigo-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-indigo-500"
                        >
                            "Log In"
                        </button>
                    </div>
                </form>
                {move || {
                    message.get().map(|text| {
                        let color = if is_error.get() { "text-red-500" } else { "text-green-600" };
                        view! { <p class=format!("mt-4 text-center text-sm {color}")>{text}</p> }
                    })
                }}
                <p class="mt-4 text-center text-sm text-gray-600 dark:text-gray-400">
                    "Don't have an account? "
                    <A
                        href="/register"
                        attr:class="font-medium text-indigo-600 hover:text-indigo-500 dark:text-indigo-400"
                    >
                        "Register here"
                    </A>
                </p>
            </div>

            // About panel
            <div class="mt-10 max-w-md mx-auto bg-gray-100 dark:bg-gray-900 p-4 rounded-lg text-center">
                <h2 class="text-2xl font-bold text-gray-800 dark:text-gray-200">
                    "About Diabetes Predictor"
                </h2>
                <p class="mt-2 text-gray-600 dark:text-gray-400">
                    "Bringing cutting-edge AI to empower your health decisions."
                </p>
            </div>
        </div>
    }
}
