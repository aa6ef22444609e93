//! Profile Page
//!
//! Shows the logged-in username and hosts the change-password form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::models::{Session, User};

#[component]
pub fn Profile() -> impl IntoView {
    let navigate = use_navigate();

    let (current_user, set_current_user) = signal(None::<User>);
    let (current_password, set_current_password) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (message, set_message) = signal(None::<String>);

    let abort = StoredValue::new_local(None::<web_sys::AbortController>);
    on_cleanup(move || {
        abort.update_value(|slot| {
            if let Some(controller) = slot.take() {
                controller.abort();
            }
        })
    });

    {
        let navigate = navigate.clone();
        Effect::new(move |_| {
            let controller = web_sys::AbortController::new().ok();
            let signal = controller.as_ref().map(|c| c.signal());
            abort.update_value(|slot| *slot = controller);
            let navigate = navigate.clone();
            spawn_local(async move {
                let session = match api::current_user(signal.as_ref()).await {
                    Ok(payload) => Session::from_current_user(payload),
                    Err(_) => Session::Anonymous,
                };
                match session {
                    Session::Authenticated(user) => set_current_user.set(Some(user)),
                    Session::Anonymous => navigate("/login", Default::default()),
                }
            });
        });
    }

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let new = new_password.get_untracked();
        if new != confirm_password.get_untracked() {
            set_message.set(Some("New passwords do not match.".to_string()));
            return;
        }
        let current = current_password.get_untracked();
        spawn_local(async move {
            match api::change_password(&current, &new).await {
                Ok(ack) => set_message.set(Some(ack)),
                Err(_) => set_message.set(Some(
                    "Password update failed. Please try again.".to_string(),
                )),
            }
        });
    };

    let input_class = "mt-1 block w-full border-gray-300 rounded-md shadow-sm py-2 px-3 \
                       focus:outline-none focus:ring-2 focus:ring-blue-500 \
                       dark:bg-gray-700 dark:border-gray-600 dark:text-white";

    view! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900 flex flex-col justify-center py-10">
            <div class="max-w-md mx-auto bg-white dark:bg-gray-800 p-10 rounded-xl shadow-xl border border-gray-200 dark:border-gray-700">
                <h1 class="text-4xl font-extrabold text-center mb-6 bg-clip-text text-transparent bg-gradient-to-r from-pink-500 to-blue-500">
                    "Profile"
                </h1>
                {move || {
                    current_user.get().map(|user| view! {
                        <div class="text-center mb-4">
                            <h2 class="text-xl font-semibold text-gray-800 dark:text-gray-200">
                                {user.username}
                            </h2>
                        </div>
                    })
                }}
                <form class="space-y-5" on:submit=on_submit>
                    <div>
                        <label
                            for="currentPassword"
                            class="block text-sm font-medium text-gray-700 dark:text-gray-300"
                        >
                            "Current Password"
                        </label>
                        <input
                            type="password"
                            id="currentPassword"
                            name="currentPassword"
                            required
                            class=input_class
                            prop:value=move || current_password.get()
                            on:input=move |ev| set_current_password.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label
                            for="newPassword"
                            class="block text-sm font-medium text-gray-700 dark:text-gray-300"
                        >
                            "New Password"
                        </label>
                        <input
                            type="password"
                            id="newPassword"
                            name="newPassword"
                            required
                            class=input_class
                            prop:value=move || new_password.get()
                            on:input=move |ev| set_new_password.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label
                            for="confirmNewPassword"
                            class="block text-sm font-medium text-gray-700 dark:text-gray-300"
                        >
                            "Confirm New Password"
                        </label>
                        <input
                            type="password"
                            id="confirmNewPassword"
                            name="confirmNewPassword"
                            required
                            class=input_class
                            prop:value=move || confirm_password.get()
                            on:input=move |ev| set_confirm_password.set(event_target_value(&ev))
                        />
                    </div>
                    {move || {
                        message.get().map(|text| view! {
                            <p class="text-center text-red-500">{text}</p>
                        })
                    }}
                    <button
                        type="submit"
                        class="w-full flex justify-center py-2 px-4 rounded-md shadow-sm text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-blue-500"
                    >
                        "Change Password"
                    </button>
                </form>
            </div>
        </div>
    }
}
