//! Contact Page
//!
//! Relays the message through the EmailJS REST API; no backend involvement.

use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::json;

const EMAILJS_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";
const EMAILJS_SERVICE_ID: &str = "service_ctbyv8o";
const EMAILJS_TEMPLATE_ID: &str = "template_nmvw18p";
const EMAILJS_PUBLIC_KEY: &str = "8Mf6aJIBQB7gkhMql";

#[component]
pub fn Contact() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (subject, set_subject) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (status, set_status) = signal(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let payload = json!({
            "service_id": EMAILJS_SERVICE_ID,
            "template_id": EMAILJS_TEMPLATE_ID,
            "user_id": EMAILJS_PUBLIC_KEY,
            "template_params": {
                "name": name.get_untracked(),
                "email": email.get_untracked(),
                "subject": subject.get_untracked(),
                "message": message.get_untracked(),
            },
        });
        spawn_local(async move {
            let sent = match Request::post(EMAILJS_URL).json(&payload) {
                Ok(req) => matches!(req.send().await, Ok(resp) if resp.ok()),
                Err(_) => false,
            };
            if sent {
                set_status.set(Some("Message sent successfully!".to_string()));
                set_name.set(String::new());
                set_email.set(String::new());
                set_subject.set(String::new());
                set_message.set(String::new());
            } else {
                set_status.set(Some("Failed to send message. Please try again.".to_string()));
            }
        });
    };

    let input_class = "mt-1 block w-full px-4 py-2 border border-gray-300 rounded-md shadow-sm \
                       focus:outline-none focus:ring-2 focus:ring-blue-500 \
                       dark:bg-gray-700 dark:border-gray-600 dark:text-white";

    view! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900 flex items-center justify-center py-10">
            <div class="max-w-3xl w-full bg-white dark:bg-gray-800 p-10 rounded-xl shadow-2xl border border-gray-200 dark:border-gray-700">
                <h1 class="text-5xl font-extrabold text-center mb-8 bg-clip-text text-transparent bg-gradient-to-r from-pink-500 to-blue-500">
                    "Contact Us"
                </h1>
                <form class="space-y-6" on:submit=on_submit>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        <div>
                            <label
                                for="name"
                                class="block text-sm font-medium text-gray-700 dark:text-gray-300"
                            >
                                "Name"
                            </label>
                            <input
                                type="text"
                                id="name"
                                name="name"
                                required
                                placeholder="Your Name"
                                class=input_class
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label
                                for="email"
                                class="block text-sm font-medium text-gray-700 dark:text-gray-300"
                            >
                                "Email"
                            </label>
                            <input
                                type="email"
                                id="email"
                                name="email"
                                required
                                placeholder="Your Email"
                                class=input_class
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                        </div>
                    </div>
                    <div>
                        <label
                            for="subject"
                            class="block text-sm font-medium text-gray-700 dark:text-gray-300"
                        >
                            "Subject"
                        </label>
                        <input
                            type="text"
                            id="subject"
                            name="subject"
                            required
                            placeholder="Subject"
                            class=input_class
                            prop:value=move || subject.get()
                            on:input=move |ev| set_subject.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label
                            for="message"
                            class="block text-sm font-medium text-gray-700 dark:text-gray-300"
                        >
                            "Message"
                        </label>
                        <textarea
                            id="message"
                            name="message"
                            rows="5"
                            required
                            placeholder="Your message..."
                            class=input_class
                            prop:value=move || message.get()
                            on:input=move |ev| set_message.set(event_target_value(&ev))
                        ></textarea>
                    </div>
                    <div class="text-center">
                        <button
                            type="submit"
                            class="px-6 py-3 font-semibold rounded-md text-white bg-gradient-to-r from-pink-500 to-blue-500 hover:from-pink-600 hover:to-blue-600 focus:outline-none focus:ring-2 focus:ring-blue-500 transition-all duration-300"
                        >
                            "Send Message"
                        </button>
                    </div>
                    {move || {
                        status.get().map(|text| view! {
                            <p class="text-center text-sm text-gray-700 dark:text-gray-300">{text}</p>
                        })
                    }}
                </form>
            </div>
        </div>
    }
}
