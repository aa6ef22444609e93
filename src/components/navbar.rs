//! Navigation Bar
//!
//! Owns the session synchronizer: on every route change the server is asked
//! who the cookie belongs to, and the store is updated from the answer.
//! Link sets switch on the session variant; a mobile overlay mirrors them.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};

use crate::api;
use crate::components::ThemeSwitcher;
use crate::models::Session;
use crate::storage;
use crate::store::{use_app_store, AppStateStoreFields};

const AUTH_LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/about", "About"),
    ("/profile", "Profile"),
    ("/predict-history", "History"),
    ("/visualizations", "Visualizations"),
    ("/resources", "Resources"),
    ("/contact", "Contact Us"),
];

const ANON_LINKS: &[(&str, &str)] = &[("/login", "Login"), ("/register", "Register")];

fn link_set(links: &'static [(&'static str, &'static str)], class: &'static str) -> impl IntoView {
    links
        .iter()
        .map(|(href, label)| {
            view! { <A href=*href attr:class=class>{*label}</A> }
        })
        .collect_view()
}

#[component]
pub fn Navbar() -> impl IntoView {
    let store = use_app_store();
    let location = use_location();
    let navigate = use_navigate();
    let (mobile_open, set_mobile_open) = signal(false);

    let sync_abort = StoredValue::new_local(None::<web_sys::AbortController>);
    on_cleanup(move || {
        sync_abort.update_value(|slot| {
            if let Some(controller) = slot.take() {
                controller.abort();
            }
        })
    });

    // Re-derive session on every route change. The server is the source of
    // truth; any failure collapses to Anonymous. No retry, the next
    // navigation issues a fresh request.
    Effect::new(move |_| {
        let _ = location.pathname.get();
        let controller = web_sys::AbortController::new().ok();
        let signal = controller.as_ref().map(|c| c.signal());
        sync_abort.update_value(|slot| *slot = controller);
        spawn_local(async move {
            let session = match api::current_user(signal.as_ref()).await {
                Ok(payload) => Session::from_current_user(payload),
                Err(_) => Session::Anonymous,
            };
            store.session().set(session);
        });
    });

    let logout = {
        let navigate = navigate.clone();
        move |_| {
            let navigate = navigate.clone();
            spawn_local(async move {
                if let Err(err) = api::logout().await {
                    leptos::logging::error!("logout failed: {err}");
                }
                store.session().set(Session::Anonymous);
                storage::remove(storage::IS_LOGGED_IN_KEY);
                storage::remove(storage::USER_KEY);
                navigate("/login", Default::default());
            });
        }
    };
    let logout_mobile = logout.clone();

    view! {
        <nav class="flex justify-between items-center px-4 py-2 text-white bg-gradient-to-r from-[#fc466b] to-[#3f5efb]">
            <div class="flex items-center space-x-2">
                <span class="font-bold text-lg">"Diabetes Predictor (Beta)"</span>
            </div>

            // Desktop links
            <div class="hidden md:flex items-center space-x-4 ml-auto">
                {move || {
                    if store.session().get().is_authenticated() {
                        view! {
                            {link_set(AUTH_LINKS, "text-white hover:underline flex items-center")}
                            <button
                                class="text-white hover:underline flex items-center"
                                on:click=logout.clone()
                            >
                                "Logout"
                            </button>
                        }
                        .into_any()
                    } else {
                        link_set(ANON_LINKS, "text-white hover:underline flex items-center")
                            .into_any()
                    }
                }}
                <ThemeSwitcher />
            </div>

            // Hamburger for smaller devices
            <div class="md:hidden">
                <button
                    class="text-white focus:outline-none"
                    on:click=move |_| set_mobile_open.update(|open| *open = !*open)
                >
                    "\u{2630}"
                </button>
            </div>

            // Mobile overlay; any click inside closes it
            {move || {
                mobile_open.get().then(|| {
                    let logout = logout_mobile.clone();
                    view! {
                        <div
                            class="absolute top-0 left-0 w-full h-full bg-black bg-opacity-50 flex flex-col items-center justify-center space-y-4 z-50"
                            on:click=move |_| set_mobile_open.set(false)
                        >
                            <button class="absolute top-4 right-4 text-white">"\u{2715}"</button>
                            {if store.session().get().is_authenticated() {
                                view! {
                                    {link_set(AUTH_LINKS, "text-white flex items-center")}
                                    <button
                                        class="text-white flex items-center"
                                        on:click=logout
                                    >
                                        "Logout"
                                    </button>
                                }
                                .into_any()
                            } else {
                                link_set(ANON_LINKS, "text-white flex items-center").into_any()
                            }}
                        </div>
                    }
                })
            }}
        </nav>
    }
}
