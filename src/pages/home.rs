//! Home Page
//!
//! The prediction form flow: session guard, model selector, client-side
//! required-field validation, multipart submission, and redirect to the
//! result view with the outcome in navigation state.

use std::collections::BTreeMap;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::{location::State, NavigateOptions};

use crate::api;
use crate::components::{InputField, LoadingSpinner};
use crate::models::{PredictionForm, Session, User};

const SUBMIT_ERROR: &str = "An error occurred during prediction. Please try again.";

#[component]
pub fn Home() -> impl IntoView {
    let navigate = use_navigate();

    let form = RwSignal::new(PredictionForm::default());
    let errors = RwSignal::new(BTreeMap::<&'static str, String>::new());
    let (loading, set_loading) = signal(false);
    let (available_models, set_available_models) = signal(Vec::<String>::new());
    let (current_user, set_current_user) = signal(None::<User>);

    let guard_abort = StoredValue::new_local(None::<web_sys::AbortController>);
    on_cleanup(move || {
        guard_abort.update_value(|slot| {
            if let Some(controller) = slot.take() {
                controller.abort();
            }
        })
    });

    // This page needs a session; anonymous visitors go to the login page.
    {
        let navigate = navigate.clone();
        Effect::new(move |_| {
            let controller = web_sys::AbortController::new().ok();
            let signal = controller.as_ref().map(|c| c.signal());
            guard_abort.update_value(|slot| *slot = controller);
            let navigate = navigate.clone();
            spawn_local(async move {
                let session = match api::current_user(signal.as_ref()).await {
                    Ok(payload) => Session::from_current_user(payload),
                    Err(_) => Session::Anonymous,
                };
                match session {
                    Session::Authenticated(user) => set_current_user.set(Some(user)),
                    Session::Anonymous => {
                        set_current_user.set(None);
                        navigate("/login", Default::default());
                    }
                }
            });
        });
    }

    // Model list for the selector.
    Effect::new(move |_| {
        spawn_local(async move {
            match api::models().await {
                Ok(models) => set_available_models.set(models),
                Err(err) => leptos::logging::error!("error fetching models: {err}"),
            }
        });
    });

    let field_value = move |name: &'static str| {
        Signal::derive(move || form.with(|f| f.field(name).to_string()))
    };
    let field_error =
        move |name: &'static str| Signal::derive(move || errors.with(|e| e.get(name).cloned()));
    let set_field = move |name: &'static str| {
        Callback::new(move |value: String| {
            form.update(|f| f.set_field(name, value));
            errors.update(|e| {
                e.remove(name);
            });
        })
    };

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let current = form.get();
            let missing = current.validate();
            if !missing.is_empty() {
                errors.set(
                    missing
                        .into_iter()
                        .map(|(field, message)| (field, message.to_string()))
                        .collect(),
                );
                return;
            }
            errors.set(BTreeMap::new());
            set_loading.set(true);
            let navigate = navigate.clone();
            spawn_local(async move {
                match api::predict(&current).await {
                    Ok(outcome) => {
                        let state = serde_wasm_bindgen::to_value(&outcome).ok();
                        navigate(
                            "/result",
                            NavigateOptions {
                                state: State::new(state),
                                ..Default::default()
                            },
                        );
                    }
                    Err(err) => {
                        let message = err
                            .server_message()
                            .unwrap_or(SUBMIT_ERROR)
                            .to_string();
                        errors.update(|e| {
                            e.insert("submit", message);
                        });
                    }
                }
                set_loading.set(false);
            });
        }
    };

    view! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900 flex flex-col justify-center">
            <div class="max-w-2xl mx-auto bg-white dark:bg-gray-800 p-10 rounded-xl shadow-xl">
                <h1 class="text-4xl md:text-5xl font-extrabold text-center mb-6 bg-clip-text text-transparent bg-gradient-to-r from-[#fc466b] to-[#3f5efb]">
                    "Diabetes Predictor"
                </h1>
                {move || {
                    current_user.get().map(|user| view! {
                        <p class="mb-6 text-center font-semibold text-xl bg-clip-text text-transparent bg-gradient-to-r from-[#fc466b] to-[#3f5efb]">
                            "Welcome, " {user.username} "!"
                        </p>
                    })
                }}
                <form class="space-y-6" on:submit=on_submit>
                    <InputField
                        label="Pregnancies"
                        name="Pregnancies"
                        value=field_value("Pregnancies")
                        on_input=set_field("Pregnancies")
                        min=0.0
                        max=20.0
                        error=field_error("Pregnancies")
                    />
                    <InputField
                        label="Glucose"
                        name="Glucose"
                        value=field_value("Glucose")
                        on_input=set_field("Glucose")
                        min=0.0
                        max=300.0
                        error=field_error("Glucose")
                    />
                    <InputField
                        label="Blood Pressure"
                        name="BloodPressure"
                        value=field_value("BloodPressure")
                        on_input=set_field("BloodPressure")
                        min=0.0
                        max=200.0
                        error=field_error("BloodPressure")
                    />
                    <InputField
                        label="Skin Thickness"
                        name="SkinThickness"
                        value=field_value("SkinThickness")
                        on_input=set_field("SkinThickness")
                        min=0.0
                        max=100.0
                        error=field_error("SkinThickness")
                    />
                    <InputField
                        label="Insulin"
                        name="Insulin"
                        value=field_value("Insulin")
                        on_input=set_field("Insulin")
                        min=0.0
                        max=900.0
                        error=field_error("Insulin")
                    />
                    <InputField
                        label="BMI"
                        name="BMI"
                        value=field_value("BMI")
                        on_input=set_field("BMI")
                        min=10.0
                        max=60.0
                        step=0.1
                        error=field_error("BMI")
                    />
                    <InputField
                        label="Diabetes Pedigree Function"
                        name="DiabetesPedigreeFunction"
                        value=field_value("DiabetesPedigreeFunction")
                        on_input=set_field("DiabetesPedigreeFunction")
                        min=0.0
                        max=3.0
                        step=0.01
                        error=field_error("DiabetesPedigreeFunction")
                    />
                    <InputField
                        label="Age"
                        name="Age"
                        value=field_value("Age")
                        on_input=set_field("Age")
                        min=1.0
                        max=120.0
                        error=field_error("Age")
                    />

                    <div>
                        <label
                            for="model"
                            class="block text-sm font-medium text-gray-700 dark:text-gray-300"
                        >
                            "Choose Model"
                        </label>
                        <select
                            id="model"
                            name="model"
                            class="mt-1 block w-full pl-3 pr-10 py-2 text-base border-gray-300 focus:outline-none focus:ring-indigo-500 focus:border-indigo-500 sm:text-sm rounded-md dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                            prop:value=move || form.with(|f| f.model.clone())
                            on:change=move |ev| form.update(|f| f.model = event_target_value(&ev))
                        >
                            {move || {
                                available_models
                                    .get()
                                    .into_iter()
                                    .map(|model| {
                                        let label = if model == "best" {
                                            "Auto-select Best Model".to_string()
                                        } else {
                                            model.clone()
                                        };
                                        view! { <option value=model.clone()>{label}</option> }
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </div>

                    {move || {
                        errors
                            .with(|e| e.get("submit").cloned())
                            .map(|message| view! { <p class="text-red-500 text-sm">{message}</p> })
                    }}

                    <div>
                        <button
                            type="submit"
                            disabled=move || loading.get()
                            class="w-full flex justify-center py-2 px-4 border border-transparent rounded-md shadow-sm text-sm font-medium text-white bg-gradient-to-r from-[#fc466b] to-[#3f5efb] focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-indigo-500 disabled:opacity-50"
                        >
                            {move || {
                                if loading.get() {
                                    view! { <LoadingSpinner /> }.into_any()
                                } else {
                                    view! { "Predict" }.into_any()
                                }
                            }}
                        </button>
                    </div>
                </form>
            </div>

            // About panel
            <div class="mt-10 max-w-2xl mx-auto bg-gray-100 dark:bg-gray-900 p-6 rounded-xl text-center shadow-md">
                <h2 class="text-xl font-semibold text-gray-800 dark:text-gray-200 mb-2">
                    "About Diabetes Predictor"
                </h2>
                <p class="text-gray-600 dark:text-gray-400">
                    "Developed by TAN Team with state-of-the-art machine learning techniques."
                </p>
            </div>
        </div>
    }
}
