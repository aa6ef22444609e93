//! Result Page
//!
//! Renders the outcome carried in navigation state by the home page. A
//! direct visit (bookmark, refresh) has no state and gets an empty-state
//! card instead of a crash.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};
use plotly::color::Rgba;
use plotly::common::{Marker, Title};
use plotly::layout::Axis;
use plotly::{Bar, Layout, Plot};

use crate::components::charts;
use crate::confidence;
use crate::models::PredictionOutcome;
use crate::storage;

#[component]
pub fn ResultPage() -> impl IntoView {
    let navigate = use_navigate();
    let location = use_location();

    // Legacy guard carried from older clients: no login flag, no result.
    Effect::new({
        let navigate = navigate.clone();
        move |_| {
            if storage::get(storage::IS_LOGGED_IN_KEY).is_none() {
                navigate("/login", Default::default());
            }
        }
    });

    let outcome = Memo::new(move |_| {
        let state = location.state.get();
        serde_wasm_bindgen::from_value::<PredictionOutcome>(state.to_js_value()).ok()
    });

    let chart_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move |_| {
        let Some(div) = chart_ref.get() else {
            return;
        };
        let Some(outcome) = outcome.get() else {
            return;
        };
        let p = outcome.probability;
        let mut plot = Plot::new();
        plot.add_trace(
            Bar::new(
                vec!["Not Diabetic".to_string(), "Diabetic".to_string()],
                vec![1.0 - p, p],
            )
            .name("Probability")
            .marker(Marker::new().color_array(vec![
                Rgba::new(75, 192, 192, 0.8),
                Rgba::new(255, 99, 132, 0.8),
            ])),
        );
        plot.set_layout(
            Layout::new()
                .title(Title::from("Diabetes Prediction Probability"))
                .y_axis(Axis::new().range(vec![0.0, 1.0])),
        );
        charts::render(&div, &plot);
    });

    let download = move |_| {
        if let Some(div) = chart_ref.get() {
            charts::download(&div, "prediction_chart");
        }
    };

    let back_home = {
        let navigate = navigate.clone();
        move |_| navigate("/", Default::default())
    };

    view! {
        <div class="max-w-2xl mx-auto p-4">
            <h1 class="text-3xl font-bold text-center mb-2 text-gray-900 dark:text-white">
                "Prediction Result"
            </h1>
            <p class="text-center text-sm text-gray-600 mb-4">
                "Your health analysis is provided below"
            </p>
            {move || match outcome.get() {
                Some(outcome) => {
                    let percent = format!("{:.2}%", outcome.probability * 100.0);
                    let color = confidence::color(outcome.probability);
                    view! {
                        <div class="bg-white dark:bg-gray-800 shadow rounded-lg p-6">
                            <p class="text-lg mb-4 dark:text-white">
                                "Based on your input, the model predicts you are: "
                                <span class="font-bold text-xl text-indigo-600">{outcome.result}</span>
                            </p>
                            <p class="text-lg mb-4 dark:text-white">
                                "The confidence of this prediction is: "
                                <span class=format!("font-bold text-xl {color}")>{percent}</span>
                            </p>
                            <p class="text-lg mb-8 dark:text-white">
                                "Model used: "
                                <span class="font-bold text-xl text-indigo-600">{outcome.model_used}</span>
                            </p>
                            <div class="mb-4" node_ref=chart_ref></div>
                            <div class="flex justify-center space-x-4">
                                <button
                                    class="flex items-center space-x-2 px-4 py-2 bg-indigo-600 text-white rounded hover:bg-indigo-700 transition"
                                    on:click=back_home.clone()
                                >
                                    <span>"Back Home"</span>
                                </button>
                                <button
                                    class="flex items-center space-x-2 px-4 py-2 bg-green-600 text-white rounded hover:bg-green-700 transition"
                                    on:click=download
                                >
                                    <span>"Download Graph"</span>
                                </button>
                            </div>
                        </div>
                    }
                    .into_any()
                }
                None => view! {
                    <div class="bg-white dark:bg-gray-800 shadow rounded-lg p-6 text-center">
                        <p class="text-lg mb-4 dark:text-white">
                            "No prediction to display. Submit the form to see your result."
                        </p>
                        <A
                            href="/"
                            attr:class="inline-block px-4 py-2 bg-indigo-600 text-white rounded hover:bg-indigo-700 transition"
                        >
                            "Back Home"
                        </A>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
