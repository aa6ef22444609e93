//! Visualizations Page
//!
//! Four independently fetched charts plus a client-synthetic live trend.
//! Each data source fails on its own; partial rendering is expected.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use plotly::color::Rgba;
use plotly::common::{Fill, Marker, Mode};
use plotly::{Bar, Layout, Pie, Plot, Scatter, ScatterPolar};

use crate::api;
use crate::components::charts;
use crate::models::{FeatureImportance, ModelMetrics, PredictionStats};
use crate::viz;

#[component]
pub fn Visualizations() -> impl IntoView {
    let navigate = use_navigate();

    let metrics = RwSignal::new(ModelMetrics::new());
    let stats = RwSignal::new(PredictionStats::default());
    let predictions = RwSignal::new(Vec::<crate::models::HistoryEntry>::new());
    let importance = RwSignal::new(FeatureImportance::new());

    let trend_labels = RwSignal::new(Vec::<String>::new());
    let trend_values = RwSignal::new(Vec::<u8>::new());

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

            {
                let signal = signal.clone();
                spawn_local(async move {
                    match api::model_metrics(signal.as_ref()).await {
                        Ok(data) => metrics.set(data),
                        Err(err) => leptos::logging::error!("error fetching model metrics: {err}"),
                    }
                });
            }
            {
                let signal = signal.clone();
                let navigate = navigate.clone();
                spawn_local(async move {
                    match api::prediction_stats(signal.as_ref()).await {
                        Ok(data) => stats.set(data),
                        Err(err) if err.is_unauthorized() => {
                            navigate("/login", Default::default());
                        }
                        Err(err) => {
                            leptos::logging::error!("error fetching prediction stats: {err}")
                        }
                    }
                });
            }
            {
                let signal = signal.clone();
                spawn_local(async move {
                    match api::predictions(signal.as_ref()).await {
                        Ok(data) => predictions.set(data),
                        Err(err) => {
                            leptos::logging::error!("error fetching predictions: {err}");
                            predictions.set(Vec::new());
                        }
                    }
                });
            }
            spawn_local(async move {
                match api::feature_importance(signal.as_ref()).await {
                    Ok(data) => importance.set(data),
                    Err(err) => {
                        leptos::logging::error!("error fetching feature importance: {err}")
                    }
                }
            });
        });
    }

    // Live trend: simulated feed, one random binary point per second over a
    // sliding 20-point window. Dropping the handle stops the timer.
    let trend_timer = StoredValue::new_local(None::<Interval>);
    trend_timer.set_value(Some(Interval::new(1_000, move || {
        let label: String = js_sys::Date::new_0().to_locale_time_string("en-GB").into();
        let value = if js_sys::Math::random() < 0.5 { 0u8 } else { 1u8 };
        trend_labels.update(|window| viz::push_trend(window, label));
        trend_values.update(|window| viz::push_trend(window, value));
    })));
    on_cleanup(move || trend_timer.update_value(|timer| drop(timer.take())));

    let bar_ref = NodeRef::<leptos::html::Div>::new();
    let pie_ref = NodeRef::<leptos::html::Div>::new();
    let line_ref = NodeRef::<leptos::html::Div>::new();
    let radar_ref = NodeRef::<leptos::html::Div>::new();
    let trend_ref = NodeRef::<leptos::html::Div>::new();

    // Per-model accuracy bar chart.
    Effect::new(move |_| {
        let Some(div) = bar_ref.get() else { return };
        let metrics = metrics.get();
        let labels: Vec<String> = metrics.keys().cloned().collect();
        let values: Vec<f64> = metrics.values().map(|m| m.accuracy).collect();
        let mut plot = Plot::new();
        plot.add_trace(
            Bar::new(labels, values)
                .name("Accuracy")
                .marker(Marker::new().color(Rgba::new(75, 192, 192, 1.0))),
        );
        plot.set_layout(Layout::new().auto_size(true));
        charts::render(&div, &plot);
    });

    // Diabetic vs non-diabetic pie.
    Effect::new(move |_| {
        let Some(div) = pie_ref.get() else { return };
        let stats = stats.get();
        let mut plot = Plot::new();
        plot.add_trace(
            Pie::new(vec![stats.diabetic_predictions, stats.non_diabetic_predictions])
                .labels(vec!["Diabetic".to_string(), "Non-Diabetic".to_string()]),
        );
        plot.set_layout(Layout::new().auto_size(true));
        charts::render(&div, &plot);
    });

    // Predictions over time, Diabetic mapped to 1.
    Effect::new(move |_| {
        let Some(div) = line_ref.get() else { return };
        let (labels, values) = predictions.with(|entries| viz::outcome_series(entries));
        let mut plot = Plot::new();
        plot.add_trace(
            Scatter::new(labels, values)
                .mode(Mode::LinesMarkers)
                .name("Predictions Over Time")
                .marker(Marker::new().color(Rgba::new(75, 192, 192, 1.0))),
        );
        plot.set_layout(Layout::new().auto_size(true));
        charts::render(&div, &plot);
    });

    // One radar trace per model over its feature-importance vector.
    Effect::new(move |_| {
        let Some(div) = radar_ref.get() else { return };
        let importance = importance.get();
        let mut plot = Plot::new();
        for (model, vector) in importance.iter() {
            let theta: Vec<String> = (1..=vector.len()).map(|i| format!("Feature {i}")).collect();
            plot.add_trace(
                ScatterPolar::new(theta, vector.clone())
                    .name(model)
                    .fill(Fill::ToSelf),
            );
        }
        plot.set_layout(Layout::new().auto_size(true));
        charts::render(&div, &plot);
    });

    // Live trend line; placeholder series until the first tick lands.
    Effect::new(move |_| {
        let Some(div) = trend_ref.get() else { return };
        let labels = trend_labels.get();
        let values = trend_values.get();
        let (labels, values) = if labels.is_empty() {
            (vec![String::new(); 5], vec![1u8, 0, 1, 0, 1])
        } else {
            (labels, values)
        };
        let mut plot = Plot::new();
        plot.add_trace(
            Scatter::new(labels, values)
                .mode(Mode::LinesMarkers)
                .name("Diabetic (1) vs Not Diabetic (0)")
                .marker(Marker::new().color(Rgba::new(75, 192, 192, 1.0))),
        );
        plot.set_layout(Layout::new().auto_size(true));
        charts::render(&div, &plot);
    });

    let section_heading =
        "text-xl font-semibold mb-4 bg-clip-text text-transparent bg-gradient-to-r from-[#fc466b] to-[#3f5efb]";

    view! {
        <div class="container mx-auto px-4 py-8">
            <h1 class="text-4xl md:text-5xl font-extrabold text-center mb-6 bg-clip-text text-transparent bg-gradient-to-r from-[#fc466b] to-[#3f5efb]">
                "Visualizations"
            </h1>
            <div class="mb-8">
                <h2 class=section_heading>"Model Accuracy"</h2>
                <div class="chart-container" node_ref=bar_ref></div>
            </div>
            <div class="mb-8">
                <h2 class=section_heading>"Prediction Statistics"</h2>
                <div class="chart-container" node_ref=pie_ref></div>
            </div>
            <div class="mb-8">
                <h2 class=section_heading>"Predictions Over Time"</h2>
                <div class="chart-container" node_ref=line_ref></div>
            </div>
            <div class="mb-8">
                <h2 class=section_heading>"Feature Importance"</h2>
                <div class="chart-container" node_ref=radar_ref></div>
            </div>

            <div class="mt-8">
                <div class="chart-container bg-white dark:bg-gray-800 p-4 rounded shadow">
                    <h2 class=section_heading>"Prediction Trend Chart"</h2>
                    <p class="text-sm text-gray-600 mb-2">
                        "Last updated: "
                        {move || trend_labels.with(|l| l.last().cloned().unwrap_or_default())}
                    </p>
                    <div node_ref=trend_ref></div>
                </div>
            </div>
        </div>
    }
}
