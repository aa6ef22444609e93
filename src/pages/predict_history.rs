//! Prediction History Page
//!
//! Past predictions for the logged-in user, one expandable row at a time.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::confidence;
use crate::models::HistoryEntry;
use crate::viz;

/// One row expanded at a time: clicking another row swaps, clicking the
/// expanded row collapses.
fn toggle_expanded(current: Option<String>, clicked: &str) -> Option<String> {
    match current {
        Some(ref ts) if ts == clicked => None,
        _ => Some(clicked.to_string()),
    }
}

#[component]
pub fn PredictHistory() -> impl IntoView {
    let (predictions, set_predictions) = signal(Vec::<HistoryEntry>::new());
    let expanded = RwSignal::new(None::<String>);

    let abort = StoredValue::new_local(None::<web_sys::AbortController>);
    on_cleanup(move || {
        abort.update_value(|slot| {
            if let Some(controller) = slot.take() {
                controller.abort();
            }
        })
    });

    Effect::new(move |_| {
        let controller = web_sys::AbortController::new().ok();
        let signal = controller.as_ref().map(|c| c.signal());
        abort.update_value(|slot| *slot = controller);
        spawn_local(async move {
            match api::predictions(signal.as_ref()).await {
                Ok(entries) => set_predictions.set(entries),
                Err(err) => leptos::logging::error!("error fetching predictions: {err}"),
            }
        });
    });

    view! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900 py-8">
            <div class="container mx-auto px-4">
                <h1 class="text-3xl font-bold text-center mb-6 bg-clip-text text-transparent bg-gradient-to-r from-pink-500 to-blue-500">
                    "Prediction History"
                </h1>
                <div class="overflow-x-auto">
                    <table class="min-w-full bg-white dark:bg-gray-800 rounded-lg shadow-md">
                        <thead>
                            <tr>
                                <th class="px-4 py-2 border-b dark:border-gray-600 dark:text-white">"Date"</th>
                                <th class="px-4 py-2 border-b dark:border-gray-600 dark:text-white">"Prediction"</th>
                                <th class="px-4 py-2 border-b dark:border-gray-600 dark:text-white">"Model Used"</th>
                                <th class="px-4 py-2 border-b dark:border-gray-600 dark:text-white">"Confidence"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || predictions.get()
                                key=|entry| entry.timestamp.clone()
                                children=move |entry| {
                                    let timestamp = entry.timestamp.clone();
                                    let row_key = timestamp.clone();
                                    let is_expanded =
                                        Memo::new(move |_| expanded.get().as_deref() == Some(row_key.as_str()));
                                    let inputs = entry.inputs.clone();
                                    view! {
                                        <tr
                                            class="cursor-pointer hover:bg-gray-100 dark:hover:bg-gray-700 text-center dark:text-white"
                                            on:click=move |_| {
                                                expanded.update(|current| {
                                                    *current = toggle_expanded(current.take(), &timestamp);
                                                })
                                            }
                                        >
                                            <td class="px-4 py-2 border-b dark:border-gray-600">
                                                {viz::format_day_time(&entry.timestamp)}
                                            </td>
                                            <td class="px-4 py-2 border-b dark:border-gray-600">
                                                {entry.prediction.clone()}
                                            </td>
                                            <td class="px-4 py-2 border-b dark:border-gray-600">
                                                {entry.model.clone()}
                                            </td>
                                            <td class="px-4 py-2 border-b dark:border-gray-600">
                                                {match entry.probability {
                                                    Some(p) => view! {
                                                        <span class=confidence::color(p)>
                                                            {format!("{:.2}%", p * 100.0)}
                                                        </span>
                                                    }
                                                    .into_any(),
                                                    None => view! { "N/A" }.into_any(),
                                                }}
                                            </td>
                                        </tr>
                                        {move || {
                                            is_expanded.get().then(|| {
                                                let inputs = inputs.clone();
                                                view! {
                                                    <tr>
                                                        <td colspan="4" class="px-6 py-4">
                                                            <div class="bg-gray-50 dark:bg-gray-700 p-4 rounded-lg shadow-md">
                                                                <h2 class="text-xl font-bold mb-4 dark:text-white">
                                                                    "Prediction Details"
                                                                </h2>
                                                                <ul class="list-disc list-inside">
                                                                    {inputs
                                                                        .into_iter()
                                                                        .map(|(key, value)| view! {
                                                                            <li class="text-gray-700 dark:text-gray-300">
                                                                                <strong>{key}</strong> ": " {value}
                                                                            </li>
                                                                        })
                                                                        .collect_view()}
                                                                </ul>
                                                            </div>
                                                        </td>
                                                    </tr>
                                                }
                                            })
                                        }}
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_expands_new_row() {
        assert_eq!(toggle_expanded(None, "a"), Some("a".to_string()));
    }

    #[test]
    fn test_toggle_swaps_rows() {
        assert_eq!(
            toggle_expanded(Some("a".to_string()), "b"),
            Some("b".to_string())
        );
    }

    #[test]
    fn test_toggle_collapses_same_row() {
        assert_eq!(toggle_expanded(Some("a".to_string()), "a"), None);
    }
}
