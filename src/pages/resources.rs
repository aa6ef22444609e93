//! Resources Page
//!
//! Curated links with a debounced search filter over titles and
//! descriptions.

use leptos::prelude::*;

use crate::components::SearchBar;

const RESOURCES: &[(&str, &str, &str)] = &[
    (
        "Diabetes Overview",
        "Learn about diabetes, its types, symptoms, and treatments.",
        "https://www.diabetes.org/diabetes",
    ),
    (
        "Healthy Eating",
        "Find tips and recipes for a healthy diet to manage diabetes.",
        "https://www.diabetes.org/nutrition",
    ),
    (
        "Exercise and Fitness",
        "Discover exercises and fitness routines to help manage diabetes.",
        "https://www.diabetes.org/fitness",
    ),
    (
        "Diabetes Research",
        "Stay updated with the latest research and advancements in diabetes care.",
        "https://www.diabetes.org/research",
    ),
    (
        "Support Groups",
        "Join support groups and connect with others managing diabetes.",
        "https://www.diabetes.org/community",
    ),
];

/// Case-insensitive match on title or description; empty query keeps all.
fn filter_resources(
    items: &'static [(&'static str, &'static str, &'static str)],
    query: &str,
) -> Vec<&'static (&'static str, &'static str, &'static str)> {
    let query = query.to_lowercase();
    items
        .iter()
        .filter(|(title, description, _)| {
            query.is_empty()
                || title.to_lowercase().contains(&query)
                || description.to_lowercase().contains(&query)
        })
        .collect()
}

#[component]
fn ResourceItem(title: &'static str, description: &'static str, link: &'static str) -> impl IntoView {
    view! {
        <div class="bg-gray-100 dark:bg-gray-700 p-6 rounded-lg shadow-lg border border-gray-200 dark:border-gray-600 hover:shadow-2xl transition-shadow duration-300">
            <h2 class="text-2xl font-bold mb-2 text-gray-800 dark:text-gray-100">{title}</h2>
            <p class="text-gray-700 dark:text-gray-300 mb-4">{description}</p>
            <a
                href=link
                target="_blank"
                rel="noopener noreferrer"
                class="text-blue-600 dark:text-blue-400 hover:underline font-medium"
            >
                "Learn More"
            </a>
        </div>
    }
}

#[component]
pub fn Resources() -> impl IntoView {
    let (query, set_query) = signal(String::new());
    let on_search = Callback::new(move |value: String| set_query.set(value));

    view! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900 flex flex-col justify-center py-10">
            <div class="max-w-4xl mx-auto bg-white dark:bg-gray-800 p-10 rounded-xl shadow-2xl border border-gray-200 dark:border-gray-700">
                <h1 class="text-5xl font-extrabold text-center mb-8 bg-clip-text text-transparent bg-gradient-to-r from-pink-500 to-blue-500">
                    "Resources"
                </h1>
                <div class="mb-6">
                    <SearchBar placeholder="Search resources..." on_search=on_search />
                </div>
                <div class="space-y-6">
                    {move || {
                        query.with(|q| {
                            filter_resources(RESOURCES, q)
                                .into_iter()
                                .map(|(title, description, link)| view! {
                                    <ResourceItem title=*title description=*description link=*link />
                                })
                                .collect_view()
                        })
                    }}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_keeps_all() {
        assert_eq!(filter_resources(RESOURCES, "").len(), RESOURCES.len());
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let hits = filter_resources(RESOURCES, "EATING");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0, "Healthy Eating");
    }

    #[test]
    fn test_filter_matches_descriptions() {
        let hits = filter_resources(RESOURCES, "support groups");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0, "Support Groups");
    }

    #[test]
    fn test_filter_misses_return_empty() {
        assert!(filter_resources(RESOURCES, "cardiology").is_empty());
    }
}
