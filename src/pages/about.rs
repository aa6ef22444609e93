//! About Page

use leptos::prelude::*;

struct Developer {
    name: &'static str,
    role: &'static str,
    image: &'static str,
    github: &'static str,
    linkedin: &'static str,
    // Card background assigned per member.
    background: &'static str,
}

const TEAM: &[Developer] = &[
    Developer {
        name: "Tajeddine Bourhim",
        role: "Data Scientist & AI Student",
        image: "/images/dev1.jpg",
        github: "https://github.com/scorpionTaj",
        linkedin: "https://www.linkedin.com/in/tajeddine-bourhim",
        background: "bg-blue-500",
    },
    Developer {
        name: "Anass Zbir",
        role: "Data Scientist & AI Student",
        image: "/images/dev2.jpg",
        github: "https://github.com/ana3ss7z",
        linkedin: "https://www.linkedin.com/in/anass-zbir-2b17a526b",
        background: "bg-green-500",
    },
    Developer {
        name: "Nawfal Khallou",
        role: "Data Scientist & AI Student",
        image: "/images/dev3.jpg",
        github: "https://github.com/nawfal-khallou",
        linkedin: "https://www.linkedin.com/in/nawfal-khallou",
        background: "bg-red-500",
    },
];

const TECH_STACK: &[(&str, &str)] = &[
    ("Leptos", "A Rust framework for building reactive web interfaces."),
    ("Tailwind CSS", "A utility-first CSS framework for styling."),
    ("Plotly", "For charts and interactive visualizations."),
    ("Flask", "A lightweight WSGI web application framework in Python."),
    ("Flask-Login", "For user session management."),
    ("SQLAlchemy", "An SQL toolkit and Object-Relational Mapping (ORM) library for Python."),
    ("SQLite", "A C library that provides a lightweight disk-based database."),
];

const ML_MODELS: &[(&str, &str)] = &[
    (
        "Logistic Regression",
        "A statistical model that in its basic form uses a logistic function to model a binary dependent variable.",
    ),
    (
        "Support Vector Classifier (SVC)",
        "A supervised learning model used for classification and regression analysis.",
    ),
    (
        "Decision Tree",
        "A decision support tool that uses a tree-like model of decisions and their possible consequences.",
    ),
    (
        "K-Nearest Neighbors (KNN)",
        "A non-parametric method used for classification and regression.",
    ),
    (
        "Random Forest",
        "An ensemble learning method for classification, regression, and other tasks.",
    ),
    (
        "Gradient Boosting",
        "A machine learning technique for regression and classification problems.",
    ),
    (
        "XGBoost",
        "An optimized distributed gradient boosting library designed to be highly efficient, flexible, and portable.",
    ),
];

fn detail_list(items: &'static [(&'static str, &'static str)]) -> impl IntoView {
    view! {
        <ul class="list-disc list-inside mb-4">
            {items
                .iter()
                .map(|(name, description)| view! {
                    <li><strong>{*name}</strong> ": " {*description}</li>
                })
                .collect_view()}
        </ul>
    }
}

#[component]
fn DeveloperCard(dev: &'static Developer) -> impl IntoView {
    view! {
        <div class=format!(
            "{} shadow-lg rounded-lg overflow-hidden transform transition duration-300 hover:scale-105",
            dev.background,
        )>
            <img src=dev.image alt=dev.name class="w-full h-48 object-cover" />
            <div class="p-4">
                <h3 class="font-bold text-xl mb-2 text-white">{dev.name}</h3>
                <p class="text-gray-100 text-sm mb-4">{dev.role}</p>
                <div class="flex justify-center space-x-4">
                    <a
                        href=dev.github
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-gray-200 hover:text-gray-300"
                    >
                        "GitHub"
                    </a>
                    <a
                        href=dev.linkedin
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-gray-200 hover:text-gray-300"
                    >
                        "LinkedIn"
                    </a>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <div class="max-w-4xl mx-auto">
            <h2 class="text-4xl md:text-5xl font-extrabold text-center mb-6 bg-clip-text text-transparent bg-gradient-to-r from-[#fc466b] to-[#3f5efb]">
                "About the Diabetes Predictor"
            </h2>
            <p class="mb-8 text-gray-700 dark:text-gray-300 text-center">
                "This application was developed by " <strong>"TAN Team"</strong>
                " as a proof of concept for predicting diabetes risk using state-of-the-art machine learning techniques."
            </p>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                {TEAM
                    .iter()
                    .map(|dev| view! { <DeveloperCard dev=dev /> })
                    .collect_view()}
            </div>
            <div class="mt-12 bg-white dark:bg-gray-800 shadow overflow-hidden sm:rounded-lg">
                <div class="px-4 py-5 sm:px-6">
                    <h3 class="text-lg leading-6 font-medium text-gray-900 dark:text-gray-100">
                        "Project Details"
                    </h3>
                </div>
                <div class="border-t border-gray-200 dark:border-gray-700">
                    <dl>
                        <div class="bg-gray-50 dark:bg-gray-700 px-4 py-5 sm:grid sm:grid-cols-3 sm:gap-4 sm:px-6">
                            <dt class="text-sm font-medium text-gray-500 dark:text-gray-300">
                                "Technology Stack"
                            </dt>
                            <dd class="mt-1 text-sm text-gray-900 dark:text-gray-100 sm:mt-0 sm:col-span-2">
                                {detail_list(TECH_STACK)}
                            </dd>
                        </div>
                        <div class="bg-white dark:bg-gray-800 px-4 py-5 sm:grid sm:grid-cols-3 sm:gap-4 sm:px-6">
                            <dt class="text-sm font-medium text-gray-500 dark:text-gray-300">
                                "Machine Learning Models"
                            </dt>
                            <dd class="mt-1 text-sm text-gray-900 dark:text-gray-100 sm:mt-0 sm:col-span-2">
                                {detail_list(ML_MODELS)}
                            </dd>
                        </div>
                        <div class="bg-gray-50 dark:bg-gray-700 px-4 py-5 sm:grid sm:grid-cols-3 sm:gap-4 sm:px-6">
                            <dt class="text-sm font-medium text-gray-500 dark:text-gray-300">
                                "Dataset"
                            </dt>
                            <dd class="mt-1 text-sm text-gray-900 dark:text-gray-100 sm:mt-0 sm:col-span-2">
                                "Pima Indians Diabetes Database"
                            </dd>
                        </div>
                    </dl>
                </div>
            </div>
        </div>
    }
}
