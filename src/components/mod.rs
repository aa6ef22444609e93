//! UI Components
//!
//! Reusable Leptos components and the Plotly glue module.

pub mod charts;

mod error_boundary;
mod footer;
mod input_field;
mod loading_spinner;
mod navbar;
mod search_bar;
mod theme_switcher;

pub use error_boundary::AppErrorBoundary;
pub use footer::Footer;
pub use input_field::InputField;
pub use loading_spinner::LoadingSpinner;
pub use navbar::Navbar;
pub use search_bar::SearchBar;
pub use theme_switcher::ThemeSwitcher;
