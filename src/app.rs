//! Application Shell
//!
//! Provides the session store and theme context, then mounts the router
//! inside the top-level error boundary with the navbar and footer around
//! the route outlet.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::components::{AppErrorBoundary, Footer, Navbar};
use crate::pages::{
    About, Contact, Home, Login, NotFound, PredictHistory, Profile, Register, Resources,
    ResultPage, Visualizations,
};
use crate::store::AppState;
use crate::theme;

#[component]
pub fn App() -> impl IntoView {
    provide_context(Store::new(AppState::default()));
    theme::provide_theme();

    view! {
        <AppErrorBoundary>
            <Router>
                <div class="flex flex-col min-h-screen bg-white dark:bg-gray-900">
                    <Navbar />
                    <main class="flex-grow container mx-auto px-4 py-8">
                        <Routes fallback=|| view! { <NotFound /> }>
                            <Route path=path!("/") view=Home />
                            <Route path=path!("/home") view=Home />
                            <Route path=path!("/about") view=About />
                            <Route path=path!("/login") view=Login />
                            <Route path=path!("/register") view=Register />
                            <Route path=path!("/result") view=ResultPage />
                            <Route path=path!("/profile") view=Profile />
                            <Route path=path!("/predict-history") view=PredictHistory />
                            <Route path=path!("/visualizations") view=Visualizations />
                            <Route path=path!("/contact") view=Contact />
                            <Route path=path!("/resources") view=Resources />
                        </Routes>
                    </main>
                    <Footer />
                </div>
            </Router>
        </AppErrorBoundary>
    }
}
