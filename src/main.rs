#![allow(warnings)]
//! Diabetes Predictor Frontend Entry Point

mod api;
mod app;
mod components;
mod confidence;
mod config;
mod models;
mod pages;
mod storage;
mod store;
mod theme;
mod viz;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    register_service_worker();
    mount_to_body(App);
}

/// Register the offline cache worker when the browser supports it.
/// `static/sw.js` is copied to the bundle root by Trunk (see index.html).
fn register_service_worker() {
    if let Some(window) = web_sys::window() {
        let _ = window.navigator().service_worker().register("/sw.js");
    }
}
