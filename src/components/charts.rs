//! Plotly Glue
//!
//! Chart descriptions are built with the `plotly` crate and handed to the
//! plotly.js bundle loaded in index.html.

use plotly::Plot;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot)]
    fn new_plot(root: &JsValue, data: &JsValue, layout: &JsValue, config: &JsValue);

    #[wasm_bindgen(js_namespace = Plotly, js_name = downloadImage)]
    fn download_image(root: &JsValue, opts: &JsValue);
}

/// Render a plot into the target element, replacing any previous chart.
pub fn render(target: &web_sys::HtmlElement, plot: &Plot) {
    let json = plot.to_json();
    match js_sys::JSON::parse(&json) {
        Ok(value) => {
            let data = js_sys::Reflect::get(&value, &"data".into()).unwrap_or(JsValue::UNDEFINED);
            let layout =
                js_sys::Reflect::get(&value, &"layout".into()).unwrap_or(JsValue::UNDEFINED);
            let config =
                js_sys::Reflect::get(&value, &"config".into()).unwrap_or(JsValue::UNDEFINED);
            let root: &JsValue = target.as_ref();
            new_plot(root, &data, &layout, &config);
        }
        Err(_) => leptos::logging::error!("failed to serialize chart description"),
    }
}

/// Export the chart currently rendered in the target element as a PNG.
pub fn download(target: &web_sys::HtmlElement, filename: &str) {
    let opts = serde_json::json!({ "format": "png", "filename": filename });
    if let Ok(opts) = serde_wasm_bindgen::to_value(&opts) {
        let root: &JsValue = target.as_ref();
        download_image(root, &opts);
    }
}
