//! Prediction Endpoints

use gloo_net::http::Request;
use web_sys::FormData;

use super::{error_for, post, ApiError};
use crate::config;
use crate::models::{PredictionForm, PredictionOutcome, INPUT_FIELDS};

/// Available model names. The list always starts with the `best`
/// auto-select pseudo-model.
pub async fn models() -> Result<Vec<String>, ApiError> {
    let resp = Request::get(&config::api_url("/models")).send().await?;
    if resp.ok() {
        resp.json().await.map_err(ApiError::from)
    } else {
        Err(error_for(resp).await)
    }
}

/// Submit the clinical inputs as multipart form data. The session cookie
/// must travel; the server stores the prediction under the current user.
pub async fn predict(form: &PredictionForm) -> Result<PredictionOutcome, ApiError> {
    let data = form_data(form)?;
    let resp = post("/predict").body(data)?.send().await?;
    if resp.ok() {
        resp.json().await.map_err(ApiError::from)
    } else {
        Err(error_for(resp).await)
    }
}

fn form_data(form: &PredictionForm) -> Result<FormData, ApiError> {
    let assemble = || -> Result<FormData, wasm_bindgen::JsValue> {
        let data = FormData::new()?;
        for name in INPUT_FIELDS {
            data.append_with_str(name, form.field(name))?;
        }
        data.append_with_str("model", &form.model)?;
        Ok(data)
    };
    assemble().map_err(|_| ApiError::Network("could not assemble form data".to_string()))
}
