//! Reporting Endpoints
//!
//! Read-only data behind the history and visualization views. Each call is
//! independent; the visualizations page tolerates any subset failing.

use web_sys::AbortSignal;

use super::{get_json, ApiError};
use crate::models::{FeatureImportance, HistoryEntry, ModelMetrics, PredictionStats};

pub async fn predictions(signal: Option<&AbortSignal>) -> Result<Vec<HistoryEntry>, ApiError> {
    get_json("/predictions", signal).await
}

pub async fn model_metrics(signal: Option<&AbortSignal>) -> Result<ModelMetrics, ApiError> {
    get_json("/model_metrics", signal).await
}

pub async fn prediction_stats(signal: Option<&AbortSignal>) -> Result<PredictionStats, ApiError> {
    get_json("/prediction_stats", signal).await
}

pub async fn feature_importance(signal: Option<&AbortSignal>) -> Result<FeatureImportance, ApiError> {
    get_json("/feature_importance", signal).await
}
