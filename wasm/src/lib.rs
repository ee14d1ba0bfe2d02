//! Fitness Tracker WASM Module
//!
//! This crate provides WebAssembly bindings for the report functions so the
//! same calculations can run in the browser.

use fitness_tracker_shared::{self as shared, TrainingSummary, UserProfile};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Daily step report; empty string when nothing can be reported
#[wasm_bindgen]
pub fn daily_step_report(data: &str, weight_kg: f64, height_cm: f64) -> String {
    shared::daily_step_report(data, weight_kg, height_cm)
}

/// Training report; the error message is thrown as a JS string
#[wasm_bindgen]
pub fn training_report(data: &str, weight_kg: f64, height_cm: f64) -> Result<String, JsValue> {
    shared::training_report(data, weight_kg, height_cm).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[derive(Serialize)]
struct TrainingResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<TrainingSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Training summary as JSON: `{"summary": {...}}` or `{"error": "..."}`
#[wasm_bindgen]
pub fn training_summary_json(data: &str, weight_kg: f64, height_cm: f64) -> String {
    let response = match shared::summarize_training(data, &UserProfile::new(weight_kg, height_cm)) {
        Ok(summary) => TrainingResponse {
            summary: Some(summary),
            error: None,
        },
        Err(e) => TrainingResponse {
            summary: None,
            error: Some(e.to_string()),
        },
    };

    serde_json::to_string(&response).unwrap_or_default()
}
