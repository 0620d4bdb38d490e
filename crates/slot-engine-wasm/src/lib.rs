//! WASM bindings for slot-engine.
//!
//! Exposes the four scheduling operations to JavaScript via `wasm-bindgen`.
//! Requests and responses cross the boundary as JSON strings with the same
//! field names as the HTTP endpoints, so a Node handler can forward
//! `req.body` unchanged. Rejected requests throw a JSON string of the form
//! `{"message": "..."}`.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/slot_engine_wasm.wasm
//! ```

use serde::Serialize;
use slot_engine::api::{self, ErrorResponse};
use slot_engine::{SlotConfig, SlotError};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Turn an engine error into the JSON error body thrown to JavaScript.
fn rejection(err: SlotError) -> JsValue {
    let body = serde_json::to_string(&ErrorResponse::from(&err)).unwrap_or_else(|_| err.to_string());
    JsValue::from_str(&body)
}

fn to_json<T: Serialize>(response: &T) -> Result<String, JsValue> {
    serde_json::to_string(response)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Parse the request body and run `op` on it with the default configuration.
fn handle<T>(
    body_json: &str,
    op: impl FnOnce(&serde_json::Value, &SlotConfig) -> slot_engine::error::Result<T>,
) -> Result<T, JsValue> {
    let body = api::parse_body(body_json).map_err(rejection)?;
    op(&body, &SlotConfig::default()).map_err(rejection)
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Compute free slots from `{"value": [...], "startHour": n, "endHour": n}`.
///
/// Returns `{"free_slots": [...]}`, or `{"free_slots": "0"}` for a fully booked day.
#[wasm_bindgen(js_name = "computeFreeSlots")]
pub fn compute_free_slots(body_json: &str) -> Result<String, JsValue> {
    let response = handle(body_json, api::compute_free_slots)?;
    to_json(&response)
}

/// Keep the first three of `{"free_slots": [...]}` as `{"suggested_slots": [...]}`.
#[wasm_bindgen(js_name = "suggestSlots")]
pub fn suggest_slots(body_json: &str) -> Result<String, JsValue> {
    let response = handle(body_json, api::suggest_slots)?;
    to_json(&response)
}

/// Work window (08:00Z-16:00Z) of the business day after `requested_datetime`.
#[wasm_bindgen(js_name = "advanceToNextBusinessDay")]
pub fn advance_to_next_business_day(body_json: &str) -> Result<String, JsValue> {
    let response = handle(body_json, api::advance_to_next_business_day)?;
    to_json(&response)
}

/// French sentence describing `{"suggested_slots": [...]}`. Returns plain text.
#[wasm_bindgen(js_name = "formatAnswer")]
pub fn format_answer(body_json: &str) -> Result<String, JsValue> {
    handle(body_json, api::format_answer)
}

/// Free slots, suggestions and sentence from a free-slot request, or `"0"`.
#[wasm_bindgen(js_name = "planAnswer")]
pub fn plan_answer(body_json: &str) -> Result<String, JsValue> {
    handle(body_json, api::plan)
}
