//! WASM bindings for epoch-engine.
//!
//! Exposes the interval set algebra to JavaScript via `wasm-bindgen`. Sets
//! cross the boundary as JSON strings of the form
//! `{"intervals": [[start, stop], ...], "domain": [[start, stop], ...] | null}`,
//! with `null` standing for an unbounded side of an interval.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p epoch-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/epoch-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/epoch_engine_wasm.wasm
//! ```

use epoch_engine::{Direction, Domain, Interval, IntervalSet};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct SummaryDto {
    count: usize,
    /// `null` when the set reaches an unbounded end.
    total_duration: f64,
    bounds: Option<Interval>,
    domain: Domain,
}

impl From<&IntervalSet> for SummaryDto {
    fn from(set: &IntervalSet) -> Self {
        Self {
            count: set.count(),
            total_duration: set.total_duration(),
            bounds: set.bounds(),
            domain: set.domain().clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers: JSON <-> IntervalSet, errors -> JsValue
// ---------------------------------------------------------------------------

fn parse_set(json: &str) -> Result<IntervalSet, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid interval set JSON: {}", e)))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Fuse intervals separated by at most `gap` seconds.
#[wasm_bindgen]
pub fn merge(set_json: &str, gap: f64) -> Result<String, JsValue> {
    to_json(&parse_set(set_json)?.merge(gap))
}

/// Every time in either set. Fails when the sets carry different bounded domains.
#[wasm_bindgen]
pub fn union(a_json: &str, b_json: &str) -> Result<String, JsValue> {
    let a = parse_set(a_json)?;
    let b = parse_set(b_json)?;
    let result = a.union(&b).map_err(|e| JsValue::from_str(&e.to_string()))?;
    to_json(&result)
}

/// Every time in both sets; keeps the first set's domain.
#[wasm_bindgen]
pub fn intersect(a_json: &str, b_json: &str) -> Result<String, JsValue> {
    to_json(&parse_set(a_json)?.intersect(&parse_set(b_json)?))
}

/// Every time in the first set but not the second.
#[wasm_bindgen]
pub fn difference(a_json: &str, b_json: &str) -> Result<String, JsValue> {
    to_json(&parse_set(a_json)?.difference(&parse_set(b_json)?))
}

/// Every time in the set's domain not covered by the set.
#[wasm_bindgen]
pub fn complement(set_json: &str) -> Result<String, JsValue> {
    to_json(&parse_set(set_json)?.complement())
}

/// Grow every interval by `delta` seconds on both ends; negative shrinks.
#[wasm_bindgen]
pub fn expand(set_json: &str, delta: f64) -> Result<String, JsValue> {
    to_json(&parse_set(set_json)?.expand(delta))
}

/// Move every interval by `delta` seconds, earlier when `left` is true.
#[wasm_bindgen]
pub fn shift(set_json: &str, delta: f64, left: bool) -> Result<String, JsValue> {
    let direction = if left { Direction::Left } else { Direction::Right };
    to_json(&parse_set(set_json)?.shift(delta, direction))
}

/// Count, total duration, bounds and domain of a set as a JSON object.
#[wasm_bindgen]
pub fn summarize(set_json: &str) -> Result<String, JsValue> {
    to_json(&SummaryDto::from(&parse_set(set_json)?))
}
