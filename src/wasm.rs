//! WASM bindings for in-browser DOM treemaps.
//!
//! This module exposes the pipeline to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::chart::{ChartData, figure_json};
use crate::config::Options;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

fn parse_options(options_json: &str) -> Result<Options, JsValue> {
    if options_json.trim().is_empty() {
        return Ok(Options::default());
    }
    serde_json::from_str(options_json).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Run the pipeline on an HTML string.
///
/// `options_json` is a (possibly partial) JSON encoding of [`Options`]; pass
/// an empty string for defaults. Returns the chart records as a JSON array.
#[wasm_bindgen]
pub fn visualize(html: &str, options_json: &str) -> Result<String, JsValue> {
    let options = parse_options(options_json)?;
    let records =
        crate::visualize(html, &options).map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_json::to_string(&records).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Run the pipeline and return a plotly figure (`{data, layout}`) as JSON,
/// ready for `Plotly.newPlot`.
#[wasm_bindgen]
pub fn treemap_figure(html: &str, options_json: &str) -> Result<String, JsValue> {
    let options = parse_options(options_json)?;
    let records =
        crate::visualize(html, &options).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let figure = figure_json(&ChartData::from_records(&records), &options.layout);
    Ok(figure.to_string())
}
