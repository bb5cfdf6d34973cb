use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while binding the editor to a browser canvas.
#[derive(Debug, Error)]
pub enum CanvasError {
	#[error("no browser window available")]
	NoWindow,

	#[error("2d canvas context unavailable")]
	NoContext,

	#[error("window {0} is not a number")]
	BadDimension(&'static str),

	#[error("DOM call failed: {0}")]
	Dom(String),
}

impl From<JsValue> for CanvasError {
	fn from(value: JsValue) -> Self {
		CanvasError::Dom(format!("{value:?}"))
	}
}
