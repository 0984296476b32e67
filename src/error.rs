//! Structured error types for webgl-triangle.

use crate::render::ShaderKind;

/// All errors that can occur while bootstrapping the renderer.
#[derive(Debug, thiserror::Error)]
pub enum TriangleError {
    /// The browser exposes no `window`/`document` (e.g. running in a worker).
    #[error("No DOM available: {0}")]
    NoDom(&'static str),

    /// No element with the requested id exists in the document.
    #[error("Element not found: #{0}")]
    ElementNotFound(String),

    /// The element exists but is not a `<canvas>`.
    #[error("Element #{0} is not a canvas")]
    NotACanvas(String),

    /// The canvas refused to hand out a WebGL2 context.
    #[error("Unable to initialize WebGL. Your browser or machine may not support it.")]
    SurfaceUnavailable,

    /// A shader stage failed to compile.
    #[error("{kind} shader failed to compile: {log}")]
    ShaderCompile { kind: ShaderKind, log: String },

    /// The program failed to link.
    #[error("Program failed to link: {0}")]
    ProgramLink(String),

    /// A GL object (`createShader`, `createProgram`, `createBuffer`) came back null.
    #[error("Failed to create {0}")]
    Resource(&'static str),

    /// Geometry data is malformed.
    #[error("Invalid geometry: {0}")]
    Geometry(String),

    /// JSON decoding error for geometry or configuration.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Error raised by the JavaScript side.
    #[error("JavaScript error: {0}")]
    Js(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TriangleError>;

#[cfg(target_arch = "wasm32")]
impl From<TriangleError> for wasm_bindgen::JsValue {
    fn from(e: TriangleError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
