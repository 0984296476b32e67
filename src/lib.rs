//! webgl-triangle - hello triangle for WebGL2
//!
//! Renders a single triangle into a `<canvas>` via WebAssembly:
//! - Basic variant: corners generated in the vertex shader
//! - Geometry variant: positions and colors uploaded from a JSON asset
//! - One clear, one draw call, no render loop
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { render_triangle, render_geometry } from 'webgl-triangle';
//! await init();
//! render_triangle("webgl-canvas");
//! render_geometry("webgl-canvas", null); // embedded triangle.json
//! ```
//!
//! Building with the `autostart` feature renders the basic variant on
//! `#webgl-canvas` as soon as the module is initialized.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod render;

use wasm_bindgen::prelude::*;

pub use bootstrap::{run, DrawCall, Scene, CLEAR_COLOR};
pub use config::BootstrapConfig;
pub use error::{Result, TriangleError};
pub use geometry::Geometry;

/// Acquire `#canvas_id` and run the bootstrap on it.
#[cfg(target_arch = "wasm32")]
fn render_on_canvas(config: &BootstrapConfig) -> Result<()> {
    console_error_panic_hook::set_once();
    logging::init_logging(logging::LoggingConfig::with_level(config.log_level));

    let surface =
        render::acquire_surface(&config.canvas_id).inspect_err(|e| log::error!("{e}"))?;
    bootstrap::run(surface, config)?;
    Ok(())
}

/// Module entry point for the `autostart` build.
#[cfg(all(feature = "autostart", target_arch = "wasm32"))]
#[wasm_bindgen(start)]
pub fn start() {
    // Already logged; the canvas stays blank.
    let _ = render_on_canvas(&BootstrapConfig::default());
}

/// Render the basic triangle on `#canvas_id`.
///
/// # Errors
/// Returns an error if the canvas or its WebGL2 context is unavailable, or
/// if a shader fails to compile or link.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn render_triangle(canvas_id: &str) -> std::result::Result<(), JsValue> {
    render_on_canvas(&BootstrapConfig::basic(canvas_id))?;
    Ok(())
}

/// Render the geometry variant on `#canvas_id`.
///
/// `geometry_json` is a `{ "vertices": [...], "colors": [...] }` document;
/// `null` or an empty string uses the embedded triangle asset.
///
/// # Errors
/// Returns an error if the geometry is invalid or rendering fails.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn render_geometry(
    canvas_id: &str,
    geometry_json: Option<String>,
) -> std::result::Result<(), JsValue> {
    let geometry = match geometry_json.as_deref().map(str::trim) {
        Some(json) if !json.is_empty() => Geometry::from_json(json)?,
        _ => Geometry::builtin()?,
    };
    render_on_canvas(&BootstrapConfig::with_geometry(canvas_id, geometry))?;
    Ok(())
}

/// Render with a full configuration object (see `BootstrapConfig`).
///
/// `undefined` or `null` runs the defaults.
///
/// # Errors
/// Returns an error if the configuration cannot be decoded or rendering fails.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn render_with_config(config: JsValue) -> std::result::Result<(), JsValue> {
    let config: BootstrapConfig = if config.is_undefined() || config.is_null() {
        BootstrapConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {e}")))?
    };
    render_on_canvas(&config)?;
    Ok(())
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
