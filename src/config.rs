//! Bootstrap configuration.
//!
//! Every field has a default, so JavaScript callers only pass what they
//! want to change:
//!
//! ```javascript
//! render_with_config({ canvasId: "my-canvas", useBuiltinGeometry: true });
//! ```

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::Geometry;

/// Id of the canvas element used when none is configured.
pub const DEFAULT_CANVAS_ID: &str = "webgl-canvas";

/// Options for one bootstrap run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BootstrapConfig {
    /// Id of the `<canvas>` element to render into.
    pub canvas_id: String,
    /// Caller-supplied geometry. Selects the geometry variant.
    pub geometry: Option<Geometry>,
    /// Use the embedded triangle asset when `geometry` is unset.
    pub use_builtin_geometry: bool,
    /// Query compile and link status and abort before drawing on failure.
    pub check_status: bool,
    pub log_level: LevelFilter,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            canvas_id: DEFAULT_CANVAS_ID.to_string(),
            geometry: None,
            use_builtin_geometry: false,
            check_status: true,
            log_level: LevelFilter::Info,
        }
    }
}

impl BootstrapConfig {
    /// Basic variant on the given canvas.
    pub fn basic(canvas_id: impl Into<String>) -> Self {
        Self {
            canvas_id: canvas_id.into(),
            ..Self::default()
        }
    }

    /// Geometry variant on the given canvas.
    pub fn with_geometry(canvas_id: impl Into<String>, geometry: Geometry) -> Self {
        Self {
            canvas_id: canvas_id.into(),
            geometry: Some(geometry),
            ..Self::default()
        }
    }

    /// The geometry to upload, if this run uses the geometry variant.
    ///
    /// Explicit geometry wins over the builtin asset. The result is validated.
    pub fn resolve_geometry(&self) -> Result<Option<Geometry>> {
        match (&self.geometry, self.use_builtin_geometry) {
            (Some(geometry), _) => {
                geometry.validate()?;
                Ok(Some(geometry.clone()))
            }
            (None, true) => Geometry::builtin().map(Some),
            (None, false) => Ok(None),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BootstrapConfig::default();
        assert_eq!(config.canvas_id, "webgl-canvas");
        assert!(config.check_status);
        assert!(config.resolve_geometry().unwrap().is_none());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: BootstrapConfig =
            serde_json::from_str(r#"{"canvasId":"stage","logLevel":"debug"}"#).unwrap();
        assert_eq!(config.canvas_id, "stage");
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert!(config.check_status);
    }

    #[test]
    fn test_builtin_flag_selects_geometry_variant() {
        let config = BootstrapConfig {
            use_builtin_geometry: true,
            ..BootstrapConfig::default()
        };
        let geometry = config.resolve_geometry().unwrap().unwrap();
        assert_eq!(geometry, Geometry::builtin().unwrap());
    }

    #[test]
    fn test_explicit_geometry_is_validated() {
        let config = BootstrapConfig::with_geometry(
            "c",
            Geometry {
                vertices: vec![0.0; 8],
                colors: vec![1.0; 12],
            },
        );
        assert!(config.resolve_geometry().is_err());
    }
}
