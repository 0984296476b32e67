//! Static per-vertex data for the geometry variant.
//!
//! A geometry asset is a JSON object with two parallel float arrays:
//!
//! ```json
//! { "vertices": [x, y, z, w, ...], "colors": [r, g, b, a, ...] }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, TriangleError};

/// Components per vertex in both arrays.
pub const COMPONENTS: usize = 4;
/// Vertices drawn per run.
pub const VERTEX_COUNT: usize = 3;

const BUILTIN_JSON: &str = include_str!("../assets/triangle.json");

/// Positions and colors for one triangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub vertices: Vec<f32>,
    pub colors: Vec<f32>,
}

impl Geometry {
    /// The triangle asset embedded in the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_JSON)
    }

    /// Parse and validate a geometry asset.
    pub fn from_json(json: &str) -> Result<Self> {
        let geometry: Self = serde_json::from_str(json)?;
        geometry.validate()?;
        Ok(geometry)
    }

    /// Both arrays must hold exactly three `vec4`s of finite numbers.
    pub fn validate(&self) -> Result<()> {
        let expected = VERTEX_COUNT * COMPONENTS;
        for (name, data) in [("vertices", &self.vertices), ("colors", &self.colors)] {
            if data.len() != expected {
                return Err(TriangleError::Geometry(format!(
                    "`{name}` has {} values, expected {expected}",
                    data.len()
                )));
            }
            if let Some(pos) = data.iter().position(|v| !v.is_finite()) {
                return Err(TriangleError::Geometry(format!(
                    "`{name}` has a non-finite value at index {pos}"
                )));
            }
        }
        Ok(())
    }

    /// Number of vertices described.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / COMPONENTS
    }
}
