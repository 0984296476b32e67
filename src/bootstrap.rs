//! Single-shot renderer bootstrap.
//!
//! Runs the whole sequence once, in order:
//! surface check → compile both stages → link → activate →
//! (geometry variant) upload buffers → clear → one draw call.
//!
//! Nothing here loops or re-renders; the returned [`Scene`] only keeps the
//! GL objects alive.

use crate::config::BootstrapConfig;
use crate::error::{Result, TriangleError};
use crate::geometry::VERTEX_COUNT;
use crate::render::{
    compile_stage, link_program, shaders, upload_geometry, GlContext, Primitive, Program, Rgba,
    ShaderKind, VertexBuffer,
};

/// Color the surface is cleared to before drawing.
pub const CLEAR_COLOR: Rgba = Rgba::BLACK;

/// Parameters of the one `drawArrays` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCall {
    pub mode: Primitive,
    pub first: i32,
    pub count: i32,
}

impl DrawCall {
    /// Three vertices as a triangle list.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub const TRIANGLE: Self = Self {
        mode: Primitive::TriangleList,
        first: 0,
        count: VERTEX_COUNT as i32,
    };
}

/// Everything a successful run created. Owns the surface for as long as the
/// caller keeps it; nothing is released explicitly.
pub struct Scene<G: GlContext> {
    surface: G,
    program: Program<G>,
    buffers: Vec<VertexBuffer<G::Buffer>>,
    draw: DrawCall,
}

impl<G: GlContext> Scene<G> {
    pub fn surface(&self) -> &G {
        &self.surface
    }

    pub fn into_surface(self) -> G {
        self.surface
    }

    pub fn program(&self) -> &Program<G> {
        &self.program
    }

    /// Empty in the basic variant; positions then colors otherwise.
    pub fn buffers(&self) -> &[VertexBuffer<G::Buffer>] {
        &self.buffers
    }

    pub fn draw_call(&self) -> DrawCall {
        self.draw
    }
}

/// Render one triangle on `surface`.
///
/// `None` means the context could not be acquired: the failure is logged
/// and no graphics call is made. Any later failure is logged and returned
/// before the draw call is issued.
pub fn run<G: GlContext>(surface: Option<G>, config: &BootstrapConfig) -> Result<Scene<G>> {
    let Some(mut surface) = surface else {
        let err = TriangleError::SurfaceUnavailable;
        log::error!("{err}");
        return Err(err);
    };

    match draw(&mut surface, config) {
        Ok((program, buffers)) => {
            log::info!("Hello, WebGL!");
            Ok(Scene {
                surface,
                program,
                buffers,
                draw: DrawCall::TRIANGLE,
            })
        }
        Err(err) => {
            log::error!("{err}");
            Err(err)
        }
    }
}

type Drawn<G> = (Program<G>, Vec<VertexBuffer<<G as GlContext>::Buffer>>);

fn draw<G: GlContext>(gl: &mut G, config: &BootstrapConfig) -> Result<Drawn<G>> {
    let geometry = config.resolve_geometry()?;
    let sources = if geometry.is_some() {
        shaders::GEOMETRY
    } else {
        shaders::BASIC
    };

    let check = config.check_status;
    let vertex = compile_stage(gl, ShaderKind::Vertex, sources.vertex, check)?;
    let fragment = compile_stage(gl, ShaderKind::Fragment, sources.fragment, check)?;
    let program = link_program(gl, vertex, fragment, check)?;
    program.activate(gl);

    let buffers = match &geometry {
        Some(geometry) => Vec::from(upload_geometry(gl, geometry)?),
        None => Vec::new(),
    };

    gl.clear_color(CLEAR_COLOR);
    gl.clear();

    let call = DrawCall::TRIANGLE;
    gl.draw_arrays(call.mode, call.first, call.count);

    Ok((program, buffers))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::render::{GlCall, RecordingContext};

    #[test]
    fn test_missing_surface_is_reported() {
        let result = run(None::<RecordingContext>, &BootstrapConfig::default());
        assert!(matches!(result, Err(TriangleError::SurfaceUnavailable)));
    }

    #[test]
    fn test_basic_variant_issues_no_buffer_calls() {
        let scene = run(Some(RecordingContext::new()), &BootstrapConfig::default()).unwrap();
        assert!(scene.buffers().is_empty());
        assert!(!scene
            .surface()
            .calls()
            .iter()
            .any(|c| matches!(c, GlCall::CreateBuffer { .. })));
    }

    #[test]
    fn test_basic_variant_uses_basic_sources() {
        let scene = run(Some(RecordingContext::new()), &BootstrapConfig::default()).unwrap();
        let sources: Vec<&str> = scene
            .surface()
            .calls()
            .iter()
            .filter_map(|c| match c {
                GlCall::ShaderSource { source, .. } => Some(source.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(sources, [shaders::BASIC.vertex, shaders::BASIC.fragment]);
    }

    #[test]
    fn test_tail_is_clear_then_draw() {
        let scene = run(Some(RecordingContext::new()), &BootstrapConfig::default()).unwrap();
        let calls = scene.surface().calls();
        let tail = &calls[calls.len() - 3..];
        assert_eq!(
            tail,
            [
                GlCall::ClearColor {
                    color: Rgba::BLACK
                },
                GlCall::Clear,
                GlCall::DrawArrays {
                    mode: Primitive::TriangleList,
                    first: 0,
                    count: 3
                },
            ]
        );
    }
}
