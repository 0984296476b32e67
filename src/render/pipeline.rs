//! Shader compilation and program linking.

use super::backend::{GlContext, ShaderKind};
use crate::error::{Result, TriangleError};

/// One compiled shader stage.
pub struct ShaderStage<S> {
    kind: ShaderKind,
    handle: S,
}

impl<S> ShaderStage<S> {
    pub fn kind(&self) -> ShaderKind {
        self.kind
    }

    pub fn handle(&self) -> &S {
        &self.handle
    }
}

/// A linked vertex + fragment pair. Owns both stages.
pub struct Program<G: GlContext> {
    handle: G::Program,
    vertex: ShaderStage<G::Shader>,
    fragment: ShaderStage<G::Shader>,
}

impl<G: GlContext> Program<G> {
    pub fn handle(&self) -> &G::Program {
        &self.handle
    }

    pub fn vertex(&self) -> &ShaderStage<G::Shader> {
        &self.vertex
    }

    pub fn fragment(&self) -> &ShaderStage<G::Shader> {
        &self.fragment
    }

    /// Make this the active pipeline (`useProgram`).
    pub fn activate(&self, gl: &mut G) {
        gl.use_program(&self.handle);
    }
}

/// Create and compile one shader stage.
///
/// With `check_status` the compile status is queried and a failure is
/// returned with the driver's info log.
pub fn compile_stage<G: GlContext>(
    gl: &mut G,
    kind: ShaderKind,
    source: &str,
    check_status: bool,
) -> Result<ShaderStage<G::Shader>> {
    let handle = gl.create_shader(kind)?;
    gl.shader_source(&handle, source);
    gl.compile_shader(&handle);

    if check_status && !gl.shader_compiled(&handle) {
        let log = gl.shader_info_log(&handle);
        return Err(TriangleError::ShaderCompile { kind, log });
    }

    log::debug!("compiled {kind} shader ({} bytes)", source.len());
    Ok(ShaderStage { kind, handle })
}

/// Attach both stages to a new program and link it.
pub fn link_program<G: GlContext>(
    gl: &mut G,
    vertex: ShaderStage<G::Shader>,
    fragment: ShaderStage<G::Shader>,
    check_status: bool,
) -> Result<Program<G>> {
    let handle = gl.create_program()?;
    gl.attach_shader(&handle, &vertex.handle);
    gl.attach_shader(&handle, &fragment.handle);
    gl.link_program(&handle);

    if check_status && !gl.program_linked(&handle) {
        return Err(TriangleError::ProgramLink(gl.program_info_log(&handle)));
    }

    log::debug!("linked shader program");
    Ok(Program {
        handle,
        vertex,
        fragment,
    })
}
