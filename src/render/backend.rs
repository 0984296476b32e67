//! Graphics context trait for pluggable rendering implementations.
//!
//! This module defines the `GlContext` trait that abstracts the handful of
//! WebGL2 calls the bootstrap issues, allowing the real browser context and
//! the recording context to be used interchangeably.

use std::fmt;

use serde::Serialize;

use super::colors::Rgba;
use crate::error::Result;

/// `gl.VERTEX_SHADER`
const GL_VERTEX_SHADER: u32 = 0x8B31;
/// `gl.FRAGMENT_SHADER`
const GL_FRAGMENT_SHADER: u32 = 0x8B30;
/// `gl.TRIANGLES`
const GL_TRIANGLES: u32 = 0x0004;

/// Pipeline stage a shader is compiled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShaderKind {
    Vertex,
    Fragment,
}

impl ShaderKind {
    /// The WebGL enum passed to `createShader`.
    pub const fn gl_enum(self) -> u32 {
        match self {
            Self::Vertex => GL_VERTEX_SHADER,
            Self::Fragment => GL_FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertex => f.write_str("vertex"),
            Self::Fragment => f.write_str("fragment"),
        }
    }
}

/// Primitive assembly mode for `drawArrays`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Primitive {
    /// Independent triangles, three vertices each.
    TriangleList,
}

impl Primitive {
    /// The WebGL enum passed to `drawArrays`.
    pub const fn gl_enum(self) -> u32 {
        match self {
            Self::TriangleList => GL_TRIANGLES,
        }
    }
}

/// Layout of a float vertex attribute, as described by `vertexAttribPointer`.
///
/// The component type is always `gl.FLOAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttribLayout {
    /// Components per vertex (1..=4).
    pub size: i32,
    pub normalized: bool,
    /// Byte stride between vertices; 0 means tightly packed.
    pub stride: i32,
    /// Byte offset of the first component.
    pub offset: i32,
}

impl AttribLayout {
    /// Tightly packed `vec4` of floats.
    pub const VEC4: Self = Self {
        size: 4,
        normalized: false,
        stride: 0,
        offset: 0,
    };
}

/// Trait for graphics contexts
///
/// Implementations forward to a real WebGL2 context or record the calls.
/// Methods mirror the WebGL2 API one-to-one; object creation returns an
/// error where WebGL would return `null`.
pub trait GlContext {
    type Shader;
    type Program;
    type Buffer;

    // Shaders
    fn create_shader(&mut self, kind: ShaderKind) -> Result<Self::Shader>;
    fn shader_source(&mut self, shader: &Self::Shader, source: &str);
    fn compile_shader(&mut self, shader: &Self::Shader);
    /// `getShaderParameter(shader, COMPILE_STATUS)`
    fn shader_compiled(&mut self, shader: &Self::Shader) -> bool;
    fn shader_info_log(&mut self, shader: &Self::Shader) -> String;

    // Programs
    fn create_program(&mut self) -> Result<Self::Program>;
    fn attach_shader(&mut self, program: &Self::Program, shader: &Self::Shader);
    fn link_program(&mut self, program: &Self::Program);
    /// `getProgramParameter(program, LINK_STATUS)`
    fn program_linked(&mut self, program: &Self::Program) -> bool;
    fn program_info_log(&mut self, program: &Self::Program) -> String;
    fn use_program(&mut self, program: &Self::Program);

    // Buffers and attributes
    fn create_buffer(&mut self) -> Result<Self::Buffer>;
    /// `bindBuffer(ARRAY_BUFFER, buffer)`
    fn bind_array_buffer(&mut self, buffer: &Self::Buffer);
    /// `bufferData(ARRAY_BUFFER, data, STATIC_DRAW)` on the bound buffer.
    fn buffer_data(&mut self, data: &[f32]);
    fn enable_vertex_attrib_array(&mut self, slot: u32);
    fn vertex_attrib_pointer(&mut self, slot: u32, layout: AttribLayout);

    // Frame
    fn clear_color(&mut self, color: Rgba);
    /// `clear(COLOR_BUFFER_BIT)`
    fn clear(&mut self);
    fn draw_arrays(&mut self, mode: Primitive, first: i32, count: i32);
}
