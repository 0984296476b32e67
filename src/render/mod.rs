//! Rendering layer with pluggable graphics contexts.
//!
//! This module provides:
//! - The `GlContext` trait over the WebGL2 calls the bootstrap needs
//! - WebGL2 backend (wasm32 only)
//! - Recording backend (tests and the trace CLI)
//! - Shader compilation, program linking and vertex buffer upload

pub mod backend;
pub mod buffers;
pub mod colors;
pub mod pipeline;
pub mod recording;
pub mod shaders;

#[cfg(target_arch = "wasm32")]
pub mod webgl;

// Re-export commonly used types
pub use backend::{AttribLayout, GlContext, Primitive, ShaderKind};
pub use buffers::{upload_geometry, VertexBuffer};
pub use colors::Rgba;
pub use pipeline::{compile_stage, link_program, Program, ShaderStage};
pub use recording::{GlCall, ObjectId, RecordingContext};
pub use shaders::ShaderSources;

#[cfg(target_arch = "wasm32")]
pub use webgl::{acquire_surface, WebGlSurface};
