//! In-memory `GlContext` that records every call instead of drawing.
//!
//! Used by the native test-suite and the `triangle_trace` CLI. Object
//! handles are sequential ids starting at 1, shared across shaders,
//! programs and buffers.

use serde::Serialize;

use super::backend::{AttribLayout, GlContext, Primitive, ShaderKind};
use super::colors::Rgba;
use crate::error::Result;

/// Handle to a recorded GL object.
pub type ObjectId = u32;

/// One recorded WebGL2 call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "call", rename_all = "camelCase")]
pub enum GlCall {
    CreateShader { id: ObjectId, kind: ShaderKind },
    ShaderSource { shader: ObjectId, source: String },
    CompileShader { shader: ObjectId },
    GetShaderParameter { shader: ObjectId },
    GetShaderInfoLog { shader: ObjectId },
    CreateProgram { id: ObjectId },
    AttachShader { program: ObjectId, shader: ObjectId },
    LinkProgram { program: ObjectId },
    GetProgramParameter { program: ObjectId },
    GetProgramInfoLog { program: ObjectId },
    UseProgram { program: ObjectId },
    CreateBuffer { id: ObjectId },
    BindArrayBuffer { buffer: ObjectId },
    BufferData { data: Vec<f32> },
    EnableVertexAttribArray { slot: u32 },
    VertexAttribPointer { slot: u32, layout: AttribLayout },
    ClearColor { color: Rgba },
    Clear,
    DrawArrays { mode: Primitive, first: i32, count: i32 },
}

/// Records calls; can be told to fail shader compilation or linking.
#[derive(Debug, Default)]
pub struct RecordingContext {
    calls: Vec<GlCall>,
    next_id: ObjectId,
    /// Kind of every shader created so far.
    shader_kinds: Vec<(ObjectId, ShaderKind)>,
    attached: Vec<(ObjectId, ObjectId)>,
    failing_compile: Option<ShaderKind>,
    failing_link: bool,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `COMPILE_STATUS = false` for every shader of `kind`.
    #[must_use]
    pub fn with_failing_compile(mut self, kind: ShaderKind) -> Self {
        self.failing_compile = Some(kind);
        self
    }

    /// Report `LINK_STATUS = false` for every program.
    #[must_use]
    pub fn with_failing_link(mut self) -> Self {
        self.failing_link = true;
        self
    }

    /// Every call recorded so far, in issue order.
    pub fn calls(&self) -> &[GlCall] {
        &self.calls
    }

    /// Number of `drawArrays` calls recorded.
    pub fn draw_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, GlCall::DrawArrays { .. }))
            .count()
    }

    fn allocate(&mut self) -> ObjectId {
        self.next_id += 1;
        self.next_id
    }

    fn kind_of(&self, shader: ObjectId) -> Option<ShaderKind> {
        self.shader_kinds
            .iter()
            .find(|(id, _)| *id == shader)
            .map(|(_, kind)| *kind)
    }

    fn compiles(&self, shader: ObjectId) -> bool {
        match (self.kind_of(shader), self.failing_compile) {
            (Some(kind), Some(failing)) => kind != failing,
            (Some(_), None) => true,
            (None, _) => false,
        }
    }
}

impl GlContext for RecordingContext {
    type Shader = ObjectId;
    type Program = ObjectId;
    type Buffer = ObjectId;

    fn create_shader(&mut self, kind: ShaderKind) -> Result<ObjectId> {
        let id = self.allocate();
        self.shader_kinds.push((id, kind));
        self.calls.push(GlCall::CreateShader { id, kind });
        Ok(id)
    }

    fn shader_source(&mut self, shader: &ObjectId, source: &str) {
        self.calls.push(GlCall::ShaderSource {
            shader: *shader,
            source: source.to_string(),
        });
    }

    fn compile_shader(&mut self, shader: &ObjectId) {
        self.calls.push(GlCall::CompileShader { shader: *shader });
    }

    fn shader_compiled(&mut self, shader: &ObjectId) -> bool {
        self.calls
            .push(GlCall::GetShaderParameter { shader: *shader });
        self.compiles(*shader)
    }

    fn shader_info_log(&mut self, shader: &ObjectId) -> String {
        self.calls.push(GlCall::GetShaderInfoLog { shader: *shader });
        if self.compiles(*shader) {
            String::new()
        } else {
            "ERROR: 0:1: recorded compile failure".to_string()
        }
    }

    fn create_program(&mut self) -> Result<ObjectId> {
        let id = self.allocate();
        self.calls.push(GlCall::CreateProgram { id });
        Ok(id)
    }

    fn attach_shader(&mut self, program: &ObjectId, shader: &ObjectId) {
        self.attached.push((*program, *shader));
        self.calls.push(GlCall::AttachShader {
            program: *program,
            shader: *shader,
        });
    }

    fn link_program(&mut self, program: &ObjectId) {
        self.calls.push(GlCall::LinkProgram { program: *program });
    }

    fn program_linked(&mut self, program: &ObjectId) -> bool {
        self.calls
            .push(GlCall::GetProgramParameter { program: *program });
        if self.failing_link {
            return false;
        }
        let stages: Vec<ShaderKind> = self
            .attached
            .iter()
            .filter(|(p, _)| p == program)
            .filter(|(_, s)| self.compiles(*s))
            .filter_map(|(_, s)| self.kind_of(*s))
            .collect();
        stages.contains(&ShaderKind::Vertex) && stages.contains(&ShaderKind::Fragment)
    }

    fn program_info_log(&mut self, program: &ObjectId) -> String {
        self.calls
            .push(GlCall::GetProgramInfoLog { program: *program });
        "Failed to link: missing or uncompiled shaders".to_string()
    }

    fn use_program(&mut self, program: &ObjectId) {
        self.calls.push(GlCall::UseProgram { program: *program });
    }

    fn create_buffer(&mut self) -> Result<ObjectId> {
        let id = self.allocate();
        self.calls.push(GlCall::CreateBuffer { id });
        Ok(id)
    }

    fn bind_array_buffer(&mut self, buffer: &ObjectId) {
        self.calls
            .push(GlCall::BindArrayBuffer { buffer: *buffer });
    }

    fn buffer_data(&mut self, data: &[f32]) {
        self.calls.push(GlCall::BufferData {
            data: data.to_vec(),
        });
    }

    fn enable_vertex_attrib_array(&mut self, slot: u32) {
        self.calls.push(GlCall::EnableVertexAttribArray { slot });
    }

    fn vertex_attrib_pointer(&mut self, slot: u32, layout: AttribLayout) {
        self.calls.push(GlCall::VertexAttribPointer { slot, layout });
    }

    fn clear_color(&mut self, color: Rgba) {
        self.calls.push(GlCall::ClearColor { color });
    }

    fn clear(&mut self) {
        self.calls.push(GlCall::Clear);
    }

    fn draw_arrays(&mut self, mode: Primitive, first: i32, count: i32) {
        self.calls.push(GlCall::DrawArrays { mode, first, count });
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_sequential_across_object_types() {
        let mut gl = RecordingContext::new();
        assert_eq!(gl.create_shader(ShaderKind::Vertex).unwrap(), 1);
        assert_eq!(gl.create_program().unwrap(), 2);
        assert_eq!(gl.create_buffer().unwrap(), 3);
    }

    #[test]
    fn test_failing_compile_only_hits_requested_kind() {
        let mut gl = RecordingContext::new().with_failing_compile(ShaderKind::Fragment);
        let vs = gl.create_shader(ShaderKind::Vertex).unwrap();
        let fs = gl.create_shader(ShaderKind::Fragment).unwrap();
        assert!(gl.shader_compiled(&vs));
        assert!(!gl.shader_compiled(&fs));
        assert!(gl.shader_info_log(&vs).is_empty());
        assert!(!gl.shader_info_log(&fs).is_empty());
    }

    #[test]
    fn test_link_needs_both_stages() {
        let mut gl = RecordingContext::new();
        let program = gl.create_program().unwrap();
        let vs = gl.create_shader(ShaderKind::Vertex).unwrap();
        gl.attach_shader(&program, &vs);
        assert!(!gl.program_linked(&program));

        let fs = gl.create_shader(ShaderKind::Fragment).unwrap();
        gl.attach_shader(&program, &fs);
        assert!(gl.program_linked(&program));
    }

    #[test]
    fn test_trace_serializes_with_call_tag() {
        let mut gl = RecordingContext::new();
        gl.draw_arrays(Primitive::TriangleList, 0, 3);
        let json = serde_json::to_string(gl.calls()).unwrap();
        assert_eq!(
            json,
            r#"[{"call":"drawArrays","mode":"triangle_list","first":0,"count":3}]"#
        );
    }
}
