//! WebGL2 rendering backend.
//!
//! Forwards every `GlContext` call to the browser's `WebGl2RenderingContext`.
//! Only compiled for `wasm32`.

use js_sys::Float32Array;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, WebGl2RenderingContext, WebGlBuffer, WebGlProgram, WebGlShader};

use super::backend::{AttribLayout, GlContext, Primitive, ShaderKind};
use super::colors::Rgba;
use crate::error::{Result, TriangleError};

/// A WebGL2 context bound to an on-screen canvas.
pub struct WebGlSurface {
    canvas: HtmlCanvasElement,
    gl: WebGl2RenderingContext,
}

impl WebGlSurface {
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    pub fn context(&self) -> &WebGl2RenderingContext {
        &self.gl
    }
}

/// Look up `#canvas_id` and ask it for a WebGL2 context.
///
/// Returns `Ok(None)` when the canvas exists but the browser cannot provide
/// WebGL2; errors are reserved for a missing DOM or element.
pub fn acquire_surface(canvas_id: &str) -> Result<Option<WebGlSurface>> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(TriangleError::NoDom("window.document"))?;

    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| TriangleError::ElementNotFound(canvas_id.to_string()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| TriangleError::NotACanvas(canvas_id.to_string()))?;

    let context = canvas
        .get_context("webgl2")
        .map_err(|e| TriangleError::Js(format!("{e:?}")))?;

    Ok(context
        .and_then(|ctx| ctx.dyn_into::<WebGl2RenderingContext>().ok())
        .map(|gl| WebGlSurface { canvas, gl }))
}

impl GlContext for WebGlSurface {
    type Shader = WebGlShader;
    type Program = WebGlProgram;
    type Buffer = WebGlBuffer;

    fn create_shader(&mut self, kind: ShaderKind) -> Result<WebGlShader> {
        self.gl
            .create_shader(kind.gl_enum())
            .ok_or(TriangleError::Resource("shader"))
    }

    fn shader_source(&mut self, shader: &WebGlShader, source: &str) {
        self.gl.shader_source(shader, source);
    }

    fn compile_shader(&mut self, shader: &WebGlShader) {
        self.gl.compile_shader(shader);
    }

    fn shader_compiled(&mut self, shader: &WebGlShader) -> bool {
        self.gl
            .get_shader_parameter(shader, WebGl2RenderingContext::COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn shader_info_log(&mut self, shader: &WebGlShader) -> String {
        self.gl.get_shader_info_log(shader).unwrap_or_default()
    }

    fn create_program(&mut self) -> Result<WebGlProgram> {
        self.gl
            .create_program()
            .ok_or(TriangleError::Resource("program"))
    }

    fn attach_shader(&mut self, program: &WebGlProgram, shader: &WebGlShader) {
        self.gl.attach_shader(program, shader);
    }

    fn link_program(&mut self, program: &WebGlProgram) {
        self.gl.link_program(program);
    }

    fn program_linked(&mut self, program: &WebGlProgram) -> bool {
        self.gl
            .get_program_parameter(program, WebGl2RenderingContext::LINK_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn program_info_log(&mut self, program: &WebGlProgram) -> String {
        self.gl.get_program_info_log(program).unwrap_or_default()
    }

    fn use_program(&mut self, program: &WebGlProgram) {
        self.gl.use_program(Some(program));
    }

    fn create_buffer(&mut self) -> Result<WebGlBuffer> {
        self.gl
            .create_buffer()
            .ok_or(TriangleError::Resource("buffer"))
    }

    fn bind_array_buffer(&mut self, buffer: &WebGlBuffer) {
        self.gl
            .bind_buffer(WebGl2RenderingContext::ARRAY_BUFFER, Some(buffer));
    }

    fn buffer_data(&mut self, data: &[f32]) {
        // `from` copies out of wasm memory.
        let array = Float32Array::from(data);
        self.gl.buffer_data_with_array_buffer_view(
            WebGl2RenderingContext::ARRAY_BUFFER,
            &array,
            WebGl2RenderingContext::STATIC_DRAW,
        );
    }

    fn enable_vertex_attrib_array(&mut self, slot: u32) {
        self.gl.enable_vertex_attrib_array(slot);
    }

    fn vertex_attrib_pointer(&mut self, slot: u32, layout: AttribLayout) {
        self.gl.vertex_attrib_pointer_with_i32(
            slot,
            layout.size,
            WebGl2RenderingContext::FLOAT,
            layout.normalized,
            layout.stride,
            layout.offset,
        );
    }

    fn clear_color(&mut self, color: Rgba) {
        let [r, g, b, a] = color.to_array();
        self.gl.clear_color(r, g, b, a);
    }

    fn clear(&mut self) {
        self.gl.clear(WebGl2RenderingContext::COLOR_BUFFER_BIT);
    }

    fn draw_arrays(&mut self, mode: Primitive, first: i32, count: i32) {
        self.gl.draw_arrays(mode.gl_enum(), first, count);
    }
}
