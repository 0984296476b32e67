//! Vertex buffer upload for the geometry variant.

use super::backend::{AttribLayout, GlContext};
use super::shaders::{COLOR_SLOT, POSITION_SLOT};
use crate::error::Result;
use crate::geometry::Geometry;

/// A GPU-resident copy of one geometry field, bound to an attribute slot.
pub struct VertexBuffer<B> {
    handle: B,
    slot: u32,
    layout: AttribLayout,
    len: usize,
}

impl<B> VertexBuffer<B> {
    pub fn handle(&self) -> &B {
        &self.handle
    }

    /// Attribute slot this buffer feeds.
    pub fn slot(&self) -> u32 {
        self.slot
    }

    pub fn layout(&self) -> AttribLayout {
        self.layout
    }

    /// Number of floats uploaded.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Create a buffer and fill it with `data`. Leaves it bound to `ARRAY_BUFFER`.
fn create_filled<G: GlContext>(
    gl: &mut G,
    slot: u32,
    data: &[f32],
) -> Result<VertexBuffer<G::Buffer>> {
    let handle = gl.create_buffer()?;
    gl.bind_array_buffer(&handle);
    gl.buffer_data(data);
    Ok(VertexBuffer {
        handle,
        slot,
        layout: AttribLayout::VEC4,
        len: data.len(),
    })
}

/// Upload positions and colors and wire them to slots 0 and 1.
///
/// Both buffers are created and filled first, then both slots are enabled,
/// then each buffer is rebound and its layout described.
pub fn upload_geometry<G: GlContext>(
    gl: &mut G,
    geometry: &Geometry,
) -> Result<[VertexBuffer<G::Buffer>; 2]> {
    let positions = create_filled(gl, POSITION_SLOT, &geometry.vertices)?;
    let colors = create_filled(gl, COLOR_SLOT, &geometry.colors)?;

    gl.enable_vertex_attrib_array(positions.slot);
    gl.enable_vertex_attrib_array(colors.slot);

    for buffer in [&positions, &colors] {
        gl.bind_array_buffer(&buffer.handle);
        gl.vertex_attrib_pointer(buffer.slot, buffer.layout);
    }

    log::debug!(
        "uploaded {} position and {} color floats",
        positions.len,
        colors.len
    );
    Ok([positions, colors])
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::render::recording::{GlCall, RecordingContext};

    #[test]
    fn test_upload_creates_two_buffers_on_distinct_slots() {
        let mut gl = RecordingContext::new();
        let geometry = Geometry::builtin().unwrap();
        let [positions, colors] = upload_geometry(&mut gl, &geometry).unwrap();

        assert_eq!(positions.slot(), POSITION_SLOT);
        assert_eq!(colors.slot(), COLOR_SLOT);
        assert_ne!(positions.handle(), colors.handle());
        assert_eq!(positions.len(), 12);
        assert_eq!(colors.len(), 12);
    }

    #[test]
    fn test_pointer_follows_matching_bind() {
        let mut gl = RecordingContext::new();
        let geometry = Geometry::builtin().unwrap();
        let [positions, colors] = upload_geometry(&mut gl, &geometry).unwrap();

        let calls = gl.calls();
        let pointer_at = |slot: u32| {
            calls
                .iter()
                .position(|c| matches!(c, GlCall::VertexAttribPointer { slot: s, .. } if *s == slot))
                .unwrap()
        };

        let pos_idx = pointer_at(POSITION_SLOT);
        assert_eq!(
            calls[pos_idx - 1],
            GlCall::BindArrayBuffer {
                buffer: *positions.handle()
            }
        );
        let color_idx = pointer_at(COLOR_SLOT);
        assert_eq!(
            calls[color_idx - 1],
            GlCall::BindArrayBuffer {
                buffer: *colors.handle()
            }
        );
    }
}
