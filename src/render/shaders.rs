//! Fixed GLSL ES 3.00 shader pairs, embedded at build time.

/// Attribute slot bound to `a_position` in the geometry vertex shader.
pub const POSITION_SLOT: u32 = 0;
/// Attribute slot bound to `a_color` in the geometry vertex shader.
pub const COLOR_SLOT: u32 = 1;

/// Source text for one vertex + fragment pair.
#[derive(Debug, Clone, Copy)]
pub struct ShaderSources {
    pub vertex: &'static str,
    pub fragment: &'static str,
}

/// Corners generated from `gl_VertexID`; no attributes.
pub const BASIC: ShaderSources = ShaderSources {
    vertex: include_str!("shaders/basic.vert"),
    fragment: include_str!("shaders/basic.frag"),
};

/// Per-vertex position and color read from slots 0 and 1.
pub const GEOMETRY: ShaderSources = ShaderSources {
    vertex: include_str!("shaders/geometry.vert"),
    fragment: include_str!("shaders/geometry.frag"),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sources_are_glsl_es_300() {
        for sources in [BASIC, GEOMETRY] {
            assert!(sources.vertex.starts_with("#version 300 es"));
            assert!(sources.fragment.starts_with("#version 300 es"));
        }
    }

    #[test]
    fn test_geometry_slots_match_shader_layout() {
        assert!(GEOMETRY
            .vertex
            .contains(&format!("layout(location = {POSITION_SLOT}) in vec4 a_position")));
        assert!(GEOMETRY
            .vertex
            .contains(&format!("layout(location = {COLOR_SLOT}) in vec4 a_color")));
    }

    #[test]
    fn test_basic_vertex_shader_has_no_attributes() {
        assert!(!BASIC.vertex.contains(" in "));
    }
}
