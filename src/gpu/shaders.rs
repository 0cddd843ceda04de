//! WGSL shaders for the point renderer
//!
//! One pipeline renders both the point set and the centroid marker: each
//! instance is expanded to a two-triangle quad in the vertex shader and cut
//! to a circle in the fragment shader.

/// Frame uniform struct shared by the shaders
pub const FRAME_UNIFORMS: &str = r#"
struct FrameUniforms {
    viewport: vec2<f32>,
    _padding: vec2<f32>,
}

@group(0) @binding(0) var<uniform> frame: FrameUniforms;
"#;

/// Instanced circle shader: quad expansion in the vertex stage, circular
/// cutout in the fragment stage
pub const POINT_SHADER: &str = r#"
struct PointInstance {
    @location(0) center: vec2<f32>,
    @location(1) radius: f32,
    @location(2) color: vec4<f32>,
}

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) local: vec2<f32>,
    @location(1) color: vec4<f32>,
}

@vertex
fn vs_point(
    @builtin(vertex_index) vertex_index: u32,
    instance: PointInstance,
) -> VertexOutput {
    // Two-triangle quad generated from the vertex index; no mesh buffer
    var corners = array<vec2<f32>, 6>(
        vec2<f32>(-1.0, -1.0),
        vec2<f32>(1.0, -1.0),
        vec2<f32>(-1.0, 1.0),
        vec2<f32>(-1.0, 1.0),
        vec2<f32>(1.0, -1.0),
        vec2<f32>(1.0, 1.0),
    );
    let corner = corners[vertex_index];

    // World position, then ortho transform 0..viewport -> NDC
    let world = instance.center + corner * instance.radius;
    let ndc = world / frame.viewport * 2.0 - vec2<f32>(1.0, 1.0);

    var out: VertexOutput;
    out.clip_position = vec4<f32>(ndc, 0.0, 1.0);
    out.local = corner;
    out.color = instance.color;
    return out;
}

@fragment
fn fs_point(
    @location(0) local: vec2<f32>,
    @location(1) color: vec4<f32>,
) -> @location(0) vec4<f32> {
    if (dot(local, local) > 1.0) {
        discard;
    }
    return color;
}
"#;

/// Complete shader source for the point pipeline
pub fn point_shader() -> String {
    format!("{FRAME_UNIFORMS}{POINT_SHADER}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_shader_has_entry_points() {
        let source = point_shader();
        assert!(source.contains("fn vs_point"));
        assert!(source.contains("fn fs_point"));
        assert!(source.contains("var<uniform> frame"));
    }
}
