//! GPU buffer types for the point renderer
//!
//! These types are uploaded directly to GPU buffers. All use f32 for GPU
//! compatibility and are repr(C) for predictable layout.

use bytemuck::{Pod, Zeroable};

/// The centroid marker is drawn this much larger than a regular point
pub const MARKER_RADIUS_SCALE: f32 = 1.5;

/// RGBA color of the centroid marker
pub const MARKER_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Per-instance data for one rendered circle.
///
/// Layout matches the WGSL struct for instanced rendering; the quad corners
/// are generated in the vertex shader from the vertex index, so this is the
/// only vertex buffer the pipeline binds.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct PointInstance {
    /// Circle center in world coordinates
    pub position: [f32; 2],
    /// Circle radius in world units
    pub radius: f32,
    /// Padding for 16-byte alignment
    pub _padding: f32,
    /// RGBA color
    pub color: [f32; 4],
}

impl PointInstance {
    /// Create an instance at the given position
    pub fn new(position: [f32; 2], radius: f32, color: [f32; 4]) -> Self {
        Self {
            position,
            radius,
            _padding: 0.0,
            color,
        }
    }

    /// The centroid marker for the given position: white, 1.5x point radius
    pub fn marker(position: [f32; 2], point_radius: f32) -> Self {
        Self::new(position, point_radius * MARKER_RADIUS_SCALE, MARKER_COLOR)
    }
}

/// Per-frame uniforms: the world-to-clip transform.
///
/// One world unit maps to one unit of the configured viewport, with the
/// origin at the bottom-left, matching a fixed ortho projection over
/// `0..width` x `0..height`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct FrameUniforms {
    /// World extent `[width, height]`
    pub viewport: [f32; 2],
    /// Padding for 16-byte alignment
    pub _padding: [f32; 2],
}

impl FrameUniforms {
    /// Uniforms for the given world extent
    pub fn new(viewport: [f32; 2]) -> Self {
        Self {
            viewport,
            _padding: [0.0; 2],
        }
    }
}

/// Configuration for the render pipeline
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Render target width in pixels
    pub width: u32,
    /// Render target height in pixels
    pub height: u32,
    /// Background clear color (RGBA)
    pub clear_color: [f32; 4],
    /// World extent the frame geometry is expressed in
    pub world: [f32; 2],
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            clear_color: [0.06, 0.06, 0.09, 1.0],
            world: [800.0, 800.0],
        }
    }
}
