//! Double-buffered geometry and the WebGPU point renderer
//!
//! This module bridges the CPU-side simulation to GPU-side rendering:
//!
//! - [`geometry`] owns the two `FrameGeometry` instances and the front/back
//!   role index; `swap` is the single synchronization point.
//! - [`renderer`] consumes the front instance and issues one draw call for
//!   the point set and one for the centroid marker.
//! - [`types`] are the `repr(C)` records uploaded directly to GPU buffers.
//! - [`shaders`] hold the WGSL source for the instanced circle pipeline.

pub mod geometry;
pub mod renderer;
pub mod shaders;
pub mod types;

pub use geometry::{FrameGeometry, GeometryBuffer, GeometryStyle};
pub use renderer::{RenderPipeline, create_render_device};
pub use types::{FrameUniforms, MARKER_COLOR, MARKER_RADIUS_SCALE, PointInstance, RenderConfig};
