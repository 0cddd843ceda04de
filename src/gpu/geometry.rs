//! Double-buffered frame geometry
//!
//! Bridges CPU-side updated geometry to GPU-side rendering. Exactly two
//! `FrameGeometry` instances exist: the front slot is read by the renderer,
//! the back slot is written by the controller, and `swap` is the single
//! synchronization point that exchanges the roles. The role is an explicit
//! two-valued index rather than a pointer swap to keep ownership transfer
//! auditable.

use crate::model::Point;

use super::types::PointInstance;

/// Style applied when flattening model points into instances
#[derive(Debug, Clone)]
pub struct GeometryStyle {
    /// Radius of a regular point
    pub point_radius: f32,
    /// RGBA color of a regular point
    pub point_color: [f32; 4],
}

/// Flattened per-instance data for one frame: point circles plus an
/// optional centroid marker the renderer consults before issuing the
/// marker draw call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameGeometry {
    points: Vec<PointInstance>,
    marker: Option<PointInstance>,
}

impl FrameGeometry {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            marker: None,
        }
    }

    /// Point instances, in model index order
    pub fn points(&self) -> &[PointInstance] {
        &self.points
    }

    /// The centroid marker, when one should be drawn this frame
    pub fn marker(&self) -> Option<&PointInstance> {
        self.marker.as_ref()
    }
}

/// The two geometry slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    A,
    B,
}

impl Slot {
    fn other(self) -> Slot {
        match self {
            Slot::A => Slot::B,
            Slot::B => Slot::A,
        }
    }

    fn index(self) -> usize {
        match self {
            Slot::A => 0,
            Slot::B => 1,
        }
    }
}

/// Owns the two frame geometry instances and the front/back role index.
///
/// The controller is the sole writer of the back slot; the renderer is the
/// sole reader of the front slot. `front()` hands out a borrow the caller
/// cannot hold across a subsequent `swap()` (the borrow checker enforces
/// the discipline the double buffer exists for).
#[derive(Debug, Clone)]
pub struct GeometryBuffer {
    slots: [FrameGeometry; 2],
    front: Slot,
    style: GeometryStyle,
}

impl GeometryBuffer {
    /// Create a buffer with both slots sized for `capacity` points
    pub fn new(capacity: usize, style: GeometryStyle) -> Self {
        Self {
            slots: [
                FrameGeometry::with_capacity(capacity),
                FrameGeometry::with_capacity(capacity),
            ],
            front: Slot::A,
            style,
        }
    }

    /// Reallocate both slots for a new capacity.
    ///
    /// Used when a reset changes the point cardinality; the role index
    /// returns to its initial assignment.
    pub fn reallocate(&mut self, capacity: usize) {
        self.slots = [
            FrameGeometry::with_capacity(capacity),
            FrameGeometry::with_capacity(capacity),
        ];
        self.front = Slot::A;
    }

    /// Fill the back slot from the model's points and the optional centroid.
    ///
    /// Writing identical input twice in a row leaves the slot's content
    /// unchanged; the slot's allocation is reused across frames.
    pub fn write_back(&mut self, points: &[Point], centroid: Option<[f32; 2]>) {
        let marker = centroid.map(|c| PointInstance::marker(c, self.style.point_radius));
        let radius = self.style.point_radius;
        let color = self.style.point_color;

        let back = &mut self.slots[self.front.other().index()];
        back.points.clear();
        back.points
            .extend(points.iter().map(|p| PointInstance::new(p.position, radius, color)));
        back.marker = marker;
    }

    /// Exchange the front/back roles. The sole mutator of the role index.
    pub fn swap(&mut self) {
        self.front = self.front.other();
    }

    /// Read-only view of the front slot for the renderer
    pub fn front(&self) -> &FrameGeometry {
        &self.slots[self.front.index()]
    }
}
