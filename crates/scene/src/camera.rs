//! Camera output settings and off-axis projection parameters.
//!
//! Rig cameras do not carry a projection matrix. Each one renders into a
//! rectangle of a shared output surface and hands an [`OffAxisParams`] bundle
//! to the projection collaborator, which derives an asymmetric frustum from the
//! camera's pose relative to its screen plane every frame.

use crate::graph::EntityHandle;

/// Offset applied to the near clip distance estimated from the screen plane.
pub const NEAR_CLIP_DISTANCE_OFFSET: f32 = -0.01;

/// A normalized rectangle of the output surface.
///
/// Origin is the bottom-left corner; all values are fractions of the surface
/// size in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ViewportRect {
    /// The whole output surface.
    pub const FULL: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 1.0,
        height: 1.0,
    };

    /// Create a rectangle from its bottom-left corner and size.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge.
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Whether the interiors of two rectangles intersect.
    ///
    /// Rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &ViewportRect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.top()
            && other.y < self.top()
    }

    /// Convert to a pixel rectangle `(x, y, width, height)` on a surface of the
    /// given size, keeping the bottom-left origin.
    ///
    /// Edges are rounded independently so adjacent rectangles stay adjacent.
    pub fn to_pixels(&self, surface_width: u32, surface_height: u32) -> (u32, u32, u32, u32) {
        let sw = surface_width as f32;
        let sh = surface_height as f32;
        let x0 = (self.x * sw).round() as u32;
        let y0 = (self.y * sh).round() as u32;
        let x1 = (self.right() * sw).round() as u32;
        let y1 = (self.top() * sh).round() as u32;
        (x0, y0, x1.saturating_sub(x0), y1.saturating_sub(y0))
    }
}

/// Parameters handed to the off-axis projection collaborator for one camera.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OffAxisParams {
    /// Screen plane the frustum is fitted to
    pub screen: EntityHandle,
    /// Let the projection estimate the view frustum from the screen corners
    pub estimate_view_frustum: bool,
    /// Let the projection derive the near clip plane from the screen distance
    pub set_near_clip_plane: bool,
    /// Added to the estimated near clip distance
    pub near_clip_distance_offset: f32,
}

impl OffAxisParams {
    /// Bundle for a camera looking through `screen`.
    pub fn new(screen: EntityHandle, estimate_view_frustum: bool, clip_to_arena: bool) -> Self {
        Self {
            screen,
            estimate_view_frustum,
            set_near_clip_plane: clip_to_arena,
            near_clip_distance_offset: NEAR_CLIP_DISTANCE_OFFSET,
        }
    }
}

/// Output settings of a rig camera.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraSettings {
    /// Where on the shared output surface the camera renders
    pub viewport: ViewportRect,
    /// Render priority; lower values are drawn first
    pub depth: i32,
    /// Near clip plane, or `None` to leave it to the off-axis projection
    pub near_clip: Option<f32>,
    /// Far clip plane
    pub far_clip: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = ViewportRect::new(0.25, 0.5, 0.25, 0.5);
        assert_eq!(r.right(), 0.5);
        assert_eq!(r.top(), 1.0);
    }

    #[test]
    fn test_adjacent_rects_do_not_overlap() {
        let a = ViewportRect::new(0.0, 0.0, 0.5, 1.0);
        let b = ViewportRect::new(0.5, 0.0, 0.5, 1.0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));

        let bottom = ViewportRect::new(0.0, 0.0, 0.5, 0.5);
        let top = ViewportRect::new(0.0, 0.5, 0.5, 0.5);
        assert!(!bottom.overlaps(&top));
    }

    #[test]
    fn test_overlapping_rects() {
        let a = ViewportRect::new(0.0, 0.0, 0.6, 1.0);
        let b = ViewportRect::new(0.5, 0.0, 0.5, 1.0);
        assert!(a.overlaps(&b));
        assert!(ViewportRect::FULL.overlaps(&a));
    }

    #[test]
    fn test_to_pixels_tiles_without_gaps() {
        let thirds: Vec<_> = (0..3)
            .map(|i| ViewportRect::new(i as f32 / 3.0, 0.0, 1.0 / 3.0, 1.0))
            .map(|r| r.to_pixels(1000, 200))
            .collect();

        let mut expected_x = 0;
        for (x, y, w, h) in &thirds {
            assert_eq!(*x, expected_x);
            assert_eq!(*y, 0);
            assert_eq!(*h, 200);
            expected_x += w;
        }
        assert_eq!(expected_x, 1000);
    }

    #[test]
    fn test_off_axis_params_defaults() {
        let mut handles = slotmap::SlotMap::<EntityHandle, ()>::with_key();
        let screen = handles.insert(());

        let params = OffAxisParams::new(screen, true, false);
        assert_eq!(params.screen, screen);
        assert!(params.estimate_view_frustum);
        assert!(!params.set_near_clip_plane);
        assert_eq!(params.near_clip_distance_offset, -0.01);
    }
}
