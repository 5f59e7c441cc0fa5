//! Viewport tiling and render priorities.
//!
//! All rig cameras share one output surface. Sector `i` of `n` owns the
//! horizontal slot `[i/n, (i+1)/n)`, shifted by the horizontal offset and
//! wrapped around the surface edge. In stereo both eyes of a sector share the
//! slot: the left eye takes the bottom half of the band, the right eye the top.

use arena_scene::ViewportRect;

/// Which eye a camera renders for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Eye {
    Mono,
    Left,
    Right,
}

impl Eye {
    /// Sign of the lateral eye offset; left is positive.
    pub fn lateral_sign(self) -> f32 {
        match self {
            Eye::Mono => 0.0,
            Eye::Left => 1.0,
            Eye::Right => -1.0,
        }
    }

    /// Short label used in entity names.
    pub fn label(self) -> &'static str {
        match self {
            Eye::Mono => "",
            Eye::Left => "_L",
            Eye::Right => "_R",
        }
    }
}

/// How right-eye cameras are prioritised in stereo.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StereoPriority {
    /// Right eye of sector `i` gets `2i - n`, as the arena has always run.
    #[default]
    Legacy,
    /// Both eyes of sector `i` get `i - n`.
    Symmetric,
}

/// Output rectangle of the camera of sector `index` out of `total`.
pub fn viewport_rect(
    index: u32,
    total: u32,
    offset_h: f32,
    offset_v: f32,
    height: f32,
    eye: Eye,
) -> ViewportRect {
    let x = ((2.0 * (offset_h + index as f32 / total as f32)).rem_euclid(2.0)) / 2.0;
    let width = 1.0 / total as f32;

    match eye {
        Eye::Mono => ViewportRect::new(x, offset_v, width, height),
        Eye::Left => ViewportRect::new(x, offset_v, width, 0.5 * height),
        Eye::Right => ViewportRect::new(x, offset_v + 0.5 * height, width, 0.5 * height),
    }
}

/// Render priority of the camera of sector `index`; lower renders first.
///
/// Mono and left-eye cameras count up from `-camera_count`.
pub fn render_priority(index: u32, camera_count: u32, eye: Eye, stereo: StereoPriority) -> i32 {
    let index = index as i32;
    let count = camera_count as i32;
    match (eye, stereo) {
        (Eye::Right, StereoPriority::Legacy) => 2 * index - count,
        _ => index - count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    /// Checks that the slots tile the surface horizontally, allowing one slot
    /// to wrap around the right edge.
    fn assert_tiles(rects: &[ViewportRect]) {
        let n = rects.len();
        let width = 1.0 / n as f32;
        let mut xs: Vec<f32> = rects.iter().map(|r| r.x).collect();
        xs.sort_by(f32::total_cmp);

        assert!(xs[0] >= 0.0 && xs[n - 1] < 1.0);
        for pair in xs.windows(2) {
            assert!(
                (pair[1] - pair[0] - width).abs() < 1e-4,
                "gap or overlap between {} and {}",
                pair[0],
                pair[1]
            );
        }
        assert!((xs[0] + 1.0 - xs[n - 1] - width).abs() < 1e-4);
        for r in rects {
            assert!(approx_eq(r.width, width));
        }
    }

    #[test]
    fn test_mono_example() {
        let r = viewport_rect(2, 6, 0.0, 0.0, 1.0, Eye::Mono);
        assert!(approx_eq(r.x, 1.0 / 3.0));
        assert!(approx_eq(r.width, 1.0 / 6.0));
        assert_eq!(r.y, 0.0);
        assert_eq!(r.height, 1.0);
    }

    #[test]
    fn test_mono_slots_without_offset() {
        for n in 6..=72 {
            let rects: Vec<_> = (0..n)
                .map(|i| viewport_rect(i, n, 0.0, 0.1, 0.8, Eye::Mono))
                .collect();
            for (i, r) in rects.iter().enumerate() {
                assert!(approx_eq(r.x, i as f32 / n as f32));
                assert_eq!(r.y, 0.1);
                assert_eq!(r.height, 0.8);
            }
            assert_tiles(&rects);
        }
    }

    #[test]
    fn test_mono_slots_wrap_with_offset() {
        for n in [6, 7, 12, 30, 72] {
            let rects: Vec<_> = (0..n)
                .map(|i| viewport_rect(i, n, 0.3, 0.0, 1.0, Eye::Mono))
                .collect();
            assert_tiles(&rects);
        }
    }

    #[test]
    fn test_offset_wraps_past_one() {
        let a = viewport_rect(1, 6, 0.25, 0.0, 1.0, Eye::Mono);
        let b = viewport_rect(1, 6, 1.25, 0.0, 1.0, Eye::Mono);
        let c = viewport_rect(1, 6, -0.75, 0.0, 1.0, Eye::Mono);
        assert!(approx_eq(a.x, b.x));
        assert!(approx_eq(a.x, c.x));
    }

    #[test]
    fn test_stereo_bands() {
        for n in 6..=72 {
            let mut lefts = Vec::new();
            for i in 0..n {
                let left = viewport_rect(i, n, 0.1, 0.2, 0.6, Eye::Left);
                let right = viewport_rect(i, n, 0.1, 0.2, 0.6, Eye::Right);

                assert_eq!(left.x, right.x);
                assert_eq!(left.width, right.width);
                assert!(approx_eq(left.y, 0.2));
                assert!(approx_eq(left.top(), right.y));
                assert!(approx_eq(right.top(), 0.8));
                assert!(!left.overlaps(&right));
                lefts.push(left);
            }
            assert_tiles(&lefts);
        }
    }

    #[test]
    fn test_mono_priority() {
        assert_eq!(render_priority(0, 6, Eye::Mono, StereoPriority::Legacy), -6);
        assert_eq!(render_priority(5, 6, Eye::Mono, StereoPriority::Legacy), -1);

        let priorities: Vec<_> = (0..12)
            .map(|i| render_priority(i, 12, Eye::Mono, StereoPriority::Legacy))
            .collect();
        assert!(priorities.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_stereo_priority_legacy() {
        assert_eq!(render_priority(0, 6, Eye::Left, StereoPriority::Legacy), -6);
        assert_eq!(render_priority(0, 6, Eye::Right, StereoPriority::Legacy), -6);
        assert_eq!(render_priority(4, 6, Eye::Left, StereoPriority::Legacy), -2);
        assert_eq!(render_priority(4, 6, Eye::Right, StereoPriority::Legacy), 2);
    }

    #[test]
    fn test_stereo_priority_symmetric() {
        for i in 0..6 {
            assert_eq!(
                render_priority(i, 6, Eye::Left, StereoPriority::Symmetric),
                render_priority(i, 6, Eye::Right, StereoPriority::Symmetric)
            );
        }
    }

    #[test]
    fn test_eye_sign() {
        assert_eq!(Eye::Mono.lateral_sign(), 0.0);
        assert_eq!(Eye::Left.lateral_sign(), -Eye::Right.lateral_sign());
    }
}
