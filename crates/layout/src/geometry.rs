//! Sector geometry of the cylindrical arena.
//!
//! The arena wall is approximated by a regular polygon inscribed in a circle of
//! radius `screen_radius`: one flat screen per sector, each spanning the chord
//! of its sector.

use std::f32::consts::PI;

/// Size and placement of one sector's screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectorGeometry {
    /// Chord length of one sector
    pub screen_width: f32,
    /// Distance from the rig centre to the chord midpoint
    pub screen_distance: f32,
    /// Screen height, copied through unchanged
    pub screen_height: f32,
}

impl SectorGeometry {
    /// Compute the screen dimensions for `camera_count` sectors.
    ///
    /// Width and distance depend only on the count and radius.
    pub fn compute(camera_count: u32, screen_radius: f32, screen_height: f32) -> Self {
        let half_angle = PI / camera_count as f32;
        Self {
            screen_width: 2.0 * half_angle.sin() * screen_radius,
            screen_distance: half_angle.cos() * screen_radius,
            screen_height,
        }
    }

    /// Total width of all screens, the perimeter of the inscribed polygon.
    pub fn perimeter(&self, camera_count: u32) -> f32 {
        self.screen_width * camera_count as f32
    }
}

/// Angular width of one sector in degrees.
pub fn sector_angle(camera_count: u32) -> f32 {
    360.0 / camera_count as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_six_sectors() {
        let g = SectorGeometry::compute(6, 4.9, 4.0);
        // sin(30°) = 0.5, so a hexagon's side equals its radius
        assert!(approx_eq(g.screen_width, 4.9), "got {}", g.screen_width);
        assert!(
            approx_eq(g.screen_distance, 4.9 * 0.866_025_4),
            "got {}",
            g.screen_distance
        );
        assert_eq!(g.screen_height, 4.0);
    }

    #[test]
    fn test_independent_of_height() {
        for n in 6..=72 {
            let low = SectorGeometry::compute(n, 4.9, 1.0);
            let high = SectorGeometry::compute(n, 4.9, 12.0);
            assert_eq!(low.screen_width, high.screen_width);
            assert_eq!(low.screen_distance, high.screen_distance);
        }
    }

    #[test]
    fn test_chord_and_apothem_reach_radius() {
        for n in 6..=72 {
            let g = SectorGeometry::compute(n, 4.9, 4.0);
            let corner = (g.screen_distance.powi(2) + (g.screen_width / 2.0).powi(2)).sqrt();
            assert!(approx_eq(corner, 4.9), "n = {}: corner at {}", n, corner);
        }
    }

    #[test]
    fn test_perimeter_below_circumference() {
        // Chords are shorter than their arcs, so the polygon perimeter stays
        // under 2πR and approaches it as the count grows.
        let circumference = 2.0 * PI * 4.9;
        let mut previous = 0.0;
        for n in 6..=72 {
            let perimeter = SectorGeometry::compute(n, 4.9, 4.0).perimeter(n);
            assert!(perimeter < circumference);
            assert!(perimeter > previous);
            previous = perimeter;
        }
        assert!(circumference - previous < 0.02);
    }

    #[test]
    fn test_sector_angle() {
        assert_eq!(sector_angle(6), 60.0);
        assert_eq!(sector_angle(72), 5.0);
    }
}
