//! Physical constants and collision-geometry parameters.
//!
//! `CollisionScales` holds the display-driven scale factors used only by
//! collision testing. They are an explicit parameter object owned by the
//! `Space` and threaded into `collides_with`, so collision testing stays a
//! pure function of its inputs.

/// Gravitational constant (m^3 / (kg * s^2)).
pub const G: f64 = 6.6738e-11;

/// Scale factors converting physical radii and distances into a common
/// display unit for collision testing. They never affect gravity or
/// integration. All default to 1 (no scaling).
#[derive(Debug, Clone, Copy)]
pub struct CollisionScales {
    pub body_radius_scale: f64, // radius scale for non-stars
    pub star_radius_scale: f64, // radius scale for stars
    pub position_scale: f64,    // distance scale
}

impl CollisionScales {
    /// The radius scale that applies to a body of the given kind.
    pub fn radius_scale(&self, star: bool) -> f64 {
        if star {
            self.star_radius_scale
        } else {
            self.body_radius_scale
        }
    }
}

impl Default for CollisionScales {
    fn default() -> Self {
        Self {
            body_radius_scale: 1.0,
            star_radius_scale: 1.0,
            position_scale: 1.0,
        }
    }
}
