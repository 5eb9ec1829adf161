//! Core state types for the orbit simulation.
//!
//! Defines the 2D body struct and its physics operations:
//! - `Body` using `NVec2` (position/speed vectors)
//! - `BodyId` stable identity handles
//! - `Rgb` body color
//!
//! A body accumulates gravitational acceleration from other bodies,
//! integrates its own position, and can collide/merge with another body.

use std::sync::atomic::{AtomicU64, Ordering};

use nalgebra::Vector2;

use crate::simulation::params::{CollisionScales, G};

pub type NVec2 = Vector2<f64>;

/// Stable identity handle for a body.
///
/// Ids come from a process-wide counter, so two bodies never share one and
/// self-interaction checks reduce to an id comparison. Cloning a body keeps
/// its id: a clone is the same entity, not a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(u64);

static NEXT_BODY_ID: AtomicU64 = AtomicU64::new(1);

impl BodyId {
    fn next() -> Self {
        BodyId(NEXT_BODY_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// RGB color carried by each body for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Per-channel average of two colors, used when bodies merge.
    pub fn blend(self, other: Rgb) -> Rgb {
        Rgb {
            r: ((self.r as u16 + other.r as u16) / 2) as u8,
            g: ((self.g as u16 + other.g as u16) / 2) as u8,
            b: ((self.b as u16 + other.b as u16) / 2) as u8,
        }
    }
}

/// A point-mass body affected by gravity.
///
/// Stars are gravity sources like any other body but stay anchored unless
/// the space runs in realistic mode. `radius` is in meters and only matters
/// for collision testing (scaled by [`CollisionScales`]) and for rendering.
#[derive(Debug, Clone)]
pub struct Body {
    pub id: BodyId,
    pub name: String,
    pub star: bool, // true if the body is a star
    pub mass: f64, // mass (kg)
    pub radius: i64, // radius (m)
    pub color: Rgb,
    pub position: NVec2, // position (m)
    pub speed: NVec2, // velocity (m/s)
}

impl Body {
    /// Create a full physical body.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        mass: f64,
        radius: i64,
        color: Rgb,
        star: bool,
        position: NVec2,
        speed: NVec2,
    ) -> Self {
        Self {
            id: BodyId::next(),
            name: name.into(),
            star,
            mass,
            radius,
            color,
            position,
            speed,
        }
    }

    /// Create a massless preview marker (mass = -1, zero speed).
    ///
    /// Markers exist only so a view layer can draw a body being placed.
    /// They must never be added to a `Space`: a negative mass would flip the
    /// sign of every gravity contribution they take part in.
    pub fn marker(radius: i64, color: Rgb, star: bool, x: f64, y: f64) -> Self {
        Self::new("Body", -1.0, radius, color, star, NVec2::new(x, y), NVec2::zeros())
    }

    // How it works
    // ------------
    // Fg = G*M*m/r^2, F = m*a  =>  a = G*M/r^2, directed toward the other body
    // v = v + a*dt   (gravity pass)
    // x = x + v*dt   (integration, afterwards)

    /// Accumulate the gravitational pull of `other` onto this body's speed.
    ///
    /// No-op when `other` is this body (same id) and when the two bodies sit
    /// at the exact same position: a coincident pair contributes nothing
    /// rather than an infinite acceleration.
    pub fn accumulate_gravity(&mut self, other: &Body, dt: f64) {
        if self.id == other.id {
            return; // a body can't pull on itself
        }

        // r points from the other body to this one
        let r = self.position - other.position;
        let r2 = r.norm_squared();
        if r2 == 0.0 {
            return;
        }

        // a = -G*M/r^2 along unit(r): attractive, toward the other body
        let accel = (-G * other.mass / r2) * r.normalize();
        self.speed += accel * dt;
    }

    /// Advance the body's position by one time step.
    ///
    /// Semi-implicit Euler: the speed already includes this tick's gravity,
    /// so positions move with the updated velocity. Swapping that order
    /// changes the long-term energy behavior.
    pub fn integrate(&mut self, dt: f64) {
        self.position += self.speed * dt;
    }

    /// Test whether this body overlaps `other` under the given display scales.
    ///
    /// Radii and distances are converted into display units first, so this
    /// detects collisions as they *appear* on screen, not as they would be
    /// physically. The scaled values are truncated before comparison; the
    /// truncation is done in f64 to avoid integer overflow at astronomical
    /// distances.
    pub fn collides_with(&self, other: &Body, scales: &CollisionScales) -> bool {
        if self.id == other.id {
            return false;
        }

        // Squared center distance, in display units
        let dist2 = ((self.position - other.position).norm_squared()
            * scales.position_scale
            * scales.position_scale)
            .trunc();

        // Displayed radius of each body, then the squared radius sum
        let ra = (self.radius as f64 * scales.radius_scale(self.star)).trunc();
        let rb = (other.radius as f64 * scales.radius_scale(other.star)).trunc();
        let sum = ra + rb;

        dist2 < sum * sum
    }

    /// Perfectly inelastic merge of `other` into this body.
    ///
    /// Conserves momentum: the new speed is the mass-weighted average of the
    /// two speeds over the combined mass. The color becomes the per-channel
    /// average. The caller discards `other` afterwards.
    pub fn merge(&mut self, other: &Body) {
        let mass_before = self.mass;
        self.mass += other.mass;

        // v = (m1*u1 + m2*u2) / (m1 + m2)
        self.speed = (self.speed * mass_before + other.speed * other.mass) / self.mass;
        self.color = self.color.blend(other.color);
    }
}
