//! Build fully-initialized simulation spaces.
//!
//! Provides the canonical solar-system configuration loaded by
//! [`Space::new`], and maps a YAML-facing [`ScenarioConfig`] into a
//! configured runtime [`Space`].

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::space::Space;
use crate::simulation::states::{Body, NVec2, Rgb};

const YELLOW: Rgb = Rgb::new(255, 255, 0);
const GRAY: Rgb = Rgb::new(128, 128, 128);
const LIGHT_GRAY: Rgb = Rgb::new(211, 211, 211);
const ORANGE: Rgb = Rgb::new(255, 165, 0);
const BLUE: Rgb = Rgb::new(0, 0, 255);
const RED: Rgb = Rgb::new(255, 0, 0);

/// The canonical starting body set: the Sun, the planets out to Pluto, and
/// Earth's moon.
///
/// Positions are relative to the center of the simulation; every body starts
/// on the +x axis with a tangential (+y) velocity.
pub fn solar_system() -> Vec<Body> {
    // name, mass (kg), radius (m), color, star, x (m), vy (m/s)
    let table: [(&str, f64, i64, Rgb, bool, f64, f64); 11] = [
        ("Sun", 1.9891e30, 695_500_000, YELLOW, true, 0.0, 0.0),
        ("Mercury", 3.33e3, 2_440_000, GRAY, false, 57_900_000_000.0, 47_900.0),
        ("Venus", 4.869e24, 6_050_000, ORANGE, false, 108_000_000_000.0, 35_000.0),
        ("Earth", 5.9736e24, 6_378_100, BLUE, false, 1.5e11, 29_800.0),
        ("Moon", 7.3477e22, 1_738_100, LIGHT_GRAY, false, 1.50384e11, 29_800.0 + 1_022.0),
        ("Mars", 6.421e23, 3_397_200, RED, false, 227_940_000_000.0, 24_100.0),
        ("Jupiter", 1.9e27, 71_492_000, ORANGE, false, 778_330_000_000.0, 13_100.0),
        ("Saturn", 5.688e26, 60_268_000, YELLOW, false, 1_429_400_000_000.0, 9_640.0),
        ("Uranus", 8.686e25, 25_559_000, BLUE, false, 2_870_990_000_000.0, 6_810.0),
        ("Neptune", 1.024e26, 24_746_000, BLUE, false, 4_504_300_000_000.0, 5_430.0),
        ("Pluto", 1.305e22, 1_153_000, GRAY, false, 7.311e12, 4_666.0),
    ];

    table
        .into_iter()
        .map(|(name, m, radius, color, star, x, vy)| {
            Body::new(name, m, radius, color, star, NVec2::new(x, 0.0), NVec2::new(0.0, vy))
        })
        .collect()
}

/// A fully-initialized simulation built from a [`ScenarioConfig`].
pub struct Scenario {
    pub space: Space,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies: Vec<Body> = cfg
            .bodies
            .iter()
            .map(|bc: &BodyConfig| {
                Body::new(
                    bc.name.clone(),
                    bc.m,
                    bc.radius,
                    Rgb::new(bc.color[0], bc.color[1], bc.color[2]),
                    bc.star,
                    NVec2::new(bc.x[0], bc.x[1]),
                    NVec2::new(bc.v[0], bc.v[1]),
                )
            })
            .collect();

        let mut space = Space::with_bodies(bodies);

        // Engine settings from EngineConfig
        let e_cfg = cfg.engine;
        space.dt = e_cfg.dt;
        space.realistic_mode = e_cfg.realistic_mode;
        space.collision_mode = e_cfg.collision_mode;

        // Optional display scales consumed by collision testing
        if let Some(s) = cfg.scales {
            space.set_collision_scales(
                s.body_radius_scale,
                s.star_radius_scale,
                s.position_scale,
            );
        }

        Self { space }
    }
}
