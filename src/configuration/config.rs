//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]   – global simulation options (time step, modes)
//! - [`ScalesConfig`]   – optional display scales for collision testing
//! - [`BodyConfig`]     – initial state for each body
//! - [`ScenarioConfig`] – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   dt: 3600                # simulated seconds per tick
//!   realistic_mode: false   # true -> stars move under gravity
//!   collision_mode: true    # true -> detect and merge collisions
//!
//! scales:                   # optional, defaults to 1/1/1
//!   body_radius_scale: 1.0
//!   star_radius_scale: 1.0
//!   position_scale: 1.0
//!
//! bodies:
//!   - name: "Sun"
//!     star: true
//!     m: 1.9891e30
//!     radius: 695500000
//!     color: [255, 255, 0]
//!     x: [0.0, 0.0]
//!     v: [0.0, 0.0]
//!   - name: "Earth"
//!     star: false
//!     m: 5.9736e24
//!     radius: 6378100
//!     color: [0, 0, 255]
//!     x: [1.5e11, 0.0]
//!     v: [0.0, 29800.0]
//! ```

use serde::Deserialize;

/// Global simulation options for a scenario.
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub dt: i64,              // time step per tick (s)
    pub realistic_mode: bool, // `true` - stars move under gravity
    pub collision_mode: bool, // `true` - detect and resolve collisions each tick
}

/// Display-driven scale factors for collision testing (all default to 1).
#[derive(Deserialize, Debug, Clone, Copy)]
pub struct ScalesConfig {
    #[serde(default = "one")]
    pub body_radius_scale: f64,
    #[serde(default = "one")]
    pub star_radius_scale: f64,
    #[serde(default = "one")]
    pub position_scale: f64,
}

fn one() -> f64 {
    1.0
}

/// Configuration for a single body's initial state.
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub name: String,    // display name
    pub star: bool,      // `true` if the body is a star
    pub m: f64,          // mass (kg)
    pub radius: i64,     // radius (m), used for collision testing and rendering
    pub color: [u8; 3],  // RGB color
    pub x: [f64; 2],     // initial position (m)
    pub v: [f64; 2],     // initial velocity (m/s)
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,            // simulation options
    pub scales: Option<ScalesConfig>,    // optional collision scales
    pub bodies: Vec<BodyConfig>,         // initial state of the system
}
