pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Body, BodyId, NVec2, Rgb};
pub use simulation::params::{CollisionScales, G};
pub use simulation::space::{Space, DEFAULT_DT};
pub use simulation::scenario::{solar_system, Scenario};

pub use configuration::config::{BodyConfig, EngineConfig, ScalesConfig, ScenarioConfig};

pub use benchmark::benchmark::bench_tick;
