pub mod states;
pub mod params;
pub mod space;
pub mod scenario;
