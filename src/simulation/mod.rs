pub mod states;
pub mod vector;
pub mod params;
pub mod engine;
pub mod integrator;
pub mod boundary;
pub mod collisions;
pub mod step;
pub mod scenario;
