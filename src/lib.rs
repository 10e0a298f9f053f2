pub mod simulation;
pub mod configuration;
pub mod controls;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, BodyColor, BodyId, Container, NVec2, RemoveRequest, SpawnRequest, World};
pub use simulation::engine::{BoundaryTest, Engine};
pub use simulation::params::Parameters;
pub use simulation::integrator::euler_integrator;
pub use simulation::boundary::{resolve_boundaries, resolve_boundary, WallContact};
pub use simulation::collisions::{resolve_pair, resolve_pairs, ImpulseEvent};
pub use simulation::step::{step, StepReport};
pub use simulation::scenario::{random_position, Scenario};

pub use configuration::config::{BodyConfig, ControlsConfig, EngineConfig, ParametersConfig, ScenarioConfig};

pub use controls::input::{InputEvent, InputHandler, Request, SpawnControls, SpawnSettings};

pub use visualization::ballsim_vis2d::run_2d;

pub use benchmark::benchmark::{bench_step, bench_step_curve};
