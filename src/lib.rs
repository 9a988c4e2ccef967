pub mod constants;
pub mod errors;
pub mod input;
pub mod lap_system;
pub mod report_system;
pub mod simulator;
pub mod utils;
pub mod vehicle;

pub use constants::*;
pub use errors::{Result, SimulationError};
pub use input::parameters::{CarParameters, ParamValue, ParameterMap, TrackParameters};
pub use input::parser::parse_parameters;
pub use simulator::Simulator;

// Re-export the physics models
pub use vehicle::acceleration::AccelerationModel;
pub use vehicle::aerodynamics::{AeroForces, AeroModel};
pub use vehicle::engine::EngineModel;
pub use vehicle::tire::TireGripModel;

// Re-export commonly used items from lap_system
pub use lap_system::corner::{BisectionConfig, CornerSpeedSolver};
pub use lap_system::integrator::{LapTimeIntegrator, LapTrace, SegmentTiming};
pub use lap_system::track::{Segment, REFERENCE_CIRCUIT};

// Re-export commonly used items from report_system
pub use report_system::comparison::{compare, Comparison};
pub use report_system::result::{Breakdown, ResultAssembler, SimulationResult};

pub use utils::vector2d::Vector2D;
