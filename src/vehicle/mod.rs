pub mod acceleration;
pub mod aerodynamics;
pub mod engine;
pub mod tire;
