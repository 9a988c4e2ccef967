pub mod conditions;
pub mod corner;
pub mod integrator;
pub mod track;
