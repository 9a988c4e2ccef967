pub mod comparison;
pub mod result;
