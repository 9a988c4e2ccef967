pub mod parameters;
pub mod parser;
