pub mod command;
pub mod parse;
pub mod resample;
pub mod shapes;
