pub mod slider;
pub mod input;
