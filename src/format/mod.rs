pub mod escape;
pub mod timestamp;
