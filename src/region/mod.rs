pub mod region_model;
pub mod registry;
