pub mod controller;
pub mod error;
pub mod panel_model;
