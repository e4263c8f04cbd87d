pub mod command_model;
pub mod dispatcher;
pub mod transport;
