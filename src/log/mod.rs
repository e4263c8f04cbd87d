pub mod entry;
pub mod renderer;
pub mod template;
