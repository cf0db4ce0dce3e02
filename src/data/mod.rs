pub mod input;
pub mod loader;
pub mod validation;
