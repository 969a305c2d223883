pub mod identity;
pub mod properties;
pub mod render;
