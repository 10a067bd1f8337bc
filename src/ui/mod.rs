pub mod setup;
pub mod styles;
