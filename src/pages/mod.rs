// src/pages/mod.rs
//
// Page-level components, one per route. Each page has a `mount` that builds
// its static markup and (for the flows) a `render` that reflects state.

pub mod cbc;
pub mod home;
pub mod visual;
