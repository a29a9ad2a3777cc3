//! Surfaces sampled on a lattice: land and sea.
//!
//! - `heightfield` synthesizes the persistent land grid
//! - `water` synthesizes the per-step sea grid and culls quads hidden by land
//! - `triangulate` turns the land grid into coloured triangles

pub mod heightfield;
pub mod triangulate;
pub mod water;
