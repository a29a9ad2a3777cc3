//! Engine data structures: geometry buffers, height grids, and instances.
//!
//! This module contains the core data types for scene representation:
//!
//! - `buffers` holds the four parallel vertex attribute streams
//! - `grid` is a regular lattice of surface samples (land or sea)
//! - `instance` describes one placed object before it is meshed

pub mod buffers;
pub mod grid;
pub mod instance;
