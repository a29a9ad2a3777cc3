//! scenery-ngin
//!
//! Procedural synthesis of a small outdoor scene: a heightfield island,
//! an animated sea, a sky box and scattered trees, rocks, grass and houses.
//! Geometry is produced as four flat attribute streams split into a static
//! half (land and objects) that is rebuilt only when the world is regenerated,
//! and a dynamic half (sky and water) that is rebuilt every animation step.
//!
//! High-level modules
//! - `camera`: automated orbit camera and view/projection matrices
//! - `config`: scene tunables and TOML loading
//! - `context`: the scene owner: land grid, geometry buffers, partition bookkeeping
//! - `data_structures`: geometry buffers, height grids and placed instances
//! - `flow`: the frame loop driving animation steps and regenerations
//! - `geometry` and `math`: vector helpers and triangle normals
//! - `placement`: stochastic object placement with house keep-out zones
//! - `render`: the seam towards a rendering backend
//! - `resources`: parametric meshes and the skybox
//! - `terrain`: land and sea surfaces and their triangulation
//!

pub mod camera;
pub mod config;
pub mod context;
pub mod data_structures;
pub mod error;
pub mod flow;
pub mod geometry;
pub mod math;
pub mod placement;
pub mod render;
pub mod resources;
pub mod terrain;

// Re-exports commonly used types for convenience in downstream code.
pub use config::SceneConfig;
pub use context::Context;
pub use error::{Result, SceneError};
pub use flow::FrameLoop;
pub use cgmath::*;
