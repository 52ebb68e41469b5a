//! Procedural surface-of-revolution meshes and a square-path animation driver.
//!
//! A [`Profile`](geometry::Profile) maps normalized height to radius; the
//! [`TessellateRevolution`](tessellation::TessellateRevolution) operation
//! revolves it into a ring grid mesh with a capped bottom and smooth vertex
//! normals. The [`Driver`](animation::Driver) owns that mesh and moves it
//! around a [`SquarePath`](geometry::SquarePath) one tick at a time, leaving
//! windowing and drawing to the host.

pub mod animation;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod tessellation;

pub use error::{AmphoraError, Result};
