//! Planar slicing of triangle meshes.
//!
//! Triangles are validated into a [`Mesh`], which keeps the bounding box,
//! surface area and volume of the model and can be scaled and moved. A
//! [`Slicer`] then cuts the mesh into layers of constant thickness, each a
//! list of 2d line segments.
pub mod error;
pub mod geo;
pub mod mesh;
pub mod settings;
pub mod slicer;
pub mod stl_op;

#[cfg(test)]
mod data;

pub use error::SliceError;
pub use geo::{Line2, Triangle, AABB};
pub use mesh::Mesh;
pub use settings::Settings;
pub use slicer::{Layer, LayerAnchor, Slicer};
