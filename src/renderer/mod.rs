//! WebGPU rendering module
//!
//! Triangle-list rendering of the whole scene with a single colored-vertex
//! pipeline; the vertex buffer is rebuilt from world state every frame.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
