//! Vertex types for 3D rendering

use bytemuck::{Pod, Zeroable};

/// Position + color vertex
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(position: [f32; 3], color: [f32; 4]) -> Self {
        Self { position, color }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Night-sky scene palette
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.047, 0.075, 0.149, 1.0];
    pub const GROUND: [f32; 4] = [0.071, 0.196, 0.286, 1.0];
    pub const GRID: [f32; 4] = [0.318, 0.463, 1.0, 0.6];
    pub const PLAYER: [f32; 4] = [0.451, 0.820, 1.0, 1.0];
    pub const COIN: [f32; 4] = [1.0, 0.882, 0.463, 1.0];
    pub const STAR: [f32; 4] = [0.525, 0.702, 1.0, 1.0];
}
