//! Orb Dash - a 3D orb-collecting arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (input, movement, coin pool, session state)
//! - `renderer`: WebGPU rendering pipeline
//! - `tuning`: Data-driven game balance

pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Fixed world geometry and animation constants
pub mod consts {
    /// Half-width of the square arena, centered at the origin
    pub const WORLD_HALF: f32 = 20.0;
    /// The player's center keeps this margin to the arena edge
    pub const EDGE_MARGIN: f32 = 1.0;
    /// Resting height of the player's center above the ground plane
    pub const PLAYER_REST_HEIGHT: f32 = 0.62;
    /// Tolerance for the grounded test
    pub const GROUND_EPSILON: f32 = 1e-3;

    /// Coins spawn at least this far inside the arena edge
    pub const SPAWN_MARGIN: f32 = 2.0;
    /// Lower edge of the coin spawn height band
    pub const SPAWN_HEIGHT_BASE: f32 = 0.6;
    /// Extent of the coin spawn height band above its base
    pub const SPAWN_HEIGHT_SPAN: f32 = 2.5;

    /// Base height of the coin float sinusoid
    pub const COIN_FLOAT_BASE: f32 = 1.3;
    /// Amplitude of the coin float sinusoid
    pub const COIN_FLOAT_AMPLITUDE: f32 = 0.75;
    /// Angular frequency of the coin float sinusoid
    pub const COIN_FLOAT_FREQ: f32 = 2.0;
    /// Coin yaw spin rate (radians per second)
    pub const COIN_SPIN_RATE: f32 = 1.5;

    /// Largest delta-time a single tick will integrate
    pub const MAX_DT: f32 = 0.05;

    /// Camera offset above the player
    pub const CAMERA_RISE: f32 = 5.0;
    /// Camera offset behind the player (toward +z)
    pub const CAMERA_TRAIL: f32 = 9.0;
    /// Fraction of the remaining distance the camera covers per tick
    pub const CAMERA_SMOOTHING: f32 = 0.1;
    /// The camera aims this far above the player's center
    pub const LOOK_RISE: f32 = 1.0;
}

/// Clamp a horizontal coordinate into the playable arena extent
#[inline]
pub fn clamp_to_arena(v: f32) -> f32 {
    let limit = consts::WORLD_HALF - consts::EDGE_MARGIN;
    v.clamp(-limit, limit)
}
