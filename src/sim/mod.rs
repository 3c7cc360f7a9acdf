//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Delta-time clamped at the tick boundary
//! - No rendering or platform dependencies

pub mod camera;
pub mod coins;
pub mod input;
pub mod movement;
pub mod state;
pub mod tick;

pub use camera::CameraRig;
pub use coins::{Coin, CoinPool};
pub use input::{FrameInput, MoveIntent};
pub use state::{Outcome, Player, SessionPhase, WorldState};
pub use tick::tick;
