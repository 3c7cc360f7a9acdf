//! Data-driven game balance
//!
//! Defaults match the shipped game. A JSON blob can override any subset of
//! fields for playtesting; unspecified fields keep their defaults.

use serde::{Deserialize, Serialize};

/// Gameplay balance values
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Horizontal movement speed (units per second)
    pub move_speed: f32,
    /// Vertical velocity applied when a jump triggers
    pub jump_velocity: f32,
    /// Vertical acceleration (negative is down)
    pub gravity: f32,
    /// Countdown length in seconds
    pub session_seconds: f32,
    /// Orbs required for a winning session
    pub target_score: u32,
    /// Pool size at session start and after reset
    pub initial_coins: usize,
    /// Below this pool size, one coin is spawned per tick
    pub min_coins: usize,
    /// Player-to-coin distance that collects
    pub collect_radius: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            move_speed: 8.5,
            jump_velocity: 9.5,
            gravity: -22.0,
            session_seconds: 60.0,
            target_score: 20,
            initial_coins: 14,
            min_coins: 12,
            collect_radius: 0.9,
        }
    }
}

impl Tuning {
    /// Parse a JSON override blob
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
