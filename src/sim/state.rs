//! Session state and core simulation types

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::tuning::Tuning;

use super::camera::CameraRig;
use super::coins::CoinPool;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Countdown live, player in control
    Running,
    /// Countdown expired; gameplay frozen until a reset
    Finished,
}

/// Win/lose classification, fixed at the moment the countdown expires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
}

/// The player avatar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec3,
    /// Vertical velocity; zero while resting on the ground
    pub vertical_vel: f32,
    /// Yaw derived from the last non-zero movement direction
    pub facing: f32,
}

impl Player {
    /// Player at the arena center, at rest
    pub fn spawn() -> Self {
        Self {
            pos: Vec3::new(0.0, PLAYER_REST_HEIGHT, 0.0),
            vertical_vel: 0.0,
            facing: 0.0,
        }
    }

    /// At or below rest height, within epsilon
    #[inline]
    pub fn grounded(&self) -> bool {
        self.pos.y <= PLAYER_REST_HEIGHT + GROUND_EPSILON
    }
}

/// Complete session state, owned by the frame driver
#[derive(Debug, Clone)]
pub struct WorldState {
    /// Seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub player: Player,
    pub coins: CoinPool,
    pub camera: CameraRig,
    pub score: u32,
    /// Counts down from `tuning.session_seconds`; clamps at zero
    pub time_remaining: f32,
    /// Time since session start; drives the coin float animation
    pub elapsed: f32,
    pub phase: SessionPhase,
    /// Set exactly once, on the Running -> Finished transition
    pub outcome: Option<Outcome>,
    pub(crate) rng: Pcg32,
}

impl WorldState {
    /// New session with default balance
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut coins = CoinPool::new();
        coins.spawn_initial(tuning.initial_coins, &mut rng);
        Self {
            seed,
            player: Player::spawn(),
            coins,
            camera: CameraRig::new(),
            score: 0,
            time_remaining: tuning.session_seconds,
            elapsed: 0.0,
            phase: SessionPhase::Running,
            outcome: None,
            rng,
            tuning,
        }
    }

    /// Restart transition: Finished -> Running with a fresh session.
    /// The camera rig keeps its current position and eases back on its own.
    pub fn reset(&mut self) {
        self.score = 0;
        self.time_remaining = self.tuning.session_seconds;
        self.elapsed = 0.0;
        self.phase = SessionPhase::Running;
        self.outcome = None;
        self.player = Player::spawn();
        self.coins.clear();
        let n = self.tuning.initial_coins;
        self.coins.spawn_initial(n, &mut self.rng);
    }

    /// Seconds left as displayed; the countdown rounds up
    pub fn time_display(&self) -> u32 {
        self.time_remaining.ceil() as u32
    }

    /// Status line plus win flag, present only while Finished
    pub fn status(&self) -> Option<(String, bool)> {
        match self.outcome? {
            Outcome::Win => Some((
                format!("Cleared! You collected {} orbs!", self.score),
                true,
            )),
            Outcome::Lose => Some((
                format!(
                    "Time's up... collect {} or more orbs to clear!",
                    self.tuning.target_score
                ),
                false,
            )),
        }
    }
}
