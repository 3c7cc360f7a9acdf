//! Coin pool management
//!
//! Coins live in a dense vector; collection removes by swap_remove so a
//! tick never reallocates the pool.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// A floating collectible orb
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coin {
    pub pos: Vec3,
    /// Per-coin offset into the float sinusoid, in [0, 2π)
    pub float_phase: f32,
    /// Cosmetic spin angle (radians)
    pub yaw: f32,
}

/// Dense pool of active coins. The pool is the sole owner of its coins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoinPool {
    coins: Vec<Coin>,
}

impl CoinPool {
    pub fn new() -> Self {
        Self { coins: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.coins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coin> {
        self.coins.iter()
    }

    /// Append one coin at a random arena position inside the spawn margin,
    /// within the spawn height band, with a random float phase.
    pub fn spawn(&mut self, rng: &mut Pcg32) {
        let extent = WORLD_HALF - SPAWN_MARGIN;
        let x = rng.random_range(-extent..extent);
        let z = rng.random_range(-extent..extent);
        let y = SPAWN_HEIGHT_BASE + rng.random_range(0.0..SPAWN_HEIGHT_SPAN);
        let float_phase = rng.random_range(0.0..TAU);
        self.coins.push(Coin {
            pos: Vec3::new(x, y, z),
            float_phase,
            yaw: 0.0,
        });
    }

    /// Fill the pool at session start
    pub fn spawn_initial(&mut self, n: usize, rng: &mut Pcg32) {
        for _ in 0..n {
            self.spawn(rng);
        }
    }

    /// Drop every coin (reset)
    pub fn clear(&mut self) {
        self.coins.clear();
    }

    /// Nudge the pool back toward the target band: at most one coin per
    /// call when below `min_count`, never a bulk refill.
    pub fn replenish(&mut self, min_count: usize, rng: &mut Pcg32) {
        if self.coins.len() < min_count {
            self.spawn(rng);
        }
    }

    /// Remove every coin within `radius` of `center`; returns how many
    /// were collected.
    pub fn collect_within(&mut self, center: Vec3, radius: f32) -> u32 {
        let mut collected = 0;
        let mut i = 0;
        while i < self.coins.len() {
            if self.coins[i].pos.distance(center) < radius {
                self.coins.swap_remove(i);
                collected += 1;
            } else {
                i += 1;
            }
        }
        collected
    }

    /// Float and spin animation. Cosmetic, but the floated height is what
    /// the collection test sees.
    pub fn animate(&mut self, elapsed: f32, dt: f32) {
        for coin in &mut self.coins {
            coin.yaw += COIN_SPIN_RATE * dt;
            coin.pos.y = COIN_FLOAT_BASE
                + (elapsed * COIN_FLOAT_FREQ + coin.float_phase).sin() * COIN_FLOAT_AMPLITUDE;
        }
    }
}
