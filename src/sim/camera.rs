//! Trailing third-person camera
//!
//! The rig eases a fixed fraction of the remaining distance toward a
//! player-relative offset each tick and always aims just above the player.
//! The smoothing is per-tick exponential, frame-rate dependent by design.

use glam::{Mat4, Vec3};

use crate::consts::*;

#[derive(Debug, Clone)]
pub struct CameraRig {
    pub pos: Vec3,
    /// Point the camera is aimed at
    pub look_at: Vec3,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraRig {
    /// Initial framing: above and behind the arena center
    pub fn new() -> Self {
        Self {
            pos: Vec3::new(0.0, 8.0, 14.0),
            look_at: Vec3::new(0.0, LOOK_RISE, 0.0),
        }
    }

    /// Ease toward the trailing offset and re-aim at the player
    pub fn follow(&mut self, player_pos: Vec3) {
        let target = player_pos + Vec3::new(0.0, CAMERA_RISE, CAMERA_TRAIL);
        self.pos += (target - self.pos) * CAMERA_SMOOTHING;
        self.look_at = player_pos + Vec3::new(0.0, LOOK_RISE, 0.0);
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.pos, self.look_at, Vec3::Y)
    }

    /// 60 degree vertical field of view, matching the scene framing
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(60.0_f32.to_radians(), aspect, 0.1, 500.0)
    }

    pub fn view_projection_matrix(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }
}
