//! Player movement integration
//!
//! Horizontal motion is direct kinematics from the intent direction;
//! vertical motion is a gravity-integrated velocity with a ground clamp.
//! The caller clamps delta-time before handing it in.

use crate::clamp_to_arena;
use crate::consts::PLAYER_REST_HEIGHT;
use crate::tuning::Tuning;

use super::input::MoveIntent;
use super::state::Player;

/// Advance the player by one tick. Mutates in place; never fails.
pub fn integrate(player: &mut Player, intent: &MoveIntent, tuning: &Tuning, dt: f32) {
    if intent.is_moving() {
        player.pos.x += intent.dir.x * tuning.move_speed * dt;
        player.pos.z += intent.dir.y * tuning.move_speed * dt;
        player.facing = intent.dir.x.atan2(intent.dir.y);
    }

    player.pos.x = clamp_to_arena(player.pos.x);
    player.pos.z = clamp_to_arena(player.pos.z);

    // Jump only triggers from the ground
    if intent.jump && player.grounded() {
        player.vertical_vel = tuning.jump_velocity;
    }

    player.vertical_vel += tuning.gravity * dt;
    player.pos.y += player.vertical_vel * dt;

    if player.pos.y <= PLAYER_REST_HEIGHT {
        player.pos.y = PLAYER_REST_HEIGHT;
        player.vertical_vel = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::WORLD_HALF;
    use crate::sim::input::FrameInput;
    use glam::Vec2;
    use proptest::prelude::*;

    const DT: f32 = 1.0 / 60.0;

    fn intent(x: f32, z: f32, jump: bool) -> MoveIntent {
        let dir = Vec2::new(x, z);
        MoveIntent {
            dir: if dir == Vec2::ZERO {
                dir
            } else {
                dir.normalize()
            },
            jump,
        }
    }

    #[test]
    fn test_horizontal_speed() {
        let tuning = Tuning::default();
        let mut player = Player::spawn();
        integrate(&mut player, &intent(1.0, 0.0, false), &tuning, DT);
        assert!((player.pos.x - tuning.move_speed * DT).abs() < 1e-5);
        assert_eq!(player.pos.z, 0.0);
    }

    #[test]
    fn test_facing_follows_movement() {
        let tuning = Tuning::default();
        let mut player = Player::spawn();
        // Moving straight forward (negative z) faces pi
        integrate(&mut player, &intent(0.0, -1.0, false), &tuning, DT);
        assert!((player.facing - std::f32::consts::PI).abs() < 1e-5);

        // Facing is held while idle
        let before = player.facing;
        integrate(&mut player, &intent(0.0, 0.0, false), &tuning, DT);
        assert_eq!(player.facing, before);
    }

    #[test]
    fn test_clamped_to_arena() {
        let tuning = Tuning::default();
        let mut player = Player::spawn();
        player.pos.x = WORLD_HALF - 1.0;
        integrate(&mut player, &intent(1.0, 0.0, false), &tuning, DT);
        assert!((player.pos.x - (WORLD_HALF - 1.0)).abs() < 1e-6);
    }

    #[test]
    fn test_jump_from_ground() {
        let tuning = Tuning::default();
        let mut player = Player::spawn();
        integrate(&mut player, &intent(0.0, 0.0, true), &tuning, DT);
        assert!(player.vertical_vel > 0.0);
        assert!(player.pos.y > PLAYER_REST_HEIGHT);
    }

    #[test]
    fn test_airborne_jump_request_is_ignored() {
        let tuning = Tuning::default();
        let mut player = Player::spawn();
        player.pos.y = 5.0;
        player.vertical_vel = 0.0;
        integrate(&mut player, &intent(0.0, 0.0, true), &tuning, DT);
        // Only gravity acted on the velocity
        assert!((player.vertical_vel - tuning.gravity * DT).abs() < 1e-5);
    }

    #[test]
    fn test_landing_clamps_and_zeroes_velocity() {
        let tuning = Tuning::default();
        let mut player = Player::spawn();
        player.pos.y = PLAYER_REST_HEIGHT + 0.01;
        player.vertical_vel = -5.0;
        integrate(&mut player, &intent(0.0, 0.0, false), &tuning, DT);
        assert_eq!(player.pos.y, PLAYER_REST_HEIGHT);
        assert_eq!(player.vertical_vel, 0.0);
    }

    #[test]
    fn test_jump_arc_returns_to_ground() {
        let tuning = Tuning::default();
        let mut player = Player::spawn();
        integrate(&mut player, &intent(0.0, 0.0, true), &tuning, DT);
        let mut peak = player.pos.y;
        for _ in 0..240 {
            integrate(&mut player, &intent(0.0, 0.0, false), &tuning, DT);
            peak = peak.max(player.pos.y);
        }
        assert!(peak > 1.5, "jump should clear the rest height, peak={peak}");
        assert_eq!(player.pos.y, PLAYER_REST_HEIGHT);
        assert_eq!(player.vertical_vel, 0.0);
    }

    proptest! {
        /// Bounds and ground-clamp invariants hold for arbitrary input
        /// sequences and frame times.
        #[test]
        fn prop_player_stays_in_bounds(
            steps in proptest::collection::vec((any::<u8>(), 0.0f32..0.05), 1..300)
        ) {
            let tuning = Tuning::default();
            let mut player = Player::spawn();
            for (bits, dt) in steps {
                let input = FrameInput {
                    forward: bits & 1 != 0,
                    back: bits & 2 != 0,
                    left: bits & 4 != 0,
                    right: bits & 8 != 0,
                    jump: bits & 16 != 0,
                    confirm: false,
                };
                integrate(&mut player, &MoveIntent::sample(&input), &tuning, dt);
                prop_assert!(player.pos.x.abs() <= WORLD_HALF - 1.0 + 1e-4);
                prop_assert!(player.pos.z.abs() <= WORLD_HALF - 1.0 + 1e-4);
                prop_assert!(player.pos.y >= PLAYER_REST_HEIGHT - 1e-4);
            }
        }

        /// Whenever vertical velocity was reset, the player sits exactly at
        /// rest height.
        #[test]
        fn prop_grounded_after_fall(start_y in 0.62f32..6.0, vel in -12.0f32..0.0) {
            let tuning = Tuning::default();
            let mut player = Player::spawn();
            player.pos.y = start_y;
            player.vertical_vel = vel;
            for _ in 0..600 {
                integrate(&mut player, &MoveIntent::sample(&FrameInput::default()), &tuning, DT);
            }
            prop_assert_eq!(player.pos.y, PLAYER_REST_HEIGHT);
            prop_assert_eq!(player.vertical_vel, 0.0);
            prop_assert!(player.grounded());
        }
    }
}
