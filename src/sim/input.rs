//! Player input sampling
//!
//! Converts per-frame control state into a normalized movement intent.
//! The platform layer merges both key mappings for each control (arrows +
//! WASD, Space/KeyZ for jump, Enter for confirm) before a tick reads it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Boolean control state for a single frame
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FrameInput {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// One-shot restart request; only honored while Finished
    pub confirm: bool,
}

/// Movement intent derived from held controls
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveIntent {
    /// Horizontal direction as (x, z); unit length or zero
    pub dir: Vec2,
    pub jump: bool,
}

impl MoveIntent {
    /// Sample the current control state. Pure: no side effects.
    /// Forward decrements z (into the screen), right increments x.
    pub fn sample(input: &FrameInput) -> Self {
        let mut dir = Vec2::ZERO;
        if input.forward {
            dir.y -= 1.0;
        }
        if input.back {
            dir.y += 1.0;
        }
        if input.left {
            dir.x -= 1.0;
        }
        if input.right {
            dir.x += 1.0;
        }
        if dir != Vec2::ZERO {
            dir = dir.normalize();
        }
        Self {
            dir,
            jump: input.jump,
        }
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.dir != Vec2::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_keys_is_zero_intent() {
        let intent = MoveIntent::sample(&FrameInput::default());
        assert_eq!(intent.dir, Vec2::ZERO);
        assert!(!intent.is_moving());
        assert!(!intent.jump);
    }

    #[test]
    fn test_single_axis() {
        let input = FrameInput {
            forward: true,
            ..Default::default()
        };
        let intent = MoveIntent::sample(&input);
        assert_eq!(intent.dir, Vec2::new(0.0, -1.0));
    }

    #[test]
    fn test_diagonal_is_normalized() {
        let input = FrameInput {
            forward: true,
            right: true,
            ..Default::default()
        };
        let intent = MoveIntent::sample(&input);
        assert!((intent.dir.length() - 1.0).abs() < 1e-6);
        assert!(intent.dir.x > 0.0);
        assert!(intent.dir.y < 0.0);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let input = FrameInput {
            left: true,
            right: true,
            forward: true,
            back: true,
            ..Default::default()
        };
        let intent = MoveIntent::sample(&input);
        assert_eq!(intent.dir, Vec2::ZERO);
        assert!(!intent.is_moving());
    }

    #[test]
    fn test_jump_passthrough() {
        let input = FrameInput {
            jump: true,
            ..Default::default()
        };
        assert!(MoveIntent::sample(&input).jump);
    }
}
