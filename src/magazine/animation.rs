//! Idle animation for the magazine model
//!
//! A pure function of time since mount: no integration, no accumulated state,
//! so frame rate and restarts don't change the motion.

/// Yaw sway frequency (rad/s) and amplitude (rad)
const SWAY_FREQ: f32 = 0.3;
const SWAY_AMPLITUDE: f32 = 0.1;

/// Vertical bob frequency (rad/s) and amplitude (scene units)
const BOB_FREQ: f32 = 1.5;
const BOB_AMPLITUDE: f32 = 0.05;

/// Per-frame transform offset applied to the model
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnimationOffset {
    /// Rotation around the Y axis (radians)
    pub rotation_y: f32,
    /// Translation along Y (scene units)
    pub position_y: f32,
}

/// Offset at `elapsed` seconds since the surface was mounted
pub fn offset_at(elapsed: f32) -> AnimationOffset {
    AnimationOffset {
        rotation_y: (elapsed * SWAY_FREQ).sin() * SWAY_AMPLITUDE,
        position_y: (elapsed * BOB_FREQ).sin() * BOB_AMPLITUDE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_rest_at_mount() {
        assert_eq!(offset_at(0.0), AnimationOffset::default());
    }

    #[test]
    fn test_sway_peak() {
        // sin(0.3 t) = 1 at t = (pi/2) / 0.3 ~= 5.236
        let t = FRAC_PI_2 / SWAY_FREQ;
        assert!((t - 5.236).abs() < 0.001);
        let off = offset_at(t);
        assert!((off.rotation_y - 0.1).abs() < 1e-5);
    }

    #[test]
    fn test_bounded_and_repeatable() {
        for i in 0..1000 {
            let t = i as f32 * 0.137;
            let a = offset_at(t);
            assert!(a.rotation_y.abs() <= SWAY_AMPLITUDE + 1e-6);
            assert!(a.position_y.abs() <= BOB_AMPLITUDE + 1e-6);
            assert_eq!(a, offset_at(t));
        }
    }
}
