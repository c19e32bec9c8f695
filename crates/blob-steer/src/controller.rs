use cmd_link::VelocityCommand;
use serde::{Deserialize, Serialize};

/// Proportional-only steering gains. No integral or derivative term and no
/// hysteresis at the deadband boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SteeringConfig {
    /// Cruise speed while the target is off-center, m/s.
    pub linear_speed: f32,
    /// Yaw rate per pixel of horizontal error; applied negated so a target
    /// right of center turns the rover right.
    pub angular_gain: f32,
    /// Stop when |error| falls below this many pixels.
    pub deadband_px: f32,
}

impl Default for SteeringConfig {
    fn default() -> Self {
        Self {
            linear_speed: 0.1,
            angular_gain: 0.01,
            deadband_px: 20.0,
        }
    }
}

/// Turns a per-frame centroid offset into exactly one velocity command.
pub struct SteeringController {
    config: SteeringConfig,
}

impl SteeringController {
    pub fn new(config: SteeringConfig) -> Self {
        Self { config }
    }

    /// Horizontal pixel error of the centroid relative to the frame center.
    pub fn error_x(&self, centroid_x: f32, frame_width: u32) -> f32 {
        centroid_x - frame_width as f32 / 2.0
    }

    /// The command for this frame: proportional steering, or the stop
    /// command once the target is inside the deadband.
    pub fn command(&self, error_x: f32) -> VelocityCommand {
        if error_x.abs() < self.config.deadband_px {
            VelocityCommand::stop()
        } else {
            VelocityCommand::new(self.config.linear_speed, -self.config.angular_gain * error_x)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn off_center_target_steers_proportionally() {
        let ctl = SteeringController::new(SteeringConfig::default());
        let cmd = ctl.command(25.0);
        assert_eq!(cmd.linear, 0.1);
        assert!((cmd.angular - (-0.25)).abs() < 1e-6);

        let cmd = ctl.command(-25.0);
        assert!((cmd.angular - 0.25).abs() < 1e-6);
    }

    #[test]
    fn centered_target_stops() {
        let ctl = SteeringController::new(SteeringConfig::default());
        assert!(ctl.command(10.0).is_stop());
        assert!(ctl.command(-19.9).is_stop());
        assert!(!ctl.command(20.0).is_stop());
    }

    #[test]
    fn error_is_measured_from_frame_center() {
        let ctl = SteeringController::new(SteeringConfig::default());
        assert_eq!(ctl.error_x(200.0, 320), 40.0);
        assert_eq!(ctl.error_x(160.0, 320), 0.0);
    }
}
