use core::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A planar velocity command: forward speed plus yaw rate, the two scalars
/// a differential-drive rover consumes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VelocityCommand {
    /// Forward velocity in m/s. Positive drives toward the target.
    pub linear: f32,
    /// Yaw rate in rad/s. Positive turns counter-clockwise.
    pub angular: f32,
    /// When the command was computed, if the producer stamped it.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub stamp: Option<OffsetDateTime>,
}

impl VelocityCommand {
    pub fn new(linear: f32, angular: f32) -> Self {
        Self {
            linear,
            angular,
            stamp: None,
        }
    }

    /// The all-zero command, published when the target is centered.
    pub fn stop() -> Self {
        Self::new(0.0, 0.0)
    }

    pub fn is_stop(&self) -> bool {
        self.linear == 0.0 && self.angular == 0.0
    }

    pub fn stamped(mut self, ts: OffsetDateTime) -> Self {
        self.stamp = Some(ts);
        self
    }
}

impl fmt::Display for VelocityCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "linear={linear:+.3} angular={angular:+.3}",
            linear = self.linear,
            angular = self.angular
        )
    }
}

#[derive(Clone, Debug)]
pub struct ChannelInfo {
    pub name: String,
    pub driver: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_is_all_zero() {
        let cmd = VelocityCommand::stop();
        assert!(cmd.is_stop());
        assert_eq!(cmd.linear, 0.0);
        assert_eq!(cmd.angular, 0.0);
    }

    #[test]
    fn moving_command_is_not_stop() {
        assert!(!VelocityCommand::new(0.1, -0.25).is_stop());
    }

    #[test]
    fn display_shows_both_scalars() {
        let s = VelocityCommand::new(0.1, -0.25).to_string();
        assert!(s.contains("+0.100"));
        assert!(s.contains("-0.250"));
    }
}
