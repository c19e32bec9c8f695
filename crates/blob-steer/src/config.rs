use serde::{Deserialize, Serialize};

use crate::{HsvBounds, SteeringConfig};

/// Everything the follow loop needs, loaded once and passed by reference.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FollowConfig {
    pub hsv: HsvBounds,
    pub steering: SteeringConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_a_blue_target() {
        let cfg = FollowConfig::default();
        assert_eq!(cfg.hsv.lower, [100, 25, 25]);
        assert_eq!(cfg.hsv.upper, [140, 255, 255]);
        assert_eq!(cfg.steering.linear_speed, 0.1);
    }
}
