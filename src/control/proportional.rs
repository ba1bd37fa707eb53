use super::{AgentCommand, Observation};

/// Steers along the maze's optimal path.
///
/// The turn rate is the observed yaw delta itself and the forward speed drops
/// proportionally to it: `speed = 1 - |yaw_delta|`. The host reports yaw deltas
/// in `[-1, 1]`, which keeps the speed within `[0, 1]` without extra clamping.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProportionalController;

impl ProportionalController {
    pub fn speed(yaw_delta: f64) -> f64 { 1.0 - yaw_delta.abs() }

    /// Commands for one control step, in the order they are sent.
    pub fn commands(yaw_delta: f64) -> [AgentCommand; 2] {
        [AgentCommand::Move(Self::speed(yaw_delta)), AgentCommand::Turn(yaw_delta)]
    }

    pub fn react(&self, observation: &Observation) -> [AgentCommand; 2] {
        Self::commands(observation.yaw_delta())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn straight_ahead_is_full_speed() {
        assert!((ProportionalController::speed(0.0) - 1.0).abs() < EPS);
    }

    #[test]
    fn speed_is_symmetric_in_yaw() {
        for yaw in [0.1, 0.25, 0.5, 0.9, 1.0] {
            let left = ProportionalController::speed(-yaw);
            let right = ProportionalController::speed(yaw);
            assert!((left - right).abs() < EPS);
            assert!((right - (1.0 - yaw)).abs() < EPS);
        }
    }

    #[test]
    fn full_turn_stops_forward_motion() {
        assert!(ProportionalController::speed(1.0).abs() < EPS);
        assert!(ProportionalController::speed(-1.0).abs() < EPS);
    }

    #[test]
    fn move_is_sent_before_turn() {
        let [first, second] = ProportionalController.react(&Observation::new(-0.25));
        assert_eq!(first, AgentCommand::Move(0.75));
        assert_eq!(second, AgentCommand::Turn(-0.25));
    }
}
