use std::fmt::{Display, Formatter};

/// A continuous-movement command understood by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AgentCommand {
    /// Forward speed in `[-1, 1]`.
    Move(f64),
    /// Turn rate in `[-1, 1]`, positive turns right.
    Turn(f64),
}

impl AgentCommand {
    pub fn verb(&self) -> &'static str {
        match self {
            AgentCommand::Move(_) => "move",
            AgentCommand::Turn(_) => "turn",
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            AgentCommand::Move(v) | AgentCommand::Turn(v) => *v,
        }
    }
}

impl Display for AgentCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.verb(), self.value())
    }
}
