//! Adjustment commands sampled once per tick.
//!
//! Input is level-triggered: while a key is held its command is queued again
//! every tick. A queue holds at most one of each command and hands them out in
//! a fixed order, so two keys bound to the same command do not double the step.

/// A live adjustment of the rig.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RigCommand {
    DecreaseCount,
    IncreaseCount,
    IncreaseSeparation,
    DecreaseSeparation,
    IncreaseHeight,
    DecreaseHeight,
}

impl RigCommand {
    /// Every command, in the order a tick applies them.
    pub const ALL: [RigCommand; 6] = [
        RigCommand::DecreaseCount,
        RigCommand::IncreaseCount,
        RigCommand::IncreaseSeparation,
        RigCommand::DecreaseSeparation,
        RigCommand::IncreaseHeight,
        RigCommand::DecreaseHeight,
    ];

    fn order(self) -> usize {
        self as usize
    }
}

/// Commands collected for the current tick.
#[derive(Debug, Default)]
pub struct CommandQueue {
    pending: [bool; 6],
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a command for this tick. Queuing it twice has no extra effect.
    pub fn push(&mut self, command: RigCommand) {
        self.pending[command.order()] = true;
    }

    pub fn is_empty(&self) -> bool {
        !self.pending.iter().any(|p| *p)
    }

    pub fn len(&self) -> usize {
        self.pending.iter().filter(|p| **p).count()
    }

    /// Take the queued commands in application order, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<RigCommand> {
        let commands = RigCommand::ALL
            .into_iter()
            .filter(|c| self.pending[c.order()])
            .collect();
        self.pending = [false; 6];
        commands
    }
}

impl Extend<RigCommand> for CommandQueue {
    fn extend<T: IntoIterator<Item = RigCommand>>(&mut self, iter: T) {
        for command in iter {
            self.push(command);
        }
    }
}
