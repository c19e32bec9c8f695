use crate::{ChannelInfo, Result, VelocityCommand};

/// A minimal blocking motion-command channel.
pub trait CommandSink {
    /// Open a channel by name (e.g., "cmd_vel", "mock0").
    fn open(name: &str) -> Result<Self>
    where
        Self: Sized;

    /// Attempt to list available channels for this backend.
    fn list() -> Result<Vec<ChannelInfo>>;

    /// Publish one command. Fire-and-forget: returning `Ok` means the
    /// command was handed to the transport, not that anything acted on it.
    fn publish(&mut self, cmd: &VelocityCommand) -> Result<()>;
}
