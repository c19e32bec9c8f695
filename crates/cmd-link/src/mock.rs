use crate::{ChannelInfo, CommandSink, Result, VelocityCommand};

/// A simple in-process mock sink. Records every published command so tests
/// and demos can inspect the sequence. Each sink instance is independent.
pub struct MockSink {
    name: String,
    published: Vec<VelocityCommand>,
}

impl MockSink {
    /// Commands published so far, in order.
    pub fn published(&self) -> &[VelocityCommand] {
        &self.published
    }

    pub fn last(&self) -> Option<&VelocityCommand> {
        self.published.last()
    }
}

impl CommandSink for MockSink {
    fn open(name: &str) -> Result<Self> {
        Ok(Self {
            name: name.to_string(),
            published: Vec::new(),
        })
    }

    fn list() -> Result<Vec<ChannelInfo>> {
        Ok(vec![ChannelInfo {
            name: "mock0".to_string(),
            driver: "mock".to_string(),
        }])
    }

    fn publish(&mut self, cmd: &VelocityCommand) -> Result<()> {
        tracing::trace!(channel = %self.name, %cmd, "mock publish");
        self.published.push(*cmd);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_commands_in_order() {
        let mut sink = MockSink::open("mock0").unwrap();
        sink.publish(&VelocityCommand::new(0.1, -0.5)).unwrap();
        sink.publish(&VelocityCommand::stop()).unwrap();
        assert_eq!(sink.published().len(), 2);
        assert_eq!(sink.published()[0].angular, -0.5);
        assert!(sink.last().is_some_and(VelocityCommand::is_stop));
    }

    #[test]
    fn lists_the_mock_channel() {
        let channels = MockSink::list().unwrap();
        assert_eq!(channels.len(), 1);
        assert_eq!(channels[0].driver, "mock");
    }
}
