use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};

use crate::{ChannelInfo, CommandSink, LinkError, Result, VelocityCommand};

/// Appends one JSON object per published command to a file, or to stdout
/// when opened as "-". Useful for piping a command stream into downstream
/// tooling during bench tests.
pub struct JsonlSink {
    writer: Writer,
}

enum Writer {
    File(BufWriter<std::fs::File>),
    Stdout(io::Stdout),
}

impl CommandSink for JsonlSink {
    fn open(name: &str) -> Result<Self> {
        let writer = if name == "-" {
            Writer::Stdout(io::stdout())
        } else {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(name)
                .map_err(|e| LinkError::Io(format!("{name}: {e}")))?;
            Writer::File(BufWriter::new(file))
        };
        Ok(Self { writer })
    }

    fn list() -> Result<Vec<ChannelInfo>> {
        Ok(vec![ChannelInfo {
            name: "-".to_string(),
            driver: "jsonl".to_string(),
        }])
    }

    fn publish(&mut self, cmd: &VelocityCommand) -> Result<()> {
        let line = serde_json::to_string(cmd).map_err(|e| LinkError::Io(e.to_string()))?;
        match &mut self.writer {
            Writer::File(w) => {
                writeln!(w, "{line}").map_err(|e| LinkError::Io(e.to_string()))?;
                w.flush().map_err(|e| LinkError::Io(e.to_string()))
            }
            Writer::Stdout(out) => {
                let mut lock = out.lock();
                writeln!(lock, "{line}").map_err(|e| LinkError::Io(e.to_string()))
            }
        }
    }
}
