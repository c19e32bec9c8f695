//! cmd-link: velocity command publishing abstractions
//!
//! This crate provides the `VelocityCommand` type and the `CommandSink`
//! trait for handing motion commands to a downstream consumer, with
//! feature-gated backends. Publishing is fire-and-forget: there is no
//! acknowledgment and no backpressure, and a slow consumer is outside this
//! crate's control. The default build enables a `mock` backend so binaries
//! compile and run on any host without a robot attached.

mod types;
pub use types::{ChannelInfo, VelocityCommand};

mod error;
pub use error::{LinkError, Result};

mod traits;
pub use traits::CommandSink;

#[cfg(feature = "mock")]
mod mock;
#[cfg(feature = "mock")]
pub use mock::MockSink;

#[cfg(feature = "jsonl")]
mod jsonl;
#[cfg(feature = "jsonl")]
pub use jsonl::JsonlSink;
