//! Observability infrastructure for SockShop.
//!
//! This crate provides:
//! - `SessionId` - Identifier correlating every log line of one shopping session
//! - `StructuredLogger` - Structured logging with session context
//! - `SessionRecorder` / `SessionPlayer` - Record UI events and play them back

mod logging;
mod replay;
mod session;

pub use logging::*;
pub use replay::*;
pub use session::*;
