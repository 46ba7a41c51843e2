//! Observability for the Luxe storefront.
//!
//! This crate provides:
//! - `SessionId` - Identifier correlating every log line of one shopping session
//! - `StructuredLogger` - Structured logging with session context
//! - `LogSink` - Where rendered entries go (stderr or an in-memory capture)

mod logging;
mod session;

pub use logging::*;
pub use session::SessionId;
