//! Wire payloads consumed and produced by the core.
//!
//! Transport concerns (rooms, sessions, framing, broadcast) live outside;
//! only the message bodies that reach the engine and the replies it
//! produces are specified here.

pub mod dispatch;
pub mod messages;

pub use dispatch::dispatch;
pub use messages::{ClientMsg, ServerMsg, PROTOCOL_VERSION};
