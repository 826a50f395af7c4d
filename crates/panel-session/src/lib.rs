//! Per-device session layer for the Pro Flight panels.
//!
//! A [`PanelSession`] binds one decoded panel state, the session's
//! reset-mode flag and the outgoing transport behind a single
//! reader/writer lock, implementing the concurrency contract the text
//! interface needs: report delivery and text writes are exclusive, text
//! reads are shared — except in reset-after-read mode, where a read
//! mutates counters and locks as a write.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod session;

pub use error::{SessionError, SessionResult};
pub use session::{Panel, PanelSession};
