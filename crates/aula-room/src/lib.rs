//! Access control for a virtual classroom room.
//!
//! A room is a shared space that is either **open** (anyone may join)
//! or **locked** (reserved to one teacher and the students present at
//! lock time, for a bounded duration). This crate is the state machine
//! behind that rule: who may enter, how locking works, and how a lock
//! quietly stops blocking admission once its deadline passes.
//!
//! # Key types
//!
//! - [`Room`]: the state machine itself
//! - [`RoomMode`]: the recorded open/locked mode
//! - [`RoomPolicy`]: tunable policy (default lock duration)
//! - [`Clock`]: the injectable time source ([`SystemClock`],
//!   [`ManualClock`])
//! - [`RoomError`]: the single "room busy" rejection
//!
//! # How it fits in the stack
//!
//! ```text
//! Transport / registry (above)  ← delivers events, owns many rooms
//!     ↕
//! Serialization layer (aula-service)  ← one actor per room
//!     ↕
//! Room state machine (this crate)  ← plain synchronous state + rules
//! ```
//!
//! Everything here is synchronous and unsynchronized; a room instance
//! must be driven by one controlling context at a time.

mod clock;
mod config;
mod error;
mod room;
mod types;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{RoomMode, RoomPolicy};
pub use error::RoomError;
pub use room::{Room, RoomSnapshot};
pub use types::{Role, RoomId, Student, StudentId, Teacher, TeacherId};
