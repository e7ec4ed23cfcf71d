//! Per-room serialization layer for classroom rooms.
//!
//! A [`Room`](aula_room::Room) must be mutated by one controlling
//! context at a time. This crate provides that context: each room is
//! owned by a dedicated Tokio task (the actor), and everything else
//! drives it through a cloneable [`RoomHandle`].
//!
//! # Key types
//!
//! - [`RoomHandle`]: async access to one room, cheap to clone
//! - [`spawn_room`]: moves a room into its actor task
//! - [`ServiceError`]: room rejections plus channel failures

mod actor;
mod error;

pub use actor::{RoomHandle, spawn_room};
pub use error::ServiceError;
