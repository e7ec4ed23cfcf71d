//! Error types for the service layer.

use aula_room::{RoomError, RoomId};

/// Errors that can occur when driving a room through its handle.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The room itself rejected the operation.
    #[error(transparent)]
    Room(#[from] RoomError),

    /// The room's actor is gone or its command channel is closed.
    #[error("room {0} is unavailable")]
    Unavailable(RoomId),
}
