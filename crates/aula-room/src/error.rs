//! Error types for the room layer.

use crate::types::RoomId;

/// Errors that can occur during room operations.
///
/// There is deliberately only one kind: the admission/locking policy
/// said no. Callers treat it as a recoverable "room busy" condition,
/// not a fault. Removing an absent student and unlocking an open room
/// are successful no-ops, never errors.
#[derive(Debug, thiserror::Error)]
pub enum RoomError {
    /// The room is locked: no new entries allowed.
    #[error("room {0} is locked: no new entries allowed")]
    Locked(RoomId),
}
