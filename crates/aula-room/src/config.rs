//! Room mode and admission policy.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// RoomMode
// ---------------------------------------------------------------------------

/// The recorded mode of a room.
///
/// ```text
/// Open ──(lock / add_teacher)──→ Locked ──(unlock)──→ Open
/// ```
///
/// - **Open**: the default, idle state. Anyone may join.
/// - **Locked**: a teacher session was recorded and not yet released.
///
/// The mode is the *record* of a lock, not its validity: a Locked room
/// whose deadline has passed still reads Locked here until an explicit
/// unlock. Admission checks go through [`Room::is_locked`], which also
/// consults the clock.
///
/// [`Room::is_locked`]: crate::Room::is_locked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomMode {
    Open,
    Locked,
}

impl RoomMode {
    /// Returns `true` if the recorded mode is Open.
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

impl fmt::Display for RoomMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Locked => write!(f, "locked"),
        }
    }
}

// ---------------------------------------------------------------------------
// RoomPolicy
// ---------------------------------------------------------------------------

/// Tunable admission policy for a room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomPolicy {
    /// Lock duration used by [`Room::add_teacher`], which locks without
    /// an explicit duration.
    ///
    /// [`Room::add_teacher`]: crate::Room::add_teacher
    pub default_lock_duration: Duration,
}

impl Default for RoomPolicy {
    fn default() -> Self {
        Self {
            default_lock_duration: Duration::from_secs(10 * 60),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_mode_is_open() {
        assert!(RoomMode::Open.is_open());
        assert!(!RoomMode::Locked.is_open());
    }

    #[test]
    fn test_room_mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&RoomMode::Open).unwrap(), "\"open\"");
        assert_eq!(
            serde_json::to_string(&RoomMode::Locked).unwrap(),
            "\"locked\""
        );
    }

    #[test]
    fn test_room_mode_display() {
        assert_eq!(RoomMode::Open.to_string(), "open");
        assert_eq!(RoomMode::Locked.to_string(), "locked");
    }

    #[test]
    fn test_room_policy_default_is_ten_minutes() {
        let policy = RoomPolicy::default();
        assert_eq!(policy.default_lock_duration, Duration::from_secs(600));
    }
}
