//! Identity and occupant types for a classroom room.
//!
//! Ids are opaque strings assigned by whatever sits above this crate
//! (an auth layer, a registry). They are wrapped in newtypes so a
//! `StudentId` can never be passed where a `TeacherId` is expected.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A room's unique identifier. Immutable after the room is created.
///
/// `#[serde(transparent)]` makes it serialize as the bare string, so
/// `RoomId("room-1")` is just `"room-1"` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub String);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A student's unique identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(pub String);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A teacher's unique identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeacherId(pub String);

impl fmt::Display for TeacherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A student present in a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Who this is.
    pub student_id: StudentId,
    /// Unix timestamp (seconds) of the student's last activity.
    pub last_seen: u64,
}

/// The teacher holding a room's lock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    /// Who this is.
    pub teacher_id: TeacherId,
    /// Unix timestamp (seconds) at which the teacher joined.
    pub joined_at: u64,
}

/// The role a connected client acts under.
///
/// The embedding layer tags each client with a role and dispatches
/// admission accordingly: students go through `add_student`, teachers
/// through `add_teacher`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Student => write!(f, "student"),
            Self::Teacher => write!(f, "teacher"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_serialize_as_plain_strings() {
        // Transparent newtypes: RoomId("room-1") → "room-1", not {"0":"room-1"}.
        let json = serde_json::to_string(&RoomId("room-1".into())).unwrap();
        assert_eq!(json, "\"room-1\"");

        let json = serde_json::to_string(&StudentId("s-9".into())).unwrap();
        assert_eq!(json, "\"s-9\"");
    }

    #[test]
    fn test_student_id_deserializes_from_plain_string() {
        let id: StudentId = serde_json::from_str("\"s-9\"").unwrap();
        assert_eq!(id, StudentId("s-9".into()));
    }

    #[test]
    fn test_id_display() {
        assert_eq!(RoomId("room-1".into()).to_string(), "room-1");
        assert_eq!(TeacherId("t-1".into()).to_string(), "t-1");
    }

    #[test]
    fn test_student_json_shape() {
        let student = Student {
            student_id: StudentId("student-abc".into()),
            last_seen: 1_708_455_620,
        };
        let json: serde_json::Value = serde_json::to_value(&student).unwrap();

        assert_eq!(json["student_id"], "student-abc");
        assert_eq!(json["last_seen"], 1_708_455_620_u64);
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&Role::Student).unwrap();
        assert_eq!(json, "\"student\"");
        let json = serde_json::to_string(&Role::Teacher).unwrap();
        assert_eq!(json, "\"teacher\"");
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::Student.to_string(), "student");
        assert_eq!(Role::Teacher.to_string(), "teacher");
    }
}
