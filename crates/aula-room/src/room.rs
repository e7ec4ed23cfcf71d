//! The room state machine: admission, locking, and lazy expiry.
//!
//! A room is a plain synchronous struct mutated in place by exactly one
//! controlling context at a time. Serializing access per room is the
//! embedding layer's job (see the `aula-service` actor); nothing here
//! locks, suspends, or retries.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::clock::{Clock, SystemClock};
use crate::config::{RoomMode, RoomPolicy};
use crate::error::RoomError;
use crate::types::{RoomId, Student, StudentId, Teacher};

/// A single classroom room.
///
/// Two different questions get two different answers:
///
/// - "is a lock *recorded*?": [`mode`](Self::mode) stays `Locked` from
///   a successful [`lock`](Self::lock) until an explicit
///   [`unlock`](Self::unlock), even after the deadline passes. This is
///   the gate for new locks.
/// - "is admission *currently* restricted?":
///   [`is_locked`](Self::is_locked) also consults the clock, so a lock
///   whose deadline passed stops blocking students on its own, without
///   any scheduler flipping the mode. This is the gate for new
///   students.
///
/// Expiry is a comparison against a stored deadline, never a timer.
pub struct Room {
    id: RoomId,
    mode: RoomMode,
    /// Insertion order is arrival order; ids are unique.
    students: Vec<Student>,
    /// Present exactly while a lock is recorded.
    teacher: Option<Teacher>,
    /// Unix seconds; 0 means unset. Meaningful only while a teacher is
    /// present.
    locked_until: u64,
    policy: RoomPolicy,
    clock: Arc<dyn Clock>,
}

impl Room {
    /// Creates an open, empty room on the system clock.
    pub fn new(id: RoomId) -> Self {
        Self::with_clock(id, Arc::new(SystemClock))
    }

    /// Creates an open, empty room reading time from `clock`.
    pub fn with_clock(id: RoomId, clock: Arc<dyn Clock>) -> Self {
        Self {
            id,
            mode: RoomMode::Open,
            students: Vec::new(),
            teacher: None,
            locked_until: 0,
            policy: RoomPolicy::default(),
            clock,
        }
    }

    /// Replaces the admission policy.
    pub fn with_policy(mut self, policy: RoomPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns `true` iff admission is currently restricted: the mode
    /// is `Locked` AND the deadline has not passed.
    ///
    /// Side-effect-free. This is the single source of truth for student
    /// admission; it is NOT the gate for new locks (see
    /// [`lock`](Self::lock)).
    pub fn is_locked(&self) -> bool {
        self.mode == RoomMode::Locked && self.clock.now_unix() < self.locked_until
    }

    /// Locks the room to `teacher` for `duration`, measured from now.
    ///
    /// Rejects when a lock is already *recorded* (`mode == Locked`),
    /// whether or not that lock has expired by time: only an explicit
    /// [`unlock`](Self::unlock) clears the record, and the existing
    /// teacher is never replaced.
    ///
    /// # Errors
    /// [`RoomError::Locked`] if a lock is already recorded.
    pub fn lock(&mut self, teacher: Teacher, duration: Duration) -> Result<(), RoomError> {
        if self.mode == RoomMode::Locked {
            tracing::debug!(
                room_id = %self.id,
                teacher_id = %teacher.teacher_id,
                "lock rejected, room already locked"
            );
            return Err(RoomError::Locked(self.id.clone()));
        }

        let now = self.clock.now_unix();
        self.locked_until = now.saturating_add(duration.as_secs());
        tracing::info!(
            room_id = %self.id,
            teacher_id = %teacher.teacher_id,
            locked_until = self.locked_until,
            "room locked"
        );
        self.teacher = Some(teacher);
        self.mode = RoomMode::Locked;
        Ok(())
    }

    /// Locks the room to `teacher` for the policy's default duration.
    ///
    /// # Errors
    /// [`RoomError::Locked`] if a lock is already recorded.
    pub fn add_teacher(&mut self, teacher: Teacher) -> Result<(), RoomError> {
        let duration = self.policy.default_lock_duration;
        self.lock(teacher, duration)
    }

    /// Ends the session: mode back to `Open`, teacher cleared, deadline
    /// reset to 0, students emptied.
    ///
    /// Unlocking is how a teacher session ends, not a pause; everyone
    /// present leaves with it. Idempotent, safe on an open room.
    pub fn unlock(&mut self) {
        self.mode = RoomMode::Open;
        self.teacher = None;
        self.locked_until = 0;
        self.students.clear();
        tracing::info!(room_id = %self.id, "room unlocked, session cleared");
    }

    /// Admits a student, or refreshes one already present.
    ///
    /// Gated on [`is_locked`](Self::is_locked): a lock whose deadline
    /// has passed does not block, even though the mode still reads
    /// `Locked`. A student with the same id only gets `last_seen`
    /// updated; otherwise the student is appended in arrival order.
    ///
    /// # Errors
    /// [`RoomError::Locked`] if admission is currently restricted.
    pub fn add_student(&mut self, student: Student) -> Result<(), RoomError> {
        if self.is_locked() {
            tracing::debug!(
                room_id = %self.id,
                student_id = %student.student_id,
                "admission rejected, room is locked"
            );
            return Err(RoomError::Locked(self.id.clone()));
        }

        if let Some(existing) = self
            .students
            .iter_mut()
            .find(|s| s.student_id == student.student_id)
        {
            existing.last_seen = student.last_seen;
            tracing::debug!(
                room_id = %self.id,
                student_id = %student.student_id,
                "student re-joined, last_seen updated"
            );
            return Ok(());
        }

        tracing::info!(
            room_id = %self.id,
            student_id = %student.student_id,
            students = self.students.len() + 1,
            "student joined"
        );
        self.students.push(student);
        Ok(())
    }

    /// Removes the student with the given id. Removing an absent id is
    /// a no-op, never an error.
    pub fn remove_student(&mut self, student_id: &StudentId) {
        let before = self.students.len();
        self.students.retain(|s| s.student_id != *student_id);
        if self.students.len() < before {
            tracing::info!(
                room_id = %self.id,
                %student_id,
                students = self.students.len(),
                "student left"
            );
        }
    }

    /// Overwrites the lock deadline (unix seconds).
    ///
    /// Lets the embedding layer extend or cut short an active lock
    /// without touching the teacher record. Meaningful only while a
    /// teacher is present.
    pub fn set_locked_until(&mut self, until: u64) {
        self.locked_until = until;
        tracing::debug!(room_id = %self.id, locked_until = until, "lock deadline adjusted");
    }

    /// The room's id.
    pub fn id(&self) -> &RoomId {
        &self.id
    }

    /// The recorded mode. May lag reality after expiry; see
    /// [`is_locked`](Self::is_locked).
    pub fn mode(&self) -> RoomMode {
        self.mode
    }

    /// Students currently present, in arrival order.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// The teacher holding the recorded lock, if any.
    pub fn teacher(&self) -> Option<&Teacher> {
        self.teacher.as_ref()
    }

    /// The lock deadline in unix seconds (0 = unset).
    pub fn locked_until(&self) -> u64 {
        self.locked_until
    }

    /// A serializable copy of the observable state, for rendering or
    /// broadcasting by whatever transport sits above.
    pub fn snapshot(&self) -> RoomSnapshot {
        RoomSnapshot {
            room_id: self.id.clone(),
            mode: self.mode,
            students: self.students.clone(),
            teacher: self.teacher.clone(),
            locked_until: self.locked_until,
        }
    }
}

/// A point-in-time copy of a room's observable state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSnapshot {
    /// The room's unique id.
    pub room_id: RoomId,
    /// Recorded mode at snapshot time.
    pub mode: RoomMode,
    /// Students present, in arrival order.
    pub students: Vec<Student>,
    /// Teacher holding the recorded lock, if any.
    pub teacher: Option<Teacher>,
    /// Lock deadline in unix seconds (0 = unset).
    pub locked_until: u64,
}

// =========================================================================
// Tests
// =========================================================================
