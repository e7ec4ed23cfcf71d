//! Room actor: an isolated Tokio task that owns a [`Room`].
//!
//! The room state machine holds no synchronization of its own, so
//! something must serialize all mutating calls per room. This layer
//! does it the actor way: each room runs in its own task, and the
//! outside world talks to it through an mpsc channel. Ordering is the
//! channel's FIFO order; core operations never race.

use std::time::Duration;

use aula_room::{Room, RoomError, RoomId, RoomSnapshot, Student, StudentId, Teacher};
use tokio::sync::{mpsc, oneshot};

use crate::ServiceError;

/// Command channel size for room actors.
const CHANNEL_SIZE: usize = 64;

/// Commands sent to a room actor through its channel.
///
/// One variant per room operation. The `oneshot::Sender` in each
/// variant is the reply channel the caller waits on.
pub(crate) enum RoomCommand {
    AddStudent {
        student: Student,
        reply: oneshot::Sender<Result<(), RoomError>>,
    },
    RemoveStudent {
        student_id: StudentId,
        reply: oneshot::Sender<()>,
    },
    Lock {
        teacher: Teacher,
        duration: Duration,
        reply: oneshot::Sender<Result<(), RoomError>>,
    },
    AddTeacher {
        teacher: Teacher,
        reply: oneshot::Sender<Result<(), RoomError>>,
    },
    Unlock {
        reply: oneshot::Sender<()>,
    },
    SetLockedUntil {
        until: u64,
        reply: oneshot::Sender<()>,
    },
    IsLocked {
        reply: oneshot::Sender<bool>,
    },
    Snapshot {
        reply: oneshot::Sender<RoomSnapshot>,
    },
    Shutdown,
}

/// Handle to a running room actor.
///
/// Cheap to clone; every clone addresses the same room. A registry
/// holds one of these per room.
#[derive(Clone)]
pub struct RoomHandle {
    room_id: RoomId,
    sender: mpsc::Sender<RoomCommand>,
}

impl RoomHandle {
    /// The id of the room this handle addresses.
    pub fn room_id(&self) -> &RoomId {
        &self.room_id
    }

    /// Admits a student (or refreshes one already present).
    pub async fn add_student(&self, student: Student) -> Result<(), ServiceError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(RoomCommand::AddStudent {
            student,
            reply: reply_tx,
        })
        .await?;
        self.recv(reply_rx).await??;
        Ok(())
    }

    /// Removes a student; absent ids are a no-op.
    pub async fn remove_student(&self, student_id: StudentId) -> Result<(), ServiceError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(RoomCommand::RemoveStudent {
            student_id,
            reply: reply_tx,
        })
        .await?;
        self.recv(reply_rx).await
    }

    /// Locks the room to `teacher` for `duration`.
    pub async fn lock(&self, teacher: Teacher, duration: Duration) -> Result<(), ServiceError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(RoomCommand::Lock {
            teacher,
            duration,
            reply: reply_tx,
        })
        .await?;
        self.recv(reply_rx).await??;
        Ok(())
    }

    /// Locks the room to `teacher` for the room's default duration.
    pub async fn add_teacher(&self, teacher: Teacher) -> Result<(), ServiceError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(RoomCommand::AddTeacher {
            teacher,
            reply: reply_tx,
        })
        .await?;
        self.recv(reply_rx).await??;
        Ok(())
    }

    /// Ends the session: unlocks and clears the room.
    pub async fn unlock(&self) -> Result<(), ServiceError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(RoomCommand::Unlock { reply: reply_tx }).await?;
        self.recv(reply_rx).await
    }

    /// Overwrites the lock deadline (unix seconds).
    pub async fn set_locked_until(&self, until: u64) -> Result<(), ServiceError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(RoomCommand::SetLockedUntil {
            until,
            reply: reply_tx,
        })
        .await?;
        self.recv(reply_rx).await
    }

    /// Returns whether admission is currently restricted.
    pub async fn is_locked(&self) -> Result<bool, ServiceError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(RoomCommand::IsLocked { reply: reply_tx }).await?;
        self.recv(reply_rx).await
    }

    /// Returns a copy of the room's observable state.
    pub async fn snapshot(&self) -> Result<RoomSnapshot, ServiceError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(RoomCommand::Snapshot { reply: reply_tx }).await?;
        self.recv(reply_rx).await
    }

    /// Tells the room actor to shut down. Pending commands already in
    /// the channel are dropped unanswered.
    pub async fn shutdown(&self) -> Result<(), ServiceError> {
        self.send(RoomCommand::Shutdown).await
    }

    async fn send(&self, cmd: RoomCommand) -> Result<(), ServiceError> {
        self.sender
            .send(cmd)
            .await
            .map_err(|_| ServiceError::Unavailable(self.room_id.clone()))
    }

    async fn recv<T>(&self, reply_rx: oneshot::Receiver<T>) -> Result<T, ServiceError> {
        reply_rx
            .await
            .map_err(|_| ServiceError::Unavailable(self.room_id.clone()))
    }
}

/// The internal room actor. Runs inside a Tokio task and owns the room.
struct RoomActor {
    room: Room,
    receiver: mpsc::Receiver<RoomCommand>,
}

impl RoomActor {
    /// Runs the actor loop, processing commands until shutdown or until
    /// every handle is dropped.
    async fn run(mut self) {
        tracing::info!(room_id = %self.room.id(), "room actor started");

        while let Some(cmd) = self.receiver.recv().await {
            match cmd {
                RoomCommand::AddStudent { student, reply } => {
                    let _ = reply.send(self.room.add_student(student));
                }
                RoomCommand::RemoveStudent { student_id, reply } => {
                    self.room.remove_student(&student_id);
                    let _ = reply.send(());
                }
                RoomCommand::Lock {
                    teacher,
                    duration,
                    reply,
                } => {
                    let _ = reply.send(self.room.lock(teacher, duration));
                }
                RoomCommand::AddTeacher { teacher, reply } => {
                    let _ = reply.send(self.room.add_teacher(teacher));
                }
                RoomCommand::Unlock { reply } => {
                    self.room.unlock();
                    let _ = reply.send(());
                }
                RoomCommand::SetLockedUntil { until, reply } => {
                    self.room.set_locked_until(until);
                    let _ = reply.send(());
                }
                RoomCommand::IsLocked { reply } => {
                    let _ = reply.send(self.room.is_locked());
                }
                RoomCommand::Snapshot { reply } => {
                    let _ = reply.send(self.room.snapshot());
                }
                RoomCommand::Shutdown => {
                    tracing::info!(room_id = %self.room.id(), "room actor shutting down");
                    break;
                }
            }
        }

        tracing::info!(room_id = %self.room.id(), "room actor stopped");
    }
}

/// Moves `room` into a new actor task and returns a handle to it.
pub fn spawn_room(room: Room) -> RoomHandle {
    let (tx, rx) = mpsc::channel(CHANNEL_SIZE);
    let room_id = room.id().clone();

    let actor = RoomActor { room, receiver: rx };
    tokio::spawn(actor.run());

    RoomHandle {
        room_id,
        sender: tx,
    }
}
