//! A scripted classroom session, standing in for the embedding layer.
//!
//! Connected clients arrive tagged with a role; students are admitted
//! through `add_student`, teachers through `add_teacher` (which locks
//! the room). The script walks through a full session: open joins, a
//! teacher locking, a student bouncing off, an extension of the lock,
//! and the unlock that ends it all.
//!
//! Run with `RUST_LOG=debug` to see the rejected paths too.

use aula_room::{Clock, Role, Room, RoomId, Student, StudentId, SystemClock, Teacher, TeacherId};
use aula_service::{RoomHandle, ServiceError, spawn_room};
use tracing_subscriber::EnvFilter;

/// Routes one arrival by role. Room rejections are an expected outcome
/// here, not a failure; only a dead actor propagates as an error.
async fn join(handle: &RoomHandle, role: Role, id: &str) -> Result<(), ServiceError> {
    let now = SystemClock.now_unix();
    let outcome = match role {
        Role::Student => {
            handle
                .add_student(Student {
                    student_id: StudentId(id.into()),
                    last_seen: now,
                })
                .await
        }
        Role::Teacher => {
            handle
                .add_teacher(Teacher {
                    teacher_id: TeacherId(id.into()),
                    joined_at: now,
                })
                .await
        }
    };

    match outcome {
        Ok(()) => {
            tracing::info!(%role, id, "admitted");
            Ok(())
        }
        Err(ServiceError::Room(err)) => {
            tracing::warn!(%role, id, %err, "turned away");
            Ok(())
        }
        Err(err) => Err(err),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let room = Room::new(RoomId("room-1".into()));
    let handle = spawn_room(room);

    // The room is open; students trickle in.
    join(&handle, Role::Student, "ada").await?;
    join(&handle, Role::Student, "grace").await?;

    // A teacher arrives and the room locks for the default ten minutes.
    join(&handle, Role::Teacher, "turing").await?;

    // Latecomers bounce off the locked room.
    join(&handle, Role::Student, "linus").await?;
    join(&handle, Role::Teacher, "hopper").await?;

    // The teacher stretches the session by five more minutes.
    let extended = SystemClock.now_unix() + 15 * 60;
    handle.set_locked_until(extended).await?;
    tracing::info!(locked_until = extended, "lock extended");

    // One student leaves mid-session.
    handle.remove_student(StudentId("ada".into())).await?;

    // The teacher ends the session; the room empties and reopens.
    handle.unlock().await?;

    // Now the latecomer gets in.
    join(&handle, Role::Student, "linus").await?;

    let snapshot = handle.snapshot().await?;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    handle.shutdown().await?;
    Ok(())
}
