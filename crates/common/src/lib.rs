//! Shared data model: the entity snapshot shape supplied by the backend feed.
//!
//! # Invariants
//! - Snapshots are read-only inputs; nothing in the viewer mutates them.
//! - Pose access goes through [`EntitySnapshot::pose`], which rejects absent
//!   or non-finite fields so consumers never see a partial pose.

pub mod snapshot;

pub use snapshot::{EntitySnapshot, Pose, TaskState};

pub fn crate_info() -> &'static str {
    "taskview-common v0.1.0"
}
