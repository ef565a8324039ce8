use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Point-in-time state record for one simulated task, as delivered by the
/// simulation/backend bridge.
///
/// Pose fields are optional on the wire: movable entities occasionally ship
/// updates without them, and the viewer is expected to carry on with the last
/// good pose rather than fail the frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySnapshot {
    /// Feed identity of the entity. Stable across snapshots.
    pub id: String,
    /// World position, pre-scale.
    #[serde(default)]
    pub position: Option<Vec3>,
    /// Unit orientation quaternion.
    #[serde(default)]
    pub orientation: Option<Quat>,
    /// Pre-scale box extents.
    pub scale: Vec3,
    /// Whether pose fields are expected to be present and valid on updates.
    #[serde(default)]
    pub is_movable: bool,
    pub task: TaskState,
}

/// Work-progress state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaskState {
    /// Remaining work quantity. Decreases toward zero as work completes.
    pub demand: f64,
    /// Original work quantity, fixed when the task was created.
    pub init_demand: f64,
}

/// A complete, validated pose extracted from a snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub orientation: Quat,
}

impl EntitySnapshot {
    /// The snapshot's pose, if both fields are present and finite.
    ///
    /// `None` means the snapshot carries no usable pose this tick; the caller
    /// keeps whatever pose it already has.
    pub fn pose(&self) -> Option<Pose> {
        let position = self.position.filter(|p| p.is_finite())?;
        let orientation = self.orientation.filter(|q| q.is_finite())?;
        Some(Pose {
            position,
            orientation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> EntitySnapshot {
        EntitySnapshot {
            id: "task_0".into(),
            position: Some(Vec3::new(1.0, 2.0, 3.0)),
            orientation: Some(Quat::IDENTITY),
            scale: Vec3::ONE,
            is_movable: false,
            task: TaskState {
                demand: 50.0,
                init_demand: 100.0,
            },
        }
    }

    #[test]
    fn pose_present_when_fields_valid() {
        let pose = snapshot().pose().unwrap();
        assert_eq!(pose.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(pose.orientation, Quat::IDENTITY);
    }

    #[test]
    fn pose_absent_when_position_missing() {
        let mut s = snapshot();
        s.position = None;
        assert!(s.pose().is_none());
    }

    #[test]
    fn pose_absent_when_orientation_missing() {
        let mut s = snapshot();
        s.orientation = None;
        assert!(s.pose().is_none());
    }

    #[test]
    fn pose_rejects_non_finite_fields() {
        let mut s = snapshot();
        s.position = Some(Vec3::new(f32::NAN, 0.0, 0.0));
        assert!(s.pose().is_none());

        let mut s = snapshot();
        s.orientation = Some(Quat::from_xyzw(f32::INFINITY, 0.0, 0.0, 1.0));
        assert!(s.pose().is_none());
    }

    #[test]
    fn deserializes_with_missing_optional_fields() {
        let json = r#"{
            "id": "task_7",
            "scale": [4.0, 2.0, 1.0],
            "task": { "demand": 10.0, "init_demand": 40.0 }
        }"#;
        let s: EntitySnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(s.id, "task_7");
        assert!(s.position.is_none());
        assert!(s.orientation.is_none());
        assert!(!s.is_movable);
        assert_eq!(s.task.demand, 10.0);
    }

    #[test]
    fn deserializes_full_snapshot() {
        let json = r#"{
            "id": "task_1",
            "position": [1.0, 2.0, 3.0],
            "orientation": [0.0, 0.0, 0.0, 1.0],
            "scale": [1.0, 1.0, 1.0],
            "is_movable": true,
            "task": { "demand": 0.0, "init_demand": 5.0 }
        }"#;
        let s: EntitySnapshot = serde_json::from_str(json).unwrap();
        assert!(s.is_movable);
        assert!(s.pose().is_some());
    }
}
