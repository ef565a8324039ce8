use std::collections::BTreeMap;

use taskview_common::EntitySnapshot;
use taskview_scene::MeshGroup;

use crate::task::{TaskVisual, VisualError};

/// Per-entity visual bookkeeping for the viewer.
///
/// Creates a [`TaskVisual`] the first time an entity id appears in the feed
/// and routes every later snapshot for that id to the visual's update.
/// Visuals are only dropped through [`remove`](Self::remove), driven by the
/// feed reporting an entity gone; the registry never drops them on its own.
///
/// Uses BTreeMap for deterministic iteration order.
#[derive(Debug)]
pub struct VisualRegistry {
    scale_factor: f32,
    visuals: BTreeMap<String, TaskVisual>,
}

impl VisualRegistry {
    pub fn new(scale_factor: f32) -> Self {
        Self {
            scale_factor,
            visuals: BTreeMap::new(),
        }
    }

    /// Route a snapshot to its visual, constructing one on first
    /// observation of the entity id.
    ///
    /// The id is only cloned when a new visual is inserted; the steady-state
    /// update path borrows it.
    pub fn apply(&mut self, snapshot: &EntitySnapshot) -> Result<&TaskVisual, VisualError> {
        if let Some(visual) = self.visuals.get_mut(&snapshot.id) {
            visual.update(snapshot);
        } else {
            let visual = TaskVisual::new(snapshot, self.scale_factor)?;
            tracing::debug!(id = %snapshot.id, "created task visual");
            self.visuals.insert(snapshot.id.clone(), visual);
        }
        Ok(&self.visuals[&snapshot.id])
    }

    /// Drop the visual for an entity the feed reports as gone. Returns it so
    /// the scene owner can unregister the mesh group.
    pub fn remove(&mut self, id: &str) -> Option<TaskVisual> {
        let removed = self.visuals.remove(id);
        if removed.is_some() {
            tracing::debug!(id = %id, "removed task visual");
        }
        removed
    }

    pub fn get(&self, id: &str) -> Option<&TaskVisual> {
        self.visuals.get(id)
    }

    pub fn len(&self) -> usize {
        self.visuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visuals.is_empty()
    }

    /// All tracked visuals in deterministic id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TaskVisual)> {
        self.visuals.iter().map(|(id, v)| (id.as_str(), v))
    }

    /// Mesh groups for scene insertion/rendering, in deterministic id order.
    pub fn groups(&self) -> Vec<&MeshGroup> {
        self.visuals.values().map(|v| v.mesh()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Quat, Vec3};
    use taskview_common::TaskState;

    fn snapshot(id: &str, demand: f64) -> EntitySnapshot {
        EntitySnapshot {
            id: id.into(),
            position: Some(Vec3::new(1.0, 2.0, 3.0)),
            orientation: Some(Quat::IDENTITY),
            scale: Vec3::ONE,
            is_movable: false,
            task: TaskState {
                demand,
                init_demand: 100.0,
            },
        }
    }

    #[test]
    fn first_snapshot_creates_visual() {
        let mut registry = VisualRegistry::new(1.0);
        registry.apply(&snapshot("a", 50.0)).unwrap();
        assert_eq!(registry.len(), 1);
        assert!(registry.get("a").is_some());
    }

    #[test]
    fn later_snapshots_update_in_place() {
        let mut registry = VisualRegistry::new(1.0);
        registry.apply(&snapshot("a", 50.0)).unwrap();
        let id = registry.get("a").unwrap().mesh().id();

        registry.apply(&snapshot("a", 0.0)).unwrap();
        assert_eq!(registry.len(), 1);
        let visual = registry.get("a").unwrap();
        assert_eq!(visual.mesh().id(), id);
        assert_eq!(visual.mesh().label.text(), "100%");
    }

    #[test]
    fn apply_alternates_create_and_update_paths() {
        let mut registry = VisualRegistry::new(1.0);
        registry.apply(&snapshot("a", 50.0)).unwrap();
        registry.apply(&snapshot("b", 50.0)).unwrap();
        let updated = registry.apply(&snapshot("a", 0.0)).unwrap();
        assert_eq!(updated.mesh().label.text(), "100%");
        let updated = registry.apply(&snapshot("b", 25.0)).unwrap();
        assert_eq!(updated.mesh().label.text(), "75%");
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn create_error_leaves_registry_unchanged() {
        let mut registry = VisualRegistry::new(1.0);
        let mut bad = snapshot("a", 50.0);
        bad.position = None;
        assert!(registry.apply(&bad).is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn remove_returns_visual() {
        let mut registry = VisualRegistry::new(1.0);
        registry.apply(&snapshot("a", 50.0)).unwrap();

        let removed = registry.remove("a");
        assert!(removed.is_some());
        assert!(registry.is_empty());
        assert!(registry.remove("a").is_none());
    }

    #[test]
    fn groups_in_deterministic_order() {
        let mut registry = VisualRegistry::new(1.0);
        for id in ["c", "a", "b"] {
            registry.apply(&snapshot(id, 50.0)).unwrap();
        }
        let ids: Vec<&str> = registry.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, ["a", "b", "c"]);
        assert_eq!(registry.groups().len(), 3);
    }
}
