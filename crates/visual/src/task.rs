use glam::Vec3;
use taskview_common::EntitySnapshot;
use taskview_scene::{BoxGeometry, Color, LabelNode, Material, MeshGroup, ShapeNode};

/// Slab thickness of the footprint shape, in world units. Constant: the
/// entity's z extent only controls how far the slab is lifted off the
/// ground, never its thickness.
pub const SHAPE_THICKNESS: f32 = 0.3;

/// Local z offset of the label above the shape, kept clear of the shape's
/// top face.
pub const LABEL_OFFSET: f32 = 10.0;

/// Errors from visual construction.
#[derive(Debug, thiserror::Error)]
pub enum VisualError {
    #[error("scale factor must be positive and finite, got {0}")]
    InvalidScaleFactor(f32),
    #[error("initial snapshot for entity {0} carries no usable pose")]
    MissingPose(String),
}

/// Integer percent of work completed, measured against the demand the task
/// started with.
///
/// A task created with zero (or negative) initial demand has no work to do:
/// it reports 100 once its remaining demand is zero, and 0 while any demand
/// is left, which only happens on contradictory input. Otherwise the ratio
/// is clamped so the result always lands in `[0, 100]`.
pub fn percent_complete(demand: f64, init_demand: f64) -> u32 {
    if init_demand <= 0.0 {
        return if demand <= 0.0 { 100 } else { 0 };
    }
    let completed = (1.0 - demand / init_demand).clamp(0.0, 1.0);
    (completed * 100.0).floor() as u32
}

/// Green once all demand is served, red while any remains.
pub fn demand_color(demand: f64) -> Color {
    if demand <= 0.0 {
        Color::GREEN
    } else {
        Color::RED
    }
}

/// The 3D proxy for one task entity: a translucent box footprint plus a
/// percent-complete billboard label, parented under a single group.
///
/// Created once per entity at first observation, mutated in place for every
/// later snapshot. Removal is the scene owner's concern; the visual never
/// destroys itself.
#[derive(Debug, Clone)]
pub struct TaskVisual {
    scale_factor: f32,
    /// Captured at construction. Later snapshots only contribute the
    /// remaining demand.
    init_demand: f64,
    mesh: MeshGroup,
}

impl TaskVisual {
    /// Build the visual from the entity's initial snapshot.
    ///
    /// Synchronous: the returned value is ready for scene insertion. The
    /// initial snapshot must carry a usable pose; updates may drop it, but
    /// there is no previous pose to fall back on here.
    pub fn new(snapshot: &EntitySnapshot, scale_factor: f32) -> Result<Self, VisualError> {
        if !scale_factor.is_finite() || scale_factor <= 0.0 {
            return Err(VisualError::InvalidScaleFactor(scale_factor));
        }
        let pose = snapshot
            .pose()
            .ok_or_else(|| VisualError::MissingPose(snapshot.id.clone()))?;

        let extent = snapshot.scale * scale_factor;
        let shape = ShapeNode {
            geometry: BoxGeometry {
                width: extent.x,
                depth: extent.y,
                thickness: SHAPE_THICKNESS,
                lift: extent.z * 0.5,
            },
            material: Material::translucent(demand_color(snapshot.task.demand)),
            rotation: pose.orientation,
        };

        let init_demand = snapshot.task.init_demand;
        let percent = percent_complete(snapshot.task.demand, init_demand);
        let label = LabelNode::new(
            format!("{percent}%"),
            Vec3::new(0.0, 0.0, LABEL_OFFSET),
        );

        let mesh = MeshGroup::new(pose.position * scale_factor, shape, label);

        Ok(Self {
            scale_factor,
            init_demand,
            mesh,
        })
    }

    /// The root group holding the shape and label. The same group is
    /// returned for the visual's whole lifetime; the scene owner tracks it
    /// by [`MeshGroup::id`].
    pub fn mesh(&self) -> &MeshGroup {
        &self.mesh
    }

    /// Uniform render-time multiplier, fixed at construction.
    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    /// The construction-time demand baseline.
    pub fn init_demand(&self) -> f64 {
        self.init_demand
    }

    /// Synchronize the visual with a fresh snapshot of the same entity.
    ///
    /// Pose refresh is best-effort: a movable entity whose snapshot carries
    /// no usable pose simply keeps its last good pose for this tick. Label
    /// and color are overwritten unconditionally from the new demand.
    pub fn update(&mut self, snapshot: &EntitySnapshot) {
        if snapshot.is_movable {
            if let Some(pose) = snapshot.pose() {
                // Tasks never move vertically: z keeps its
                // construction-time value.
                self.mesh.position.x = pose.position.x * self.scale_factor;
                self.mesh.position.y = pose.position.y * self.scale_factor;
                self.mesh.shape.rotation = pose.orientation;
            }
        }

        let percent = percent_complete(snapshot.task.demand, self.init_demand);
        self.mesh.label.set_text(format!("{percent}%"));
        self.mesh.shape.material.color = demand_color(snapshot.task.demand);
    }
}
